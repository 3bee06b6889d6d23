use chrono::{Datelike, NaiveDate};
use dioxus::prelude::*;

use crate::booking::DateRangeSelection;
use crate::utils::calendar::weeks_for_month;

#[derive(Props, PartialEq, Clone)]
pub struct MonthGridProps {
    /// First day of the month to render.
    pub month: NaiveDate,
    pub selection: DateRangeSelection,
    pub on_select_day: EventHandler<NaiveDate>,
}

/// Sunday-first day grid for one month. Cells outside the month render as
/// empty spacers so the columns line up with the weekday header.
#[component]
pub fn MonthGrid(props: MonthGridProps) -> Element {
    let selection = props.selection;
    let on_select_day = props.on_select_day;

    rsx! {
        div {
            class: "month-grid",
            for week in weeks_for_month(props.month) {
                div {
                    class: "week-row",
                    for cell in week {
                        if let Some(day) = cell {
                            button {
                                r#type: "button",
                                class: day_class(&selection, day),
                                onclick: move |_| on_select_day.call(day),
                                "{day.day()}"
                            }
                        } else {
                            span { class: "day-empty" }
                        }
                    }
                }
            }
        }
    }
}

fn day_class(selection: &DateRangeSelection, day: NaiveDate) -> &'static str {
    let start = selection.is_start(day);
    let end = selection.is_end(day);
    if start && end {
        "day-button day-range-start day-range-end"
    } else if start {
        "day-button day-range-start"
    } else if end {
        "day-button day-range-end"
    } else if selection.contains(day) {
        "day-button day-in-range"
    } else {
        "day-button"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_day_class_marks_range_positions() {
        let mut selection = DateRangeSelection::default();
        selection.select_day(date(2024, 6, 1));
        selection.select_day(date(2024, 6, 5));

        assert_eq!(
            day_class(&selection, date(2024, 6, 1)),
            "day-button day-range-start"
        );
        assert_eq!(
            day_class(&selection, date(2024, 6, 5)),
            "day-button day-range-end"
        );
        assert_eq!(
            day_class(&selection, date(2024, 6, 3)),
            "day-button day-in-range"
        );
        assert_eq!(day_class(&selection, date(2024, 6, 10)), "day-button");
    }

    #[test]
    fn test_day_class_for_a_single_day_range() {
        let mut selection = DateRangeSelection::default();
        selection.select_day(date(2024, 6, 1));
        assert_eq!(
            day_class(&selection, date(2024, 6, 1)),
            "day-button day-range-start day-range-end"
        );
    }
}
