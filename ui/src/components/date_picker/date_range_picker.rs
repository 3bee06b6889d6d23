use chrono::NaiveDate;
use dioxus::prelude::*;

use super::month_grid::MonthGrid;
use crate::booking::DateRangeSelection;
use crate::utils::calendar::{month_title, WEEKDAY_LABELS};

#[derive(Props, PartialEq, Clone)]
pub struct DateRangePickerProps {
    pub selection: DateRangeSelection,
    /// First day of the month the grid shows.
    pub month: NaiveDate,
    pub on_select_day: EventHandler<NaiveDate>,
    pub on_previous_month: EventHandler<()>,
    pub on_next_month: EventHandler<()>,
}

/// Single-month range picker: first click anchors the range, the second
/// click completes it. Month navigation stays inside the popover.
#[component]
pub fn DateRangePicker(props: DateRangePickerProps) -> Element {
    rsx! {
        div {
            class: "date-range-picker",
            div {
                class: "picker-header",
                button {
                    r#type: "button",
                    class: "picker-nav-button",
                    onclick: move |_| props.on_previous_month.call(()),
                    "‹"
                }
                span {
                    class: "picker-month-title",
                    "{month_title(props.month)}"
                }
                button {
                    r#type: "button",
                    class: "picker-nav-button",
                    onclick: move |_| props.on_next_month.call(()),
                    "›"
                }
            }
            div {
                class: "weekday-row",
                for label in WEEKDAY_LABELS {
                    span {
                        class: "weekday-label",
                        "{label}"
                    }
                }
            }
            MonthGrid {
                month: props.month,
                selection: props.selection,
                on_select_day: props.on_select_day,
            }
        }
    }
}
