//! Month math behind the date-range picker grid.
//!
//! Everything here is pure chrono arithmetic so the grid layout can be
//! tested without a browser.

use chrono::{Datelike, Local, Months, NaiveDate};

/// Column headers for the Sunday-first grid.
pub const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the current month, used as the picker's initial view.
pub fn current_month_start() -> NaiveDate {
    month_start(Local::now().date_naive())
}

/// First day of the month after the one containing `month`.
pub fn next_month(month: NaiveDate) -> NaiveDate {
    let start = month_start(month);
    start.checked_add_months(Months::new(1)).unwrap_or(start)
}

/// First day of the month before the one containing `month`.
pub fn previous_month(month: NaiveDate) -> NaiveDate {
    let start = month_start(month);
    start.checked_sub_months(Months::new(1)).unwrap_or(start)
}

pub fn days_in_month(month: NaiveDate) -> u32 {
    let start = month_start(month);
    next_month(start).signed_duration_since(start).num_days() as u32
}

/// Header title for the picker, e.g. "June 2024".
pub fn month_title(month: NaiveDate) -> String {
    month.format("%B %Y").to_string()
}

/// Sunday-first week rows for the month containing `month`. Slots before
/// the first and after the last day of the month are `None`.
pub fn weeks_for_month(month: NaiveDate) -> Vec<[Option<NaiveDate>; 7]> {
    let start = month_start(month);
    let offset = start.weekday().num_days_from_sunday() as usize;
    let days = days_in_month(start);

    let mut weeks = Vec::with_capacity(6);
    let mut week: [Option<NaiveDate>; 7] = [None; 7];
    let mut slot = offset;
    for day in 1..=days {
        week[slot] = start.with_day(day);
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [None; 7];
            slot = 0;
        }
    }
    if slot > 0 {
        weeks.push(week);
    }
    weeks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_month_start_clamps_to_day_one() {
        assert_eq!(month_start(date(2024, 6, 17)), date(2024, 6, 1));
        assert_eq!(month_start(date(2024, 6, 1)), date(2024, 6, 1));
    }

    #[test]
    fn test_month_navigation_rolls_over_year_boundaries() {
        assert_eq!(next_month(date(2024, 12, 15)), date(2025, 1, 1));
        assert_eq!(previous_month(date(2025, 1, 15)), date(2024, 12, 1));
    }

    #[test]
    fn test_days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(date(2024, 2, 1)), 29);
        assert_eq!(days_in_month(date(2023, 2, 1)), 28);
        assert_eq!(days_in_month(date(2024, 6, 1)), 30);
    }

    #[test]
    fn test_weeks_for_june_2024_start_on_saturday() {
        // June 1, 2024 is a Saturday, so the first row has six empty slots.
        let weeks = weeks_for_month(date(2024, 6, 1));
        assert_eq!(weeks.len(), 6);
        assert_eq!(weeks[0][..6], [None; 6]);
        assert_eq!(weeks[0][6], Some(date(2024, 6, 1)));
        // June 30 is a Sunday: first slot of the last row, rest empty.
        assert_eq!(weeks[5][0], Some(date(2024, 6, 30)));
        assert_eq!(weeks[5][1..], [None; 6]);
    }

    #[test]
    fn test_weeks_cover_every_day_exactly_once() {
        let weeks = weeks_for_month(date(2024, 2, 1));
        let days: Vec<NaiveDate> = weeks.iter().flatten().filter_map(|slot| *slot).collect();
        assert_eq!(days.len(), 29);
        assert_eq!(days.first(), Some(&date(2024, 2, 1)));
        assert_eq!(days.last(), Some(&date(2024, 2, 29)));
    }

    #[test]
    fn test_month_title_formats_name_and_year() {
        assert_eq!(month_title(date(2024, 6, 1)), "June 2024");
    }

    #[test]
    fn test_current_month_start_is_day_one() {
        assert_eq!(current_month_start().day(), 1);
    }
}
