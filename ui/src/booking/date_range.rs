use chrono::NaiveDate;

/// Date range driven by the picker's two-click selection.
///
/// The first click anchors a single-day range and the next click completes
/// it, swapping the endpoints when the second day lands before the first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateRangeSelection {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    awaiting_end: bool,
}

impl DateRangeSelection {
    pub fn select_day(&mut self, day: NaiveDate) {
        if self.awaiting_end {
            if let Some(start) = self.start_date {
                let (first, second) = if day < start { (day, start) } else { (start, day) };
                self.start_date = Some(first);
                self.end_date = Some(second);
                self.awaiting_end = false;
                return;
            }
        }
        self.start_date = Some(day);
        self.end_date = Some(day);
        self.awaiting_end = true;
    }

    /// Text for the dates field, `None` until a day has been picked.
    /// A single-day range renders as one date, anything longer as
    /// "start - end".
    pub fn display_label(&self) -> Option<String> {
        let start = self.start_date?;
        let end = self.end_date.unwrap_or(start);
        if start == end {
            Some(format_day(start))
        } else {
            Some(format!("{} - {}", format_day(start), format_day(end)))
        }
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => day >= start && day <= end,
            (Some(start), None) => day == start,
            _ => false,
        }
    }

    pub fn is_start(&self, day: NaiveDate) -> bool {
        self.start_date == Some(day)
    }

    pub fn is_end(&self, day: NaiveDate) -> bool {
        self.end_date == Some(day)
    }
}

/// Formats a day the way the dates field shows it, e.g. "Jun 01".
pub fn format_day(day: NaiveDate) -> String {
    day.format("%b %d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_empty_selection_has_no_label() {
        let selection = DateRangeSelection::default();
        assert_eq!(selection.display_label(), None);
    }

    #[test]
    fn test_first_click_anchors_a_single_day_range() {
        let mut selection = DateRangeSelection::default();
        selection.select_day(date(2024, 6, 1));
        assert_eq!(selection.start_date, Some(date(2024, 6, 1)));
        assert_eq!(selection.end_date, Some(date(2024, 6, 1)));
        assert_eq!(selection.display_label().as_deref(), Some("Jun 01"));
    }

    #[test]
    fn test_second_click_completes_the_range() {
        let mut selection = DateRangeSelection::default();
        selection.select_day(date(2024, 6, 1));
        selection.select_day(date(2024, 6, 5));
        assert_eq!(selection.display_label().as_deref(), Some("Jun 01 - Jun 05"));
    }

    #[test]
    fn test_earlier_second_click_swaps_the_endpoints() {
        let mut selection = DateRangeSelection::default();
        selection.select_day(date(2024, 6, 5));
        selection.select_day(date(2024, 6, 1));
        assert_eq!(selection.start_date, Some(date(2024, 6, 1)));
        assert_eq!(selection.end_date, Some(date(2024, 6, 5)));
    }

    #[test]
    fn test_clicking_the_same_day_twice_completes_a_single_day_range() {
        let mut selection = DateRangeSelection::default();
        selection.select_day(date(2024, 6, 1));
        selection.select_day(date(2024, 6, 1));
        assert_eq!(selection.display_label().as_deref(), Some("Jun 01"));
        // The range is complete, so the next click starts over.
        selection.select_day(date(2024, 7, 10));
        assert_eq!(selection.start_date, Some(date(2024, 7, 10)));
        assert_eq!(selection.end_date, Some(date(2024, 7, 10)));
    }

    #[test]
    fn test_third_click_starts_a_fresh_range() {
        let mut selection = DateRangeSelection::default();
        selection.select_day(date(2024, 6, 1));
        selection.select_day(date(2024, 6, 5));
        selection.select_day(date(2024, 6, 20));
        assert_eq!(selection.start_date, Some(date(2024, 6, 20)));
        assert_eq!(selection.end_date, Some(date(2024, 6, 20)));
        assert_eq!(selection.display_label().as_deref(), Some("Jun 20"));
    }

    #[test]
    fn test_contains_covers_the_inclusive_range() {
        let mut selection = DateRangeSelection::default();
        selection.select_day(date(2024, 6, 1));
        selection.select_day(date(2024, 6, 5));
        assert!(selection.contains(date(2024, 6, 1)));
        assert!(selection.contains(date(2024, 6, 3)));
        assert!(selection.contains(date(2024, 6, 5)));
        assert!(!selection.contains(date(2024, 6, 6)));
    }

    #[test]
    fn test_range_spanning_months_formats_both_months() {
        let mut selection = DateRangeSelection::default();
        selection.select_day(date(2024, 6, 28));
        selection.select_day(date(2024, 7, 2));
        assert_eq!(selection.display_label().as_deref(), Some("Jun 28 - Jul 02"));
    }
}
