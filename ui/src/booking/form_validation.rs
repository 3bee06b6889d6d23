use std::collections::BTreeMap;

use crate::booking::types::BookingFormValues;

pub const FROM_REQUIRED: &str = "From is required";
pub const TO_REQUIRED: &str = "To is required";
pub const DATES_REQUIRED: &str = "Dates are required";
pub const CLASS_REQUIRED: &str = "Class is required";

/// Fields the schema can report an error against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum BookingField {
    From,
    To,
    Dates,
    Class,
}

impl BookingField {
    pub fn name(&self) -> &'static str {
        match self {
            BookingField::From => "from",
            BookingField::To => "to",
            BookingField::Dates => "dates",
            BookingField::Class => "class",
        }
    }
}

/// Field-to-message mapping from a validation pass. Empty means valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<BookingField, &'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn message(&self, field: BookingField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn insert(&mut self, field: BookingField, message: &'static str) {
        self.errors.insert(field, message);
    }

    pub fn iter(&self) -> impl Iterator<Item = (BookingField, &'static str)> + '_ {
        self.errors.iter().map(|(field, message)| (*field, *message))
    }
}

/// Required-field schema for the search form.
///
/// Pure: callers decide whether the result blocks anything. Whitespace-only
/// text counts as missing, and travelers is intentionally unvalidated.
pub fn validate_booking(values: &BookingFormValues) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if values.from.trim().is_empty() {
        errors.insert(BookingField::From, FROM_REQUIRED);
    }
    if values.to.trim().is_empty() {
        errors.insert(BookingField::To, TO_REQUIRED);
    }
    if values.dates.trim().is_empty() {
        errors.insert(BookingField::Dates, DATES_REQUIRED);
    }
    if values.class.is_none() {
        errors.insert(BookingField::Class, CLASS_REQUIRED);
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::types::CabinClass;

    fn filled_values() -> BookingFormValues {
        BookingFormValues {
            from: "Los Angeles LAX".to_string(),
            to: "New York JFK".to_string(),
            dates: "Jun 01 - Jun 05".to_string(),
            ..BookingFormValues::default()
        }
    }

    #[test]
    fn test_default_values_fail_on_every_required_text_field() {
        let errors = validate_booking(&BookingFormValues::default());
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.message(BookingField::From), Some(FROM_REQUIRED));
        assert_eq!(errors.message(BookingField::To), Some(TO_REQUIRED));
        assert_eq!(errors.message(BookingField::Dates), Some(DATES_REQUIRED));
        assert_eq!(errors.message(BookingField::Class), None);
    }

    #[test]
    fn test_filled_values_pass() {
        let errors = validate_booking(&filled_values());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_whitespace_only_text_counts_as_missing() {
        let mut values = filled_values();
        values.from = "   ".to_string();
        let errors = validate_booking(&values);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message(BookingField::From), Some(FROM_REQUIRED));
    }

    #[test]
    fn test_missing_class_is_reported() {
        let mut values = filled_values();
        values.class = None;
        let errors = validate_booking(&values);
        assert_eq!(errors.message(BookingField::Class), Some(CLASS_REQUIRED));
    }

    #[test]
    fn test_empty_travelers_is_not_an_error() {
        let mut values = filled_values();
        values.travelers = String::new();
        values.class = Some(CabinClass::Business);
        assert!(validate_booking(&values).is_empty());
    }

    #[test]
    fn test_iter_yields_fields_in_a_stable_order() {
        let errors = validate_booking(&BookingFormValues::default());
        let fields: Vec<BookingField> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(
            fields,
            vec![BookingField::From, BookingField::To, BookingField::Dates]
        );
    }
}
