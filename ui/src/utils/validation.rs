/// Input class for a field, switching to the invalid variant when the
/// schema reported a message for it.
pub fn field_input_class(error: Option<&str>) -> &'static str {
    if error.is_some() {
        "field-input field-input-invalid"
    } else {
        "field-input"
    }
}

/// The dates trigger shows placeholder-styled text until a range exists.
pub fn dates_value_class(has_value: bool) -> &'static str {
    if has_value {
        "dates-value"
    } else {
        "dates-placeholder"
    }
}
