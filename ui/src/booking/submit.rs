use crate::booking::form_validation::{validate_booking, FieldErrors};
use crate::booking::types::BookingFormValues;
use crate::{console_error, console_info, console_warn};

/// Runs the schema and logs the submission to the browser console.
///
/// Submission never blocks on validation: the values are logged as-is and
/// the reported errors go back to the caller for inline display.
pub fn submit_booking(values: &BookingFormValues) -> FieldErrors {
    let errors = validate_booking(values);

    match serde_json::to_string(values) {
        Ok(json) => console_info!("Form data: {}", json),
        Err(err) => console_error!("Form data could not be serialized: {}", err),
    }

    for (field, message) in errors.iter() {
        console_warn!("Validation failed for {}: {}", field.name(), message);
    }

    errors
}
