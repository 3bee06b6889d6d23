//! Booking widget domain: form state, the event reducer, the validation
//! schema and the submission path.
//!
//! Components stay render-only. Every behavior the widget has is a state
//! transition in here, dispatched as a [`BookingAction`], which keeps the
//! whole interaction surface testable off the browser.

pub mod config;
pub mod date_range;
pub mod form_validation;
pub mod submit;
pub mod types;

pub use config::BookingConfig;
pub use date_range::{format_day, DateRangeSelection};
pub use form_validation::{validate_booking, BookingField, FieldErrors};
pub use submit::submit_booking;
pub use types::*;
