//! Document-level DOM plumbing the widget needs beyond what gets rendered:
//! scoped global listeners, used for outside-click dismissal.

pub mod errors;
pub mod listener;

pub use errors::DomError;
pub use listener::{event_targets_inside, DocumentListener};
