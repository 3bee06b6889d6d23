pub mod field_error;
pub mod field_input;

pub use field_error::*;
pub use field_input::*;
