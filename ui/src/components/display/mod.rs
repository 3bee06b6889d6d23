pub mod placeholder_panel;

pub use placeholder_panel::*;
