pub mod date_range_picker;
pub mod month_grid;

pub use date_range_picker::*;
pub use month_grid::*;
