pub mod cabin_class_select;
pub mod flight_search_form;

pub use cabin_class_select::*;
pub use flight_search_form::*;
