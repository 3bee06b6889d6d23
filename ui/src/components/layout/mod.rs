pub mod sub_nav;
pub mod tab_bar;

pub use sub_nav::*;
pub use tab_bar::*;
