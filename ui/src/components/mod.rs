//! User Interface Components
//!
//! This module contains the Dioxus components that make up the booking
//! widget:
//!
//! - **layout**: top-level tab bar and the Book tab's sub-navigation
//! - **forms**: the flight search panel and its cabin class select
//! - **input**: labeled text inputs and inline error lines
//! - **date_picker**: the popover date-range picker
//! - **display**: static placeholder panels for areas without real content
//!
//! Components stay render-only: they read state and emit actions, and the
//! reducer in [`crate::booking`] owns every transition.

pub mod date_picker;
pub mod display;
pub mod forms;
pub mod input;
pub mod layout;
