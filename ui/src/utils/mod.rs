//! Utility Functions and Cross-Cutting Concerns
//!
//! This module provides utility functions and macros used throughout the widget:
//!
//! - **calendar**: chrono month math behind the date-range picker grid
//! - **console_macros**: WASM-compatible logging macros for browser console output
//! - **validation**: error-state to class-name mapping for form controls

pub mod calendar;
pub mod console_macros;
pub mod validation;

pub use calendar::*;
pub use validation::*;
