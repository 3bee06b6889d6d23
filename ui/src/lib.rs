//! This crate contains all shared UI for the flight booking widget.

pub mod app;
pub use app::FlightBooking;

pub mod booking;
pub mod components;
pub mod services;
pub mod utils;
