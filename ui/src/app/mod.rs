pub mod flight_booking;

pub use flight_booking::FlightBooking;
