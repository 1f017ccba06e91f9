//! Date-time model
//!
//! The RTC hands out one packed register word. [`DateTime`] unpacks it
//! and provides the comparison keys and calendar arithmetic the face
//! needs.

pub mod calendar;
pub mod packed;

pub use calendar::{abbreviation, convert_to_unix, Duration, Weekday};
pub use packed::{DateTime, INVALID_REGISTER, MAX_YEAR, REFERENCE_YEAR};
