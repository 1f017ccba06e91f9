//! Board-agnostic logic for the Quittime watch face
//!
//! The face shows the time of day outside working hours and a countdown
//! to 17:00 during them. This crate contains everything that does not
//! depend on a specific watch:
//!
//! - Packed date-time register model and calendar arithmetic
//! - Settings, timezone table and face configuration
//! - Host event model
//! - Refresh planner (seconds / minutes / full redraw)
//! - Clock and countdown formatters
//! - Face lifecycle and event dispatch

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod datetime;
pub mod face;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{ConfigError, FaceConfig, Settings, TimezoneTable};
pub use datetime::{DateTime, Duration, Weekday};
pub use face::{Event, FaceState, Movement, QuittingTimeFace, WatchFace};
