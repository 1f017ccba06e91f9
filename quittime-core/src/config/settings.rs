//! Host settings consumed by the face
//!
//! The host persists these alongside the rest of its settings; the face
//! only reads them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// User settings shared across watch faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Settings {
    /// Show 24-hour time
    pub clock_24h: bool,
    /// In 24-hour mode, show a leading zero before single-digit hours
    pub clock_24h_leading_zero: bool,
    /// The daily alarm is armed
    pub alarm_enabled: bool,
    /// Index into the timezone table
    pub time_zone: u8,
}
