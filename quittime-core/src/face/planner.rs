//! Refresh planner
//!
//! Decides how much of the display a refresh has to touch, and which of
//! the two renderings is active for the current hour.

use crate::config::FaceConfig;
use crate::datetime::DateTime;

/// What the main digits show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayMode {
    /// Weekday, day and time of day
    Clock,
    /// Time left until the countdown target
    Countdown,
}

impl DisplayMode {
    /// Mode for a local hour
    ///
    /// Recomputed on every refresh; never cached across calls.
    pub fn for_hour(hour: u8, config: &FaceConfig) -> Self {
        if config.is_countdown_hour(hour) {
            DisplayMode::Countdown
        } else {
            DisplayMode::Clock
        }
    }
}

/// Granularity of a display refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Refresh {
    /// Only the two seconds cells changed
    Seconds,
    /// Minutes and seconds changed; weekday, day and hour are intact
    MinutesAndSeconds,
    /// Rebuild the whole row
    Full,
}

/// Choose the smallest update that brings the display from `previous` to `current`
///
/// Low-energy wakes never take the partial paths: the seconds cells are
/// blank in that mode and the tick animation has to be checked.
pub fn plan_refresh(previous: &DateTime, current: &DateTime, low_energy: bool) -> Refresh {
    if low_energy {
        Refresh::Full
    } else if current.minute_key() == previous.minute_key() {
        Refresh::Seconds
    } else if current.hour_key() == previous.hour_key() {
        Refresh::MinutesAndSeconds
    } else {
        Refresh::Full
    }
}
