//! Per-instance face state

use crate::datetime::{DateTime, INVALID_REGISTER};

/// State owned by one face slot for the lifetime of the firmware
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaceState {
    /// Hourly chime toggled by the user
    pub signal_enabled: bool,
    /// Last alarm setting shown on the signal indicator
    pub alarm_enabled: bool,
    /// Day of month of the last supply sample (0 = never sampled)
    pub last_battery_check_day: u8,
    /// Supply was below threshold at the last sample
    pub battery_low: bool,
    /// Register value of the last rendered timestamp
    pub previous_register: u32,
    /// Position of this face in the host's face list
    pub face_index: u8,
}

impl FaceState {
    /// Fresh state for the face at `face_index`
    pub const fn new(face_index: u8) -> Self {
        Self {
            signal_enabled: false,
            alarm_enabled: false,
            last_battery_check_day: 0,
            battery_low: false,
            previous_register: INVALID_REGISTER,
            face_index,
        }
    }

    /// Last rendered timestamp
    pub fn previous(&self) -> DateTime {
        DateTime::from_register(self.previous_register)
    }

    /// Forget the last rendered timestamp so the next refresh redraws everything
    pub fn invalidate(&mut self) {
        self.previous_register = INVALID_REGISTER;
    }

    /// Record `now` as rendered and return what was rendered before
    pub fn swap_previous(&mut self, now: DateTime) -> DateTime {
        let previous = self.previous();
        self.previous_register = now.to_register();
        previous
    }

    /// Check if a supply sample is due for `day`
    pub fn battery_check_due(&self, day: u8) -> bool {
        day != self.last_battery_check_day
    }
}
