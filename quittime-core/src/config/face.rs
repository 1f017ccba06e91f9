//! Face configuration
//!
//! Build-time choices for a particular device. `Default` gives the
//! behaviour the face ships with.

/// Default hour (inclusive) at which the countdown takes over
pub const DEFAULT_COUNTDOWN_START_HOUR: u8 = 9;

/// Default hour the countdown runs to
pub const DEFAULT_COUNTDOWN_TARGET_HOUR: u8 = 17;

/// Default supply voltage below which the low-battery indicator is shown
pub const DEFAULT_LOW_BATTERY_MV: u16 = 2200;

/// Default blink period of the low-energy tick animation
pub const DEFAULT_TICK_ANIMATION_MS: u32 = 500;

/// Errors in a face configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Countdown start is not before the target, or the target is past 23
    InvalidCountdownWindow,
    /// Low-battery threshold is zero
    InvalidBatteryThreshold,
    /// Tick animation period is zero
    InvalidTickInterval,
    /// Timezone table has no entries
    EmptyTimezoneTable,
}

/// Per-device face configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaceConfig {
    /// Device only supports 24-hour time; the 12-hour setting is ignored
    pub force_24h: bool,
    /// First hour of the countdown window
    pub countdown_start_hour: u8,
    /// Hour the countdown runs to; also the end of the window
    pub countdown_target_hour: u8,
    /// Low-battery threshold in millivolts
    pub low_battery_mv: u16,
    /// Tick animation period in low-energy mode
    pub tick_animation_ms: u32,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            force_24h: false,
            countdown_start_hour: DEFAULT_COUNTDOWN_START_HOUR,
            countdown_target_hour: DEFAULT_COUNTDOWN_TARGET_HOUR,
            low_battery_mv: DEFAULT_LOW_BATTERY_MV,
            tick_animation_ms: DEFAULT_TICK_ANIMATION_MS,
        }
    }
}

impl FaceConfig {
    /// Configuration for the 24-hour-only device variant
    pub fn twenty_four_hour_only() -> Self {
        Self {
            force_24h: true,
            ..Self::default()
        }
    }

    /// Check the configuration for values the face cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.countdown_start_hour >= self.countdown_target_hour
            || self.countdown_target_hour > 23
        {
            return Err(ConfigError::InvalidCountdownWindow);
        }

        if self.low_battery_mv == 0 {
            return Err(ConfigError::InvalidBatteryThreshold);
        }

        if self.tick_animation_ms == 0 {
            return Err(ConfigError::InvalidTickInterval);
        }

        Ok(())
    }

    /// Check if `hour` falls inside the countdown window
    pub fn is_countdown_hour(&self, hour: u8) -> bool {
        hour >= self.countdown_start_hour && hour < self.countdown_target_hour
    }

    /// Whether time is shown in 24-hour form under these settings
    pub fn uses_24h(&self, clock_24h: bool) -> bool {
        self.force_24h || clock_24h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(FaceConfig::default().validate(), Ok(()));
        assert_eq!(FaceConfig::twenty_four_hour_only().validate(), Ok(()));
    }

    #[test]
    fn test_window_validation() {
        let inverted = FaceConfig {
            countdown_start_hour: 17,
            countdown_target_hour: 9,
            ..FaceConfig::default()
        };
        assert_eq!(inverted.validate(), Err(ConfigError::InvalidCountdownWindow));

        let past_midnight = FaceConfig {
            countdown_target_hour: 24,
            ..FaceConfig::default()
        };
        assert_eq!(
            past_midnight.validate(),
            Err(ConfigError::InvalidCountdownWindow)
        );
    }

    #[test]
    fn test_threshold_validation() {
        let config = FaceConfig {
            low_battery_mv: 0,
            ..FaceConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidBatteryThreshold));

        let config = FaceConfig {
            tick_animation_ms: 0,
            ..FaceConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidTickInterval));
    }

    #[test]
    fn test_countdown_window_edges() {
        let config = FaceConfig::default();
        assert!(!config.is_countdown_hour(8));
        assert!(config.is_countdown_hour(9));
        assert!(config.is_countdown_hour(16));
        assert!(!config.is_countdown_hour(17));
    }

    #[test]
    fn test_forced_24h() {
        assert!(FaceConfig::twenty_four_hour_only().uses_24h(false));
        assert!(!FaceConfig::default().uses_24h(false));
        assert!(FaceConfig::default().uses_24h(true));
    }
}
