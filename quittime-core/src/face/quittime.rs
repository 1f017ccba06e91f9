//! Countdown-to-quitting-time face
//!
//! Outside the countdown window this is a plain clock. Inside it, the
//! hour/minute/second digits count down to the target hour instead.
//! An optional hourly chime and a daily low-battery check ride along.

use quittime_hal::Indicator;

use super::countdown;
use super::events::Event;
use super::format::{self, Frame, SECONDS_COLUMN};
use super::planner::{plan_refresh, DisplayMode, Refresh};
use super::state::FaceState;
use super::{Movement, WatchFace};
use crate::config::{ConfigError, FaceConfig, Settings, TimezoneTable};
use crate::datetime::{DateTime, Duration};

/// The face, with its injected configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuittingTimeFace {
    config: FaceConfig,
    timezones: TimezoneTable,
}

impl Default for QuittingTimeFace {
    fn default() -> Self {
        Self {
            config: FaceConfig::default(),
            timezones: TimezoneTable::STANDARD,
        }
    }
}

impl QuittingTimeFace {
    /// Create a face, rejecting configurations it cannot work with
    pub fn new(config: FaceConfig, timezones: TimezoneTable) -> Result<Self, ConfigError> {
        config.validate()?;
        if timezones.is_empty() {
            return Err(ConfigError::EmptyTimezoneTable);
        }
        Ok(Self { config, timezones })
    }

    /// Display mode for a local hour
    pub fn display_mode(&self, hour: u8) -> DisplayMode {
        DisplayMode::for_hour(hour, &self.config)
    }

    /// Time left until the countdown target, as shown on the display
    pub fn countdown(&self, now: &DateTime, settings: &Settings) -> Duration {
        countdown::remaining(
            now,
            self.config.countdown_target_hour,
            self.utc_offset_s(settings),
        )
    }

    fn utc_offset_s(&self, settings: &Settings) -> i32 {
        match self.timezones.offset_seconds(settings.time_zone) {
            Some(offset) => offset,
            None => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Unknown timezone index {}, using UTC", settings.time_zone);
                0
            }
        }
    }

    fn sync_alarm_indicator<H: Movement>(hw: &mut H, settings: &Settings, state: &mut FaceState) {
        state.alarm_enabled = settings.alarm_enabled;
        hw.set_indicator_state(Indicator::Signal, state.alarm_enabled);
    }

    fn check_battery<H: Movement>(&self, hw: &mut H, now: &DateTime, state: &mut FaceState) {
        if state.battery_check_due(now.day) {
            state.last_battery_check_day = now.day;
            let millivolts = hw.sample_millivolts();
            state.battery_low = millivolts < self.config.low_battery_mv;

            #[cfg(feature = "defmt")]
            defmt::info!("Supply {} mV, low: {}", millivolts, state.battery_low);
        }

        // Asserted only; nothing in this face clears the lap indicator
        if state.battery_low {
            hw.set_indicator(Indicator::Lap);
        }
    }

    fn refresh<H: Movement>(
        &self,
        hw: &mut H,
        settings: &Settings,
        state: &mut FaceState,
        low_energy: bool,
    ) {
        let now = DateTime::from_register(hw.read_register());
        let previous = state.swap_previous(now);

        self.check_battery(hw, &now, state);

        let mode = self.display_mode(now.hour);
        let refresh = plan_refresh(&previous, &now, low_energy);

        #[cfg(feature = "defmt")]
        defmt::debug!("Refresh {} in {} mode", refresh, mode);

        let frame = match (refresh, mode) {
            (Refresh::Seconds, mode) => {
                let seconds = match mode {
                    DisplayMode::Clock => now.second,
                    DisplayMode::Countdown => self.countdown(&now, settings).seconds,
                };
                let [tens, ones] = format::seconds_digits(seconds);
                hw.display_character(tens, SECONDS_COLUMN);
                hw.display_character(ones, SECONDS_COLUMN + 1);
                return;
            }
            (Refresh::MinutesAndSeconds, DisplayMode::Clock) => {
                format::format_minutes(now.minute, now.second)
            }
            (Refresh::MinutesAndSeconds, DisplayMode::Countdown) => {
                let left = self.countdown(&now, settings);
                format::format_minutes(left.minutes, left.seconds)
            }
            (Refresh::Full, DisplayMode::Clock) => {
                format::format_clock(&now, settings, &self.config, low_energy)
            }
            (Refresh::Full, DisplayMode::Countdown) => {
                format::format_countdown(&self.countdown(&now, settings), low_energy)
            }
        };

        match frame {
            Ok(frame) => self.show(hw, &frame),
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Frame skipped: {}", _e);
            }
        }

        if state.alarm_enabled != settings.alarm_enabled {
            Self::sync_alarm_indicator(hw, settings, state);
        }
    }

    fn show<H: Movement>(&self, hw: &mut H, frame: &Frame) {
        if let Some(pm) = frame.pm {
            hw.set_indicator_state(Indicator::Pm, pm);
        }
        if frame.tick_animation && !hw.is_tick_animation_running() {
            hw.start_tick_animation(self.config.tick_animation_ms);
        }

        hw.display_string(frame.as_str(), frame.column);
        if frame.leading_zero {
            hw.display_string("0", format::HOUR_COLUMN);
        }
    }
}

impl WatchFace for QuittingTimeFace {
    type State = FaceState;

    fn setup<'a>(&self, index: u8, slot: &'a mut Option<FaceState>) -> &'a mut FaceState {
        slot.get_or_insert_with(|| FaceState::new(index))
    }

    fn activate<H: Movement>(&self, hw: &mut H, settings: &Settings, state: &mut FaceState) {
        if hw.is_tick_animation_running() {
            hw.stop_tick_animation();
        }

        if self.config.uses_24h(settings.clock_24h) {
            hw.set_indicator(Indicator::TwentyFourHour);
        }

        hw.set_indicator_state(Indicator::Bell, state.signal_enabled);
        Self::sync_alarm_indicator(hw, settings, state);

        hw.set_colon();
        state.invalidate();
    }

    fn handle<H: Movement>(
        &self,
        event: Event,
        hw: &mut H,
        settings: &Settings,
        state: &mut FaceState,
    ) -> bool {
        match event {
            Event::Activate | Event::Tick | Event::LowEnergyUpdate => {
                self.refresh(hw, settings, state, event.is_low_energy());
            }
            Event::AlarmLongPress => {
                state.signal_enabled = !state.signal_enabled;
                hw.set_indicator_state(Indicator::Bell, state.signal_enabled);

                #[cfg(feature = "defmt")]
                defmt::info!("Hourly signal {}", state.signal_enabled);
            }
            Event::BackgroundTask => hw.play_signal(),
            _ => return hw.default_loop_handler(event, settings),
        }

        true
    }

    fn resign<H: Movement>(&self, _hw: &mut H, _settings: &Settings, _state: &mut FaceState) {}

    fn wants_background_task<H: Movement>(
        &self,
        hw: &mut H,
        _settings: &Settings,
        state: &FaceState,
    ) -> bool {
        if !state.signal_enabled {
            return false;
        }
        DateTime::from_register(hw.read_register()).minute == 0
    }
}
