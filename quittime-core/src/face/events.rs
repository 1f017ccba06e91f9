//! Events delivered by the host loop

/// Events the host delivers to the active face, one at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Redraw events
    /// Face just became visible
    Activate,
    /// Once-per-second tick
    Tick,
    /// Periodic wake while in low-energy mode (once per minute)
    LowEnergyUpdate,

    // Background events
    /// Wake requested through `wants_background_task`
    BackgroundTask,
    /// Inactivity timeout expired
    Timeout,

    // Button events
    LightButtonDown,
    LightButtonUp,
    LightLongPress,
    ModeButtonDown,
    ModeButtonUp,
    ModeLongPress,
    AlarmButtonDown,
    AlarmButtonUp,
    AlarmLongPress,
}

impl Event {
    /// Check if this event asks the face to refresh the display
    pub fn is_redraw(&self) -> bool {
        matches!(
            self,
            Event::Activate | Event::Tick | Event::LowEnergyUpdate
        )
    }

    /// Check if this is the low-energy wake
    pub fn is_low_energy(&self) -> bool {
        matches!(self, Event::LowEnergyUpdate)
    }
}
