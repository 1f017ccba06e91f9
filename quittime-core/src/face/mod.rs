//! The watch face
//!
//! The host owns the event loop and calls into a face through the
//! [`WatchFace`] interface, handing it the hardware as a [`Movement`].

pub mod countdown;
pub mod events;
pub mod format;
pub mod planner;
pub mod quittime;
pub mod state;

use quittime_hal::{Chime, RealTimeClock, SegmentDisplay, TickAnimation, VoltageSensor};

use crate::config::Settings;

pub use events::Event;
pub use format::{Frame, FormatError};
pub use planner::{DisplayMode, Refresh};
pub use quittime::QuittingTimeFace;
pub use state::FaceState;

/// Everything the host provides to a face
pub trait Movement: RealTimeClock + SegmentDisplay + TickAnimation + VoltageSensor + Chime {
    /// The host's handling for events a face does not consume
    ///
    /// Covers face switching, the backlight and timeouts. The return value
    /// is passed back to the host loop unchanged.
    fn default_loop_handler(&mut self, event: Event, settings: &Settings) -> bool;
}

/// Interface between the host loop and a face
pub trait WatchFace {
    /// State kept by the host on the face's behalf
    type State;

    /// Allocate state for the face in slot `index`
    ///
    /// Called on every boot; existing state is returned untouched.
    fn setup<'a>(&self, index: u8, slot: &'a mut Option<Self::State>) -> &'a mut Self::State;

    /// The face is about to become visible
    fn activate<H: Movement>(&self, hw: &mut H, settings: &Settings, state: &mut Self::State);

    /// Handle one event; the return value goes back to the host loop
    fn handle<H: Movement>(
        &self,
        event: Event,
        hw: &mut H,
        settings: &Settings,
        state: &mut Self::State,
    ) -> bool;

    /// The face is about to be hidden
    fn resign<H: Movement>(&self, hw: &mut H, settings: &Settings, state: &mut Self::State);

    /// Whether the face wants a background task this minute
    fn wants_background_task<H: Movement>(
        &self,
        hw: &mut H,
        settings: &Settings,
        state: &Self::State,
    ) -> bool;
}
