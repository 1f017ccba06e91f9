//! Frame formatters
//!
//! The display row is ten cells wide:
//!
//! ```text
//!  0 1   2 3   4 5    6 7    8 9
//! ┌───┬───┬─────┬──────┬──────┐
//! │ WD│ DD│ HH  │  MM  │  SS  │
//! └───┴───┴─────┴──────┴──────┘
//! ```
//!
//! Formatters are pure: they return a [`Frame`] describing what to draw
//! and which indicators it implies, and leave the hardware to the face.

use core::fmt::Write;

use heapless::String;

use crate::config::{FaceConfig, Settings};
use crate::datetime::{abbreviation, DateTime, Duration};

/// Cells in the display row
pub const FRAME_WIDTH: usize = 10;

/// Column of the tens-of-hours cell
pub const HOUR_COLUMN: u8 = 4;

/// Column of the tens-of-minutes cell
pub const MINUTES_COLUMN: u8 = 6;

/// Column of the tens-of-seconds cell
pub const SECONDS_COLUMN: u8 = 8;

/// Formatting errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FormatError {
    /// A field did not fit its cells
    Overflow,
    /// Date fields do not form a real date
    InvalidDate,
}

impl From<core::fmt::Error> for FormatError {
    fn from(_: core::fmt::Error) -> Self {
        FormatError::Overflow
    }
}

/// Text for part of the display row, plus the side effects it implies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Characters to draw, one per cell
    pub text: String<FRAME_WIDTH>,
    /// First cell to draw into
    pub column: u8,
    /// Draw a literal `0` over the blank tens-of-hours cell
    pub leading_zero: bool,
    /// PM indicator state, when the frame is in 12-hour form
    pub pm: Option<bool>,
    /// Frame is a low-energy frame and needs the tick animation
    pub tick_animation: bool,
}

impl Frame {
    fn at(column: u8) -> Self {
        Self {
            text: String::new(),
            column,
            leading_zero: false,
            pm: None,
            tick_animation: false,
        }
    }

    /// Text to hand to the display
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }
}

/// Full-row clock: weekday, day, hour, minute and (at full power) second
pub fn format_clock(
    dt: &DateTime,
    settings: &Settings,
    config: &FaceConfig,
    low_energy: bool,
) -> Result<Frame, FormatError> {
    let mut frame = Frame::at(0);
    let mut hour = dt.hour;

    if config.uses_24h(settings.clock_24h) {
        frame.leading_zero = settings.clock_24h_leading_zero && hour < 10;
    } else {
        frame.pm = Some(hour >= 12);
        hour %= 12;
        if hour == 0 {
            hour = 12;
        }
    }

    let weekday = dt.weekday().ok_or(FormatError::InvalidDate)?;
    write!(
        frame.text,
        "{}{:2}{:2}{:02}",
        abbreviation(weekday),
        dt.day,
        hour,
        dt.minute
    )?;
    finish_seconds(&mut frame, dt.second, low_energy)?;

    Ok(frame)
}

/// Full-row countdown: blank weekday and day cells, then hours, minutes
/// and (at full power) seconds left
pub fn format_countdown(remaining: &Duration, low_energy: bool) -> Result<Frame, FormatError> {
    let mut frame = Frame::at(0);

    write!(
        frame.text,
        "    {:02}{:02}",
        remaining.total_hours(),
        remaining.minutes
    )?;
    finish_seconds(&mut frame, remaining.seconds, low_energy)?;

    Ok(frame)
}

/// Minutes and seconds cells only
pub fn format_minutes(minutes: u8, seconds: u8) -> Result<Frame, FormatError> {
    let mut frame = Frame::at(MINUTES_COLUMN);
    write!(frame.text, "{:02}{:02}", minutes, seconds)?;
    Ok(frame)
}

/// Characters for the two seconds cells
pub fn seconds_digits(seconds: u8) -> [char; 2] {
    [
        char::from(b'0' + (seconds / 10) % 10),
        char::from(b'0' + seconds % 10),
    ]
}

fn finish_seconds(frame: &mut Frame, seconds: u8, low_energy: bool) -> Result<(), FormatError> {
    if low_energy {
        frame.tick_animation = true;
        frame.text.push_str("  ").map_err(|_| FormatError::Overflow)?;
    } else {
        write!(frame.text, "{:02}", seconds)?;
    }
    Ok(())
}
