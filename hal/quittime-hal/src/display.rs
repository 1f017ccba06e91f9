//! Segment display abstractions
//!
//! The display is a fixed row of ten character cells plus a handful of
//! indicator segments. Positions are zero-based cell columns.

/// Indicator segments around the main digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Indicator {
    /// Alarm/sync signal indicator
    Signal,
    /// Bell indicator (hourly chime)
    Bell,
    /// Afternoon marker in 12-hour mode
    Pm,
    /// 24-hour mode marker
    TwentyFourHour,
    /// Lap indicator, used as the low-battery warning
    Lap,
}

/// Segment display driver
///
/// Implementations translate characters into segment patterns for the
/// specific glass. The watch face never deals with segments directly.
pub trait SegmentDisplay {
    /// Draw `text` starting at `column`, one character per cell
    fn display_string(&mut self, text: &str, column: u8);

    /// Draw a single character at `column`
    ///
    /// Used for the seconds digits, which the glass can update without
    /// touching the rest of the row.
    fn display_character(&mut self, character: char, column: u8);

    /// Turn an indicator segment on
    fn set_indicator(&mut self, indicator: Indicator);

    /// Turn an indicator segment off
    fn clear_indicator(&mut self, indicator: Indicator);

    /// Show the colon between hours and minutes
    fn set_colon(&mut self);

    /// Set an indicator to a specific state
    fn set_indicator_state(&mut self, indicator: Indicator, on: bool) {
        if on {
            self.set_indicator(indicator);
        } else {
            self.clear_indicator(indicator);
        }
    }
}
