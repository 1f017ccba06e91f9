//! Packed date-time register
//!
//! Register layout, least significant bit first:
//!
//! ```text
//! ┌────────┬────────┬──────┬─────┬───────┬──────┐
//! │ SECOND │ MINUTE │ HOUR │ DAY │ MONTH │ YEAR │
//! │ 6b     │ 6b     │ 5b   │ 5b  │ 4b    │ 6b   │
//! └────────┴────────┴──────┴─────┴───────┴──────┘
//! ```

use chrono::{Datelike, NaiveDateTime};

use super::calendar::{self, Weekday};

/// Year that a stored year offset of 0 refers to
pub const REFERENCE_YEAR: u16 = 2020;

/// Last year the 6-bit year field can hold
pub const MAX_YEAR: u16 = REFERENCE_YEAR + 63;

/// Register value that matches no real timestamp
///
/// Every field decodes out of range, so a previous timestamp set to this
/// value forces a full redraw on the next refresh.
pub const INVALID_REGISTER: u32 = 0xFFFF_FFFF;

const SECOND_SHIFT: u32 = 0;
const MINUTE_SHIFT: u32 = 6;
const HOUR_SHIFT: u32 = 12;
const DAY_SHIFT: u32 = 17;
const MONTH_SHIFT: u32 = 22;
const YEAR_SHIFT: u32 = 26;

const SIX_BITS: u32 = 0x3F;
const FIVE_BITS: u32 = 0x1F;
const FOUR_BITS: u32 = 0x0F;

/// Calendar date and wall-clock time as kept by the RTC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateTime {
    /// Years since [`REFERENCE_YEAR`]
    pub year: u8,
    /// Month (1-12)
    pub month: u8,
    /// Day of month (1-31)
    pub day: u8,
    /// Hour (0-23)
    pub hour: u8,
    /// Minute (0-59)
    pub minute: u8,
    /// Second (0-59)
    pub second: u8,
}

impl DateTime {
    /// Create a date-time from a full calendar year
    ///
    /// Years are clamped to [`REFERENCE_YEAR`]..=[`MAX_YEAR`], the range
    /// the register can hold.
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        let year = if year < REFERENCE_YEAR {
            REFERENCE_YEAR
        } else if year > MAX_YEAR {
            MAX_YEAR
        } else {
            year
        };
        Self {
            year: (year - REFERENCE_YEAR) as u8,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Unpack a register word
    pub const fn from_register(reg: u32) -> Self {
        Self {
            year: ((reg >> YEAR_SHIFT) & SIX_BITS) as u8,
            month: ((reg >> MONTH_SHIFT) & FOUR_BITS) as u8,
            day: ((reg >> DAY_SHIFT) & FIVE_BITS) as u8,
            hour: ((reg >> HOUR_SHIFT) & FIVE_BITS) as u8,
            minute: ((reg >> MINUTE_SHIFT) & SIX_BITS) as u8,
            second: ((reg >> SECOND_SHIFT) & SIX_BITS) as u8,
        }
    }

    /// Pack into a register word
    ///
    /// Fields wider than their slot are truncated.
    pub const fn to_register(&self) -> u32 {
        ((self.year as u32 & SIX_BITS) << YEAR_SHIFT)
            | ((self.month as u32 & FOUR_BITS) << MONTH_SHIFT)
            | ((self.day as u32 & FIVE_BITS) << DAY_SHIFT)
            | ((self.hour as u32 & FIVE_BITS) << HOUR_SHIFT)
            | ((self.minute as u32 & SIX_BITS) << MINUTE_SHIFT)
            | ((self.second as u32 & SIX_BITS) << SECOND_SHIFT)
    }

    /// Full calendar year
    pub const fn full_year(&self) -> u16 {
        REFERENCE_YEAR + self.year as u16
    }

    /// Everything but the seconds
    ///
    /// Two timestamps with equal minute keys differ at most in seconds.
    pub const fn minute_key(&self) -> (u8, u8, u8, u8, u8) {
        (self.year, self.month, self.day, self.hour, self.minute)
    }

    /// Everything but the minutes and seconds
    pub const fn hour_key(&self) -> (u8, u8, u8, u8) {
        (self.year, self.month, self.day, self.hour)
    }

    /// Civil date-time, or `None` if a field is out of range
    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        calendar::naive(
            self.full_year(),
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }

    /// Seconds since the Unix epoch for this local time
    ///
    /// `utc_offset_s` is the local zone's offset east of UTC. Returns
    /// `None` if a field is out of range.
    pub fn to_unix(&self, utc_offset_s: i32) -> Option<i64> {
        calendar::convert_to_unix(
            self.full_year(),
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            utc_offset_s,
        )
    }

    /// Day of the week, or `None` if the date does not exist
    pub fn weekday(&self) -> Option<Weekday> {
        self.to_naive().map(|dt| dt.weekday())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_layout() {
        let dt = DateTime::new(2025, 3, 14, 16, 59, 42);
        let reg = dt.to_register();

        assert_eq!(reg & 0x3F, 42);
        assert_eq!((reg >> 6) & 0x3F, 59);
        assert_eq!((reg >> 12) & 0x1F, 16);
        assert_eq!((reg >> 17) & 0x1F, 14);
        assert_eq!((reg >> 22) & 0x0F, 3);
        assert_eq!(reg >> 26, 5);
        assert_eq!(DateTime::from_register(reg), dt);
    }

    #[test]
    fn test_keys_match_register_shifts() {
        let a = DateTime::new(2025, 3, 14, 16, 59, 42);
        let b = DateTime { second: 7, ..a };
        let c = DateTime { minute: 12, ..b };

        assert_eq!(a.to_register() >> 6, b.to_register() >> 6);
        assert_eq!(a.minute_key(), b.minute_key());

        assert_ne!(b.to_register() >> 6, c.to_register() >> 6);
        assert_ne!(b.minute_key(), c.minute_key());
        assert_eq!(b.to_register() >> 12, c.to_register() >> 12);
        assert_eq!(b.hour_key(), c.hour_key());
    }

    #[test]
    fn test_invalid_register_matches_nothing() {
        let invalid = DateTime::from_register(INVALID_REGISTER);
        let real = DateTime::new(2083, 12, 31, 23, 59, 59);

        assert_ne!(invalid.minute_key(), real.minute_key());
        assert_ne!(invalid.hour_key(), real.hour_key());
        assert!(invalid.month > 12);
        assert!(invalid.hour > 23);
    }

    #[test]
    fn test_full_year_is_clamped_to_register_range() {
        assert_eq!(DateTime::new(2024, 1, 1, 0, 0, 0).full_year(), 2024);
        assert_eq!(DateTime::new(1999, 1, 1, 0, 0, 0).full_year(), REFERENCE_YEAR);
        assert_eq!(DateTime::new(2083, 1, 1, 0, 0, 0).full_year(), MAX_YEAR);
        assert_eq!(DateTime::new(2084, 1, 1, 0, 0, 0).full_year(), MAX_YEAR);
        assert_eq!(DateTime::new(2300, 1, 1, 0, 0, 0).full_year(), MAX_YEAR);
    }

    #[test]
    fn test_calendar_views() {
        let dt = DateTime::new(2083, 12, 31, 12, 0, 0);
        assert_eq!(dt.weekday(), Some(Weekday::Fri));
        assert_eq!(
            DateTime::new(2024, 2, 29, 12, 30, 15).to_unix(0),
            Some(1_709_209_815)
        );
    }

    #[test]
    fn test_invalid_register_has_no_calendar_view() {
        let invalid = DateTime::from_register(INVALID_REGISTER);
        assert_eq!(invalid.to_naive(), None);
        assert_eq!(invalid.to_unix(0), None);
        assert_eq!(invalid.weekday(), None);
    }
}
