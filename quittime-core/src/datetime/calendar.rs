//! Calendar arithmetic
//!
//! Civil dates go through `chrono`; this module adds the UTC offset
//! handling, the duration breakdown and the weekday cell text.

use chrono::{NaiveDate, NaiveDateTime};

pub use chrono::Weekday;

const SECONDS_PER_MINUTE: u32 = 60;
const SECONDS_PER_HOUR: u32 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u32 = 24 * SECONDS_PER_HOUR;

/// Build a civil date-time, or `None` if any field is out of range
pub fn naive(
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day))?.and_hms_opt(
        u32::from(hour),
        u32::from(minute),
        u32::from(second),
    )
}

/// Convert a local civil time to seconds since the Unix epoch
///
/// `utc_offset_s` is the local zone's offset east of UTC in seconds.
/// Returns `None` for dates that do not exist.
pub fn convert_to_unix(
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    utc_offset_s: i32,
) -> Option<i64> {
    let local = naive(year, month, day, hour, minute, second)?;
    Some(local.and_utc().timestamp() - i64::from(utc_offset_s))
}

/// Two-letter abbreviation sized for the weekday cells
pub const fn abbreviation(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "MO",
        Weekday::Tue => "TU",
        Weekday::Wed => "WE",
        Weekday::Thu => "TH",
        Weekday::Fri => "FR",
        Weekday::Sat => "SA",
        Weekday::Sun => "SU",
    }
}

/// A span of time broken down into calendar units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Duration {
    pub days: u16,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl Duration {
    /// Break a number of seconds down into days, hours, minutes and seconds
    pub const fn from_seconds(total: u32) -> Self {
        Self {
            days: (total / SECONDS_PER_DAY) as u16,
            hours: ((total % SECONDS_PER_DAY) / SECONDS_PER_HOUR) as u8,
            minutes: ((total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE) as u8,
            seconds: (total % SECONDS_PER_MINUTE) as u8,
        }
    }

    /// Hours including whole days
    pub const fn total_hours(&self) -> u32 {
        self.days as u32 * 24 + self.hours as u32
    }
}
