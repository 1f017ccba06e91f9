//! Countdown to the end of the working day

use crate::datetime::{convert_to_unix, DateTime, Duration};

/// Time left from `now` until `target_hour`:00:00 on the same calendar day
///
/// Both instants are local times in the same zone. The result is clamped
/// at zero once the target has passed, and one second short of the exact
/// difference so the final second before the target reads 00:00. A `now`
/// that is not a real date reads as zero.
pub fn remaining(now: &DateTime, target_hour: u8, utc_offset_s: i32) -> Duration {
    let Some(now_ts) = now.to_unix(utc_offset_s) else {
        return Duration::default();
    };
    let Some(target_ts) = convert_to_unix(
        now.full_year(),
        now.month,
        now.day,
        target_hour,
        0,
        0,
        utc_offset_s,
    ) else {
        return Duration::default();
    };

    let diff = (target_ts - now_ts).max(0);
    let adjusted = if diff > 0 { diff - 1 } else { 0 };

    Duration::from_seconds(u32::try_from(adjusted).unwrap_or(u32::MAX))
}
