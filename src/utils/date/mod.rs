// Date utility functions

use chrono::{DateTime, Local, NaiveDate};

/// Parse an "HH:MM" time-of-day string into (hours, minutes).
///
/// The string must split into exactly two colon-delimited integers with
/// hours in 0-23 and minutes in 0-59.
pub fn parse_time_of_day(value: &str) -> Option<(u32, u32)> {
    let mut parts = value.trim().split(':');
    let hours: u32 = parts.next()?.parse().ok()?;
    let minutes: u32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some((hours, minutes))
}

/// Combine a calendar date with an hour and minute into a local instant,
/// with seconds and milliseconds zeroed.
///
/// Returns `None` when the combination does not exist on the local clock
/// (for example inside a DST gap). An ambiguous wall-clock time resolves
/// to its earlier occurrence.
pub fn local_instant(date: NaiveDate, hours: u32, minutes: u32) -> Option<DateTime<Local>> {
    date.and_hms_opt(hours, minutes, 0)?
        .and_local_timezone(Local)
        .earliest()
}
