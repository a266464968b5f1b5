//! Japan Standard Time conversion and hour-of-day windows

use chrono::{DateTime, Duration, FixedOffset, Timelike, Utc};

use super::thresholds::Thresholds;

/// Japan Standard Time, UTC+9 all year round
pub const JST: FixedOffset = match FixedOffset::east_opt(9 * 3600) {
    Some(offset) => offset,
    None => panic!("+09:00 is a valid offset"),
};

/// Convert a UTC instant to Japan Standard Time
#[must_use]
pub fn to_local(timestamp: DateTime<Utc>) -> DateTime<FixedOffset> {
    timestamp.with_timezone(&JST)
}

/// `00:00:00` and `23:59:59` of the local calendar day containing `dt`
#[must_use]
pub fn day_bounds(dt: DateTime<FixedOffset>) -> (DateTime<FixedOffset>, DateTime<FixedOffset>) {
    let since_midnight = Duration::seconds(i64::from(dt.num_seconds_from_midnight()))
        + Duration::nanoseconds(i64::from(dt.nanosecond()));
    let start = dt - since_midnight;
    let end = start + Duration::seconds(23 * 3600 + 59 * 60 + 59);
    (start, end)
}

/// Early-morning or evening spray window
#[must_use]
pub fn in_spray_window(dt: DateTime<FixedOffset>, thresholds: &Thresholds) -> bool {
    let hour = dt.hour();
    thresholds.early_morning_window.contains(hour) || thresholds.evening_window.contains(hour)
}

/// Hours shown to the user. 0-3 are never emitted.
#[must_use]
pub fn is_display_hour(dt: DateTime<FixedOffset>) -> bool {
    let hour = dt.hour();
    (4..=7).contains(&hour)
        || (8..=15).contains(&hour)
        || (16..=19).contains(&hour)
        || (20..=23).contains(&hour)
}
