//! Day-scoped look-ahead and short look-back scans over the forecast series
//!
//! Every check walks the whole series for the hour being judged. A forecast
//! horizon is a few hundred entries at most, so the quadratic total is fine.

use chrono::{DateTime, Duration, FixedOffset};

use super::thresholds::Thresholds;
use super::time::{day_bounds, to_local};
use crate::models::ForecastEntry;

/// One-hour precipitation, falling back to the six-hour amount, else 0
#[must_use]
pub fn extract_precip(entry: &ForecastEntry) -> f64 {
    entry
        .next_1_hours
        .or(entry.next_6_hours)
        .map_or(0.0, |period| period.precipitation_amount)
}

/// One-hour precipitation only, 0 when the block is absent
#[must_use]
pub fn next_hour_precip(entry: &ForecastEntry) -> f64 {
    entry
        .next_1_hours
        .map_or(0.0, |period| period.precipitation_amount)
}

/// Entries later the same local day than `current`, in series order
fn later_today(
    series: &[ForecastEntry],
    current: DateTime<FixedOffset>,
) -> impl Iterator<Item = &ForecastEntry> {
    let (day_start, day_end) = day_bounds(current);
    series.iter().filter(move |entry| {
        let dt = to_local(entry.timestamp);
        dt >= day_start && dt <= day_end && dt > current
    })
}

/// Whether rain above the limit is forecast later the same local day
#[must_use]
pub fn rain_forecast_today(
    series: &[ForecastEntry],
    current: DateTime<FixedOffset>,
    thresholds: &Thresholds,
) -> bool {
    later_today(series, current).any(|entry| extract_precip(entry) > thresholds.max_precip_ok)
}

/// Whether a long enough heat run remains later the same local day.
///
/// The run counts consecutive entries of the filtered same-day subsequence,
/// not consecutive clock hours.
#[must_use]
pub fn high_temp_run_today(
    series: &[ForecastEntry],
    current: DateTime<FixedOffset>,
    thresholds: &Thresholds,
) -> bool {
    let mut longest = 0u32;
    let mut running = 0u32;

    for entry in later_today(series, current) {
        if entry.instant.air_temperature >= thresholds.high_temp_threshold {
            running += 1;
            longest = longest.max(running);
        } else {
            running = 0;
        }
    }

    longest >= thresholds.high_temp_duration_hours
}

/// Whether rain fell within the last `hours` up to and including `current`.
///
/// Only `next_1_hours` counts. Each such block covers `[t, t + 1h]`.
#[must_use]
pub fn rained_recently(
    series: &[ForecastEntry],
    current: DateTime<FixedOffset>,
    hours: i64,
    thresholds: &Thresholds,
) -> bool {
    let limit = current - Duration::hours(hours);

    for entry in series {
        let dt = to_local(entry.timestamp);

        // series is sorted, nothing later can qualify
        if dt > current {
            break;
        }

        if dt < limit {
            continue;
        }

        if let Some(period) = entry.next_1_hours {
            let period_end = dt + Duration::hours(1);
            if period_end >= limit && dt <= current && period.precipitation_amount > thresholds.max_precip_ok
            {
                return true;
            }
        }
    }

    false
}
