//! Forecast sources
//!
//! The HTTP layer only talks to [`ForecastSource`], so tests can swap the
//! MET Norway client for canned data.

use async_trait::async_trait;

use crate::models::{ForecastEntry, Location};

pub mod met_no;

pub use met_no::MetNoClient;

/// Supplies the ordered hourly forecast for a coordinate
#[async_trait]
pub trait ForecastSource: Send + Sync {
    /// Fetch the full forecast horizon, sorted by time.
    ///
    /// Fails with `UpstreamFetch` on transport problems and `MalformedData`
    /// when the payload lacks the time series.
    async fn fetch(&self, location: &Location) -> crate::Result<Vec<ForecastEntry>>;
}
