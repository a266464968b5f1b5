//! Hourly forecast entries and the MET Norway wire format they are read from

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::SprayForecastError;

/// One forecast step as consumed by the evaluator
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ForecastEntry {
    /// Start of the step, in UTC
    pub timestamp: DateTime<Utc>,
    /// Values valid at `timestamp`
    pub instant: InstantDetails,
    /// Precipitation over the hour starting at `timestamp`
    pub next_1_hours: Option<PeriodDetails>,
    /// Precipitation over the six hours starting at `timestamp`
    pub next_6_hours: Option<PeriodDetails>,
}

/// Instantaneous values. Missing fields read as 0.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
#[serde(default)]
pub struct InstantDetails {
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Air temperature in Celsius
    pub air_temperature: f64,
    /// Cloud cover percentage (0-100)
    pub cloud_area_fraction: f64,
}

/// Accumulated values over a forecast period. Missing fields read as 0.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
#[serde(default)]
pub struct PeriodDetails {
    /// Precipitation amount in mm
    pub precipitation_amount: f64,
}

impl ForecastEntry {
    /// Create an entry with no precipitation blocks
    #[must_use]
    pub fn new(timestamp: DateTime<Utc>, instant: InstantDetails) -> Self {
        Self {
            timestamp,
            instant,
            next_1_hours: None,
            next_6_hours: None,
        }
    }

    /// Attach a one-hour precipitation amount
    #[must_use]
    pub fn with_next_1_hours(mut self, precipitation_amount: f64) -> Self {
        self.next_1_hours = Some(PeriodDetails {
            precipitation_amount,
        });
        self
    }

    /// Attach a six-hour precipitation amount
    #[must_use]
    pub fn with_next_6_hours(mut self, precipitation_amount: f64) -> Self {
        self.next_6_hours = Some(PeriodDetails {
            precipitation_amount,
        });
        self
    }
}

/// MET Norway locationforecast 2.0 response structures
pub mod met {
    use super::{DateTime, Deserialize, ForecastEntry, InstantDetails, PeriodDetails, Utc};
    use crate::SprayForecastError;

    /// Top level GeoJSON feature returned by `/compact`
    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub properties: Option<Properties>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Properties {
        pub timeseries: Option<Vec<TimeStep>>,
    }

    #[derive(Debug, Deserialize)]
    pub struct TimeStep {
        pub time: DateTime<Utc>,
        pub data: TimeStepData,
    }

    #[derive(Debug, Deserialize)]
    pub struct TimeStepData {
        pub instant: Instant,
        pub next_1_hours: Option<Period>,
        pub next_6_hours: Option<Period>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Instant {
        pub details: InstantDetails,
    }

    #[derive(Debug, Deserialize)]
    pub struct Period {
        pub details: PeriodDetails,
    }

    impl ForecastResponse {
        /// Flatten the response into evaluator entries, keeping provider order
        pub fn into_entries(self) -> Result<Vec<ForecastEntry>, SprayForecastError> {
            let timeseries = self
                .properties
                .ok_or_else(|| SprayForecastError::malformed("response has no 'properties'"))?
                .timeseries
                .ok_or_else(|| {
                    SprayForecastError::malformed("response has no 'properties.timeseries'")
                })?;

            Ok(timeseries.into_iter().map(ForecastEntry::from).collect())
        }
    }

    impl From<TimeStep> for ForecastEntry {
        fn from(step: TimeStep) -> Self {
            ForecastEntry {
                timestamp: step.time,
                instant: step.data.instant.details,
                next_1_hours: step.data.next_1_hours.map(|p| p.details),
                next_6_hours: step.data.next_6_hours.map(|p| p.details),
            }
        }
    }
}

/// Parse a raw `/compact` body into forecast entries
pub fn parse_met_response(body: &str) -> Result<Vec<ForecastEntry>, SprayForecastError> {
    let response: met::ForecastResponse = serde_json::from_str(body)
        .map_err(|e| SprayForecastError::malformed(format!("invalid forecast JSON: {e}")))?;
    response.into_entries()
}
