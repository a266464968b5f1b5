//! Data models for the spray forecast service
//!
//! This module contains the core domain models organized by concern:
//! - Location: Geographic coordinates
//! - Forecast: Hourly forecast entries and the provider wire format
//! - Judgment: Per-hour spraying verdicts

pub mod forecast;
pub mod judgment;
pub mod location;

// Re-export all public types for convenient access
pub use forecast::{ForecastEntry, InstantDetails, PeriodDetails};
pub use judgment::{JudgmentRecord, Reason, SprayStatus, WeatherCondition};
pub use location::Location;
