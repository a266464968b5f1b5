//! `spray-forecast` - Hourly spraying suitability from weather forecasts
//!
//! This library judges an hourly forecast series for pesticide and foliar
//! fertilizer application, and serves the verdicts over HTTP.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod spray;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use api::AppState;
pub use config::SprayForecastConfig;
pub use error::SprayForecastError;
pub use models::{ForecastEntry, JudgmentRecord, Location, SprayStatus, WeatherCondition};
pub use spray::{SprayEvaluator, Thresholds};
pub use weather::{ForecastSource, MetNoClient};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, SprayForecastError>;
