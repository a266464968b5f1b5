//! Per-hour spraying verdicts produced by the evaluator

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Traffic-light verdict for one hour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SprayStatus {
    Green,
    Yellow,
    Red,
}

/// Sky condition derived from precipitation and cloud cover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    /// More than 1.0 mm in the hour
    HeavyRain,
    /// More than 0.2 mm in the hour
    LightRain,
    /// Cloud cover below 20%
    Clear,
    Cloudy,
}

/// Rule that pushed the status away from green
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reason {
    #[serde(rename = "strong wind")]
    StrongWind,
    #[serde(rename = "rain risk")]
    RainRisk,
    #[serde(rename = "temperature caution")]
    TemperatureCaution,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Reason::StrongWind => "strong wind",
            Reason::RainRisk => "rain risk",
            Reason::TemperatureCaution => "temperature caution",
        };
        f.write_str(label)
    }
}

/// Judgment for a single display hour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JudgmentRecord {
    /// Entry time in Japan Standard Time
    pub local_time: DateTime<FixedOffset>,
    /// Wind speed in m/s
    pub wind: f64,
    /// Air temperature in Celsius
    pub temp: f64,
    /// One-hour precipitation in mm
    pub precip: f64,
    /// Cloud cover percentage (0-100)
    pub cloudiness: f64,
    pub condition: WeatherCondition,
    pub status: SprayStatus,
    /// Triggered rules, in evaluation order
    pub reason: Vec<Reason>,
    pub recommendations: Vec<String>,
    pub warnings: Vec<String>,
    /// Whether the hour lies in the early-morning or evening spray window
    pub is_spray_time: bool,
}
