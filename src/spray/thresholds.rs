//! Tunable limits used by the spraying evaluator

use serde::{Deserialize, Serialize};

use crate::SprayForecastError;

/// Half-open range of local clock hours, `start <= h < end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourWindow {
    pub start: u32,
    pub end: u32,
}

impl HourWindow {
    #[must_use]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn contains(&self, hour: u32) -> bool {
        self.start <= hour && hour < self.end
    }
}

/// Limits applied when judging each forecast hour
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Thresholds {
    /// Early-morning spray window
    pub early_morning_window: HourWindow,
    /// Evening spray window
    pub evening_window: HourWindow,
    /// Wind above this (m/s) makes spraying unsafe
    pub max_wind_ok: f64,
    /// One-hour precipitation above this (mm) counts as rain
    pub max_precip_ok: f64,
    /// Upper comfortable temperature (Celsius)
    pub max_temp: f64,
    /// Lower comfortable temperature (Celsius)
    pub min_temp: f64,
    /// Wind below this (m/s) suits foliar fertilizer
    pub max_wind_foliar: f64,
    /// Temperature counted towards a heat run (Celsius)
    pub high_temp_threshold: f64,
    /// Heat run length that triggers a burn warning
    pub high_temp_duration_hours: u32,
    /// Look-back horizon for the post-rain insecticide advice
    pub rain_after_hours: i64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            early_morning_window: HourWindow::new(4, 7),
            evening_window: HourWindow::new(16, 19),
            max_wind_ok: 3.5,
            max_precip_ok: 0.2,
            max_temp: 30.0,
            min_temp: 5.0,
            max_wind_foliar: 0.5,
            high_temp_threshold: 30.0,
            high_temp_duration_hours: 3,
            rain_after_hours: 6,
        }
    }
}

impl Thresholds {
    /// Reject settings that cannot describe a sensible rule set
    pub fn validate(&self) -> Result<(), SprayForecastError> {
        for (name, window) in [
            ("early_morning_window", self.early_morning_window),
            ("evening_window", self.evening_window),
        ] {
            if window.start >= window.end || window.end > 24 {
                return Err(SprayForecastError::config(format!(
                    "{name} must satisfy start < end <= 24, got [{}, {})",
                    window.start, window.end
                )));
            }
        }

        let limits = [
            ("max_wind_ok", self.max_wind_ok),
            ("max_precip_ok", self.max_precip_ok),
            ("max_wind_foliar", self.max_wind_foliar),
        ];
        for (name, value) in limits {
            if !value.is_finite() || value < 0.0 {
                return Err(SprayForecastError::config(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }

        if !(self.min_temp.is_finite() && self.max_temp.is_finite()) || self.min_temp > self.max_temp
        {
            return Err(SprayForecastError::config(format!(
                "min_temp ({}) must not exceed max_temp ({})",
                self.min_temp, self.max_temp
            )));
        }

        if !self.high_temp_threshold.is_finite() {
            return Err(SprayForecastError::config("high_temp_threshold must be finite"));
        }

        if self.high_temp_duration_hours == 0 {
            return Err(SprayForecastError::config(
                "high_temp_duration_hours must be at least 1",
            ));
        }

        if !(1..=48).contains(&self.rain_after_hours) {
            return Err(SprayForecastError::config(format!(
                "rain_after_hours must be between 1 and 48, got {}",
                self.rain_after_hours
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let thresholds = Thresholds::default();
        assert_eq!(thresholds.early_morning_window, HourWindow::new(4, 7));
        assert_eq!(thresholds.evening_window, HourWindow::new(16, 19));
        assert_eq!(thresholds.max_wind_ok, 3.5);
        assert_eq!(thresholds.max_precip_ok, 0.2);
        assert_eq!(thresholds.high_temp_duration_hours, 3);
        assert_eq!(thresholds.rain_after_hours, 6);
        assert!(thresholds.validate().is_ok());
    }

    #[test]
    fn test_hour_window_is_half_open() {
        let window = HourWindow::new(4, 7);
        assert!(!window.contains(3));
        assert!(window.contains(4));
        assert!(window.contains(6));
        assert!(!window.contains(7));
    }

    #[test]
    fn test_validation_rejects_inverted_window() {
        let thresholds = Thresholds {
            evening_window: HourWindow::new(19, 16),
            ..Thresholds::default()
        };
        let err = thresholds.validate().unwrap_err();
        assert!(err.to_string().contains("evening_window"));
    }

    #[test]
    fn test_validation_rejects_zero_duration() {
        let thresholds = Thresholds {
            high_temp_duration_hours: 0,
            ..Thresholds::default()
        };
        assert!(thresholds.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_swapped_temperatures() {
        let thresholds = Thresholds {
            min_temp: 35.0,
            ..Thresholds::default()
        };
        assert!(thresholds.validate().is_err());
    }

    #[test]
    fn test_partial_deserialization_keeps_defaults() {
        let thresholds: Thresholds =
            serde_json::from_str(r#"{"max_wind_ok": 5.0, "evening_window": {"start": 15, "end": 18}}"#)
                .unwrap();
        assert_eq!(thresholds.max_wind_ok, 5.0);
        assert_eq!(thresholds.evening_window, HourWindow::new(15, 18));
        assert_eq!(thresholds.min_temp, 5.0);
    }
}
