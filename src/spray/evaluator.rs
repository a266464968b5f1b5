//! Hour-by-hour spraying judgment
//!
//! Applies the wind, rain and temperature rules to every display hour and
//! attaches the day-scoped advisories from [`super::checks`].

use tracing::debug;

use super::checks::{high_temp_run_today, next_hour_precip, rain_forecast_today, rained_recently};
use super::thresholds::Thresholds;
use super::time::{in_spray_window, is_display_hour, to_local};
use crate::Result;
use crate::models::{ForecastEntry, JudgmentRecord, Reason, SprayStatus, WeatherCondition};

/// Sky condition from one-hour precipitation and cloud cover; first match wins
#[must_use]
pub fn classify_condition(precip: f64, cloudiness: f64) -> WeatherCondition {
    if precip > 1.0 {
        WeatherCondition::HeavyRain
    } else if precip > 0.2 {
        WeatherCondition::LightRain
    } else if cloudiness < 20.0 {
        WeatherCondition::Clear
    } else {
        WeatherCondition::Cloudy
    }
}

/// Stateless judge over a forecast series
#[derive(Debug, Clone, Default)]
pub struct SprayEvaluator {
    thresholds: Thresholds,
}

impl SprayEvaluator {
    /// Fails with a config error when `thresholds` do not validate
    pub fn new(thresholds: Thresholds) -> Result<Self> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    #[must_use]
    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Judge every display hour of `series`, which must be sorted by time
    #[must_use]
    pub fn evaluate(&self, series: &[ForecastEntry]) -> Vec<JudgmentRecord> {
        let results: Vec<JudgmentRecord> = series
            .iter()
            .filter_map(|entry| self.judge_entry(series, entry))
            .collect();

        debug!(
            "Judged {} display hours out of {} forecast entries",
            results.len(),
            series.len()
        );

        results
    }

    fn judge_entry(&self, series: &[ForecastEntry], entry: &ForecastEntry) -> Option<JudgmentRecord> {
        let t = &self.thresholds;
        let local_time = to_local(entry.timestamp);
        let is_spray_time = in_spray_window(local_time, t);

        if !is_display_hour(local_time) {
            return None;
        }

        let wind = entry.instant.wind_speed;
        let temp = entry.instant.air_temperature;
        let cloudiness = entry.instant.cloud_area_fraction;
        let precip = next_hour_precip(entry);

        let condition = classify_condition(precip, cloudiness);

        let mut status = SprayStatus::Green;
        let mut reason = Vec::new();
        let mut recommendations = Vec::new();
        let mut warnings = Vec::new();

        if wind > t.max_wind_ok {
            status = SprayStatus::Red;
            reason.push(Reason::StrongWind);
        } else if is_spray_time && wind < t.max_wind_foliar {
            recommendations.push(format!(
                "suitable for foliar fertilizer application (wind < {} m/s)",
                t.max_wind_foliar
            ));
        }

        if precip > t.max_precip_ok {
            status = SprayStatus::Red;
            reason.push(Reason::RainRisk);
        }

        // Runs last and replaces a RED verdict as well.
        if temp < t.min_temp || temp > t.max_temp {
            status = SprayStatus::Yellow;
            reason.push(Reason::TemperatureCaution);
        }

        if rain_forecast_today(series, local_time, t) {
            warnings.push(
                "⚠️ Rain is forecast later today. Pesticide and foliar fertilizer may be washed off."
                    .to_string(),
            );
        }

        if high_temp_run_today(series, local_time, t) {
            warnings.push(format!(
                "⚠️ {}°C or higher is forecast for {}+ hours today. Watch for fertilizer and pesticide burn.",
                t.high_temp_threshold, t.high_temp_duration_hours
            ));
        }

        if rained_recently(series, local_time, t.rain_after_hours, t) {
            recommendations.push(format!(
                "🌧️ Within {} hours after rain. A good time to apply insecticide.",
                t.rain_after_hours
            ));
        }

        Some(JudgmentRecord {
            local_time,
            wind,
            temp,
            precip,
            cloudiness,
            condition,
            status,
            reason,
            recommendations,
            warnings,
            is_spray_time,
        })
    }
}
