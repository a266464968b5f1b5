//! Weather API client for MET Norway locationforecast 2.0
//!
//! Retrieves the compact hourly forecast with retry on transient failures.
//! MET Norway requires an identifying User-Agent on every request.

use async_trait::async_trait;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

use super::ForecastSource;
use crate::config::WeatherConfig;
use crate::models::forecast::parse_met_response;
use crate::models::{ForecastEntry, Location};
use crate::{Result, SprayForecastError};

/// Upstream calls slower than this are logged as warnings
const SLOW_RESPONSE: Duration = Duration::from_secs(5);

/// Client for `/compact` forecasts
pub struct MetNoClient {
    /// HTTP client with retry middleware
    client: ClientWithMiddleware,
    /// API base URL without trailing slash
    base_url: String,
}

impl MetNoClient {
    /// Create a new client
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_seconds.into());

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| {
                SprayForecastError::config(format!("Failed to create HTTP client: {e}"))
            })?;

        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(config.max_retries);
        let client = ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Request URL for a location. MET Norway asks for at most four decimals.
    #[must_use]
    pub fn forecast_url(&self, location: &Location) -> String {
        format!(
            "{}/compact?lat={:.4}&lon={:.4}",
            self.base_url, location.latitude, location.longitude
        )
    }
}

#[async_trait]
impl ForecastSource for MetNoClient {
    #[instrument(skip(self), fields(lat = location.latitude, lon = location.longitude))]
    async fn fetch(&self, location: &Location) -> Result<Vec<ForecastEntry>> {
        location.validate()?;

        let url = self.forecast_url(location);
        debug!("MET Norway request URL: {}", url);
        let start_time = Instant::now();

        let response = self.client.get(&url).send().await.map_err(|e| {
            SprayForecastError::upstream(format!("Forecast request failed: {e}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SprayForecastError::upstream(format!(
                "Forecast request failed with status: {} - {}",
                status,
                status.canonical_reason().unwrap_or("Unknown error")
            )));
        }

        let body = response.text().await.map_err(|e| {
            SprayForecastError::upstream(format!("Failed to read forecast response: {e}"))
        })?;

        let parse_start = Instant::now();
        let entries = parse_met_response(&body)?;
        let parse_duration = parse_start.elapsed();
        let total_duration = start_time.elapsed();

        info!(
            "Retrieved forecast with {} entries for {} in {:.3}s (parse: {:.3}s)",
            entries.len(),
            location.format_coordinates(),
            total_duration.as_secs_f64(),
            parse_duration.as_secs_f64()
        );

        if total_duration > SLOW_RESPONSE {
            warn!(
                "Slow forecast API response: {:.3}s",
                total_duration.as_secs_f64()
            );
        }

        Ok(entries)
    }
}
