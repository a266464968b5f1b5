//! Configuration management for the spray forecast service
//!
//! Handles loading configuration from files and environment variables,
//! and provides validation for all configuration settings.

use crate::SprayForecastError;
use crate::models::Location;
use crate::spray::Thresholds;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "SPRAY_FORECAST_CONFIG";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SprayForecastConfig {
    /// Forecast provider settings
    pub weather: WeatherConfig,
    /// HTTP server settings
    pub server: ServerConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Spraying rule limits
    pub thresholds: Thresholds,
}

/// Forecast provider (MET Norway) settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Base URL of the locationforecast API
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    /// User-Agent sent with every request; MET Norway rejects anonymous clients
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_seconds: u32,
    /// Maximum number of retries for transient failures
    #[serde(default = "default_weather_max_retries")]
    pub max_retries: u32,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
    /// Latitude used when a request omits `lat`
    #[serde(default = "default_lat")]
    pub default_lat: f64,
    /// Longitude used when a request omits `lon`
    #[serde(default = "default_lon")]
    pub default_lon: f64,
    /// Directory holding the browser page
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_weather_base_url() -> String {
    "https://api.met.no/weatherapi/locationforecast/2.0".to_string()
}

fn default_user_agent() -> String {
    "spray-forecast/0.1 (contact: you@example.com)".to_string()
}

fn default_weather_timeout() -> u32 {
    10
}

fn default_weather_max_retries() -> u32 {
    2
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_lat() -> f64 {
    35.5
}

fn default_lon() -> f64 {
    139.6
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            user_agent: default_user_agent(),
            timeout_seconds: default_weather_timeout(),
            max_retries: default_weather_max_retries(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            default_lat: default_lat(),
            default_lon: default_lon(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl ServerConfig {
    /// Location used when a request carries no coordinates
    #[must_use]
    pub fn default_location(&self) -> Location {
        Location::new(self.default_lat, self.default_lon)
    }

    /// `host:port` string to bind
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl SprayForecastConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(Self::get_config_path);

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides, e.g. SPRAY_FORECAST_SERVER__PORT=8080
        builder = builder.add_source(
            Environment::with_prefix("SPRAY_FORECAST")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: SprayForecastConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        // Apply defaults for missing values
        config.apply_defaults();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Config file path: `$SPRAY_FORECAST_CONFIG`, else `config.toml`
    #[must_use]
    pub fn get_config_path() -> PathBuf {
        std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Apply default values to empty configuration fields
    pub fn apply_defaults(&mut self) {
        if self.weather.base_url.is_empty() {
            self.weather.base_url = default_weather_base_url();
        }
        if self.weather.user_agent.is_empty() {
            self.weather.user_agent = default_user_agent();
        }
        if self.weather.timeout_seconds == 0 {
            self.weather.timeout_seconds = default_weather_timeout();
        }
        if self.server.host.is_empty() {
            self.server.host = default_host();
        }
        if self.server.static_dir.is_empty() {
            self.server.static_dir = default_static_dir();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        self.server
            .default_location()
            .validate()
            .with_context(|| "Invalid default location")?;
        self.thresholds.validate()?;
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if !(1..=120).contains(&self.weather.timeout_seconds) {
            return Err(SprayForecastError::config(
                "Weather API timeout must be between 1 and 120 seconds",
            )
            .into());
        }

        if self.weather.max_retries > 10 {
            return Err(SprayForecastError::config("Weather API max retries cannot exceed 10").into());
        }

        if self.server.port == 0 {
            return Err(SprayForecastError::config("Server port cannot be 0").into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(SprayForecastError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(SprayForecastError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if !self.weather.base_url.starts_with("http://")
            && !self.weather.base_url.starts_with("https://")
        {
            return Err(SprayForecastError::config(
                "Weather API base URL must be a valid HTTP or HTTPS URL",
            )
            .into());
        }

        Ok(())
    }
}
