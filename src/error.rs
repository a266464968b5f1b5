//! Error types and handling for the spray forecast service

use thiserror::Error;

/// Main error type for the spray forecast service
#[derive(Error, Debug)]
pub enum SprayForecastError {
    /// Network failure, timeout or non-2xx answer from the forecast provider
    #[error("Upstream fetch error: {message}")]
    UpstreamFetch { message: String },

    /// Provider payload is missing structure that defaults cannot cover
    #[error("Malformed forecast data: {message}")]
    MalformedData { message: String },

    /// Unexpected failure while judging the forecast
    #[error("Evaluation error: {message}")]
    Evaluation { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },
}

impl SprayForecastError {
    /// Create a new upstream fetch error
    pub fn upstream<S: Into<String>>(message: S) -> Self {
        Self::UpstreamFetch {
            message: message.into(),
        }
    }

    /// Create a new malformed data error
    pub fn malformed<S: Into<String>>(message: S) -> Self {
        Self::MalformedData {
            message: message.into(),
        }
    }

    /// Create a new evaluation error
    pub fn evaluation<S: Into<String>>(message: S) -> Self {
        Self::Evaluation {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SprayForecastError::UpstreamFetch { .. } => {
                "Unable to reach the weather forecast service. Please try again later.".to_string()
            }
            SprayForecastError::MalformedData { .. } => {
                "The weather forecast service returned unexpected data.".to_string()
            }
            SprayForecastError::Evaluation { .. } => {
                "Failed to evaluate the forecast.".to_string()
            }
            SprayForecastError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            SprayForecastError::Validation { message } => {
                format!("Invalid input: {message}")
            }
        }
    }
}
