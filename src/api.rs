//! JSON forecast endpoint
//!
//! `GET /api/forecast?lat=..&lon=..` fetches the forecast, judges it and
//! returns every display hour. Any failure becomes a 500 with
//! `{success: false, error}`; there are no partial results.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

use crate::models::{JudgmentRecord, Location};
use crate::spray::SprayEvaluator;
use crate::weather::ForecastSource;
use crate::{Result, SprayForecastError};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn ForecastSource>,
    pub evaluator: Arc<SprayEvaluator>,
    /// Used when a request omits `lat` or `lon`
    pub default_location: Location,
}

impl AppState {
    pub fn new(
        source: Arc<dyn ForecastSource>,
        evaluator: SprayEvaluator,
        default_location: Location,
    ) -> Self {
        Self {
            source,
            evaluator: Arc::new(evaluator),
            default_location,
        }
    }
}

/// Raw query parameters; parsed by hand so bad numbers get the JSON error body
#[derive(Debug, Default, Deserialize)]
pub struct ForecastQuery {
    pub lat: Option<String>,
    pub lon: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct ApiLocation {
    pub lat: f64,
    pub lon: f64,
}

impl From<Location> for ApiLocation {
    fn from(location: Location) -> Self {
        Self {
            lat: location.latitude,
            lon: location.longitude,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub success: bool,
    pub results: Vec<JudgmentRecord>,
    pub location: ApiLocation,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl IntoResponse for SprayForecastError {
    fn into_response(self) -> Response {
        error!("Error fetching forecast: {} ({})", self, self.user_message());
        let body = ErrorResponse {
            success: false,
            error: self.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/forecast", get(get_forecast))
        .with_state(state)
}

fn parse_coordinate(name: &str, raw: Option<&str>, default: f64) -> Result<f64> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse::<f64>().map_err(|_| {
            SprayForecastError::validation(format!("could not convert {name} to float: '{value}'"))
        }),
    }
}

impl ForecastQuery {
    /// Requested location, falling back to `default` per missing coordinate
    pub fn resolve(&self, default: Location) -> Result<Location> {
        let latitude = parse_coordinate("lat", self.lat.as_deref(), default.latitude)?;
        let longitude = parse_coordinate("lon", self.lon.as_deref(), default.longitude)?;
        let location = Location::new(latitude, longitude);
        location.validate()?;
        Ok(location)
    }
}

#[instrument(skip(state, query))]
async fn get_forecast(
    State(state): State<AppState>,
    query: std::result::Result<Query<ForecastQuery>, QueryRejection>,
) -> Result<Json<ForecastResponse>> {
    // axum's own rejection is a plain-text 400; keep the JSON envelope
    let Query(query) = query.map_err(|e| SprayForecastError::validation(e.body_text()))?;
    let location = query.resolve(state.default_location)?;
    info!(
        "Fetching forecast for lat={}, lon={}",
        location.latitude, location.longitude
    );

    let entries = state.source.fetch(&location).await?;

    let evaluator = Arc::clone(&state.evaluator);
    let results = tokio::task::spawn_blocking(move || evaluator.evaluate(&entries))
        .await
        .map_err(|e| SprayForecastError::evaluation(format!("Evaluation task failed: {e}")))?;

    info!("Judged {} hours for {}", results.len(), location.format_coordinates());

    Ok(Json(ForecastResponse {
        success: true,
        results,
        location: location.into(),
    }))
}
