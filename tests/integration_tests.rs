//! Integration tests for the spray forecast HTTP surface

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{Duration, TimeZone, Utc};
use http_body_util::BodyExt;
use serde_json::Value;
use spray_forecast::models::InstantDetails;
use spray_forecast::{
    AppState, ForecastEntry, ForecastSource, Location, SprayEvaluator, SprayForecastError,
    Thresholds, web,
};
use tower::ServiceExt;

/// Forecast source returning canned entries and recording requested locations
struct StubSource {
    entries: Vec<ForecastEntry>,
    requested: Mutex<Vec<Location>>,
}

#[async_trait]
impl ForecastSource for StubSource {
    async fn fetch(&self, location: &Location) -> spray_forecast::Result<Vec<ForecastEntry>> {
        self.requested.lock().unwrap().push(*location);
        Ok(self.entries.clone())
    }
}

/// Forecast source that always fails
struct FailingSource;

#[async_trait]
impl ForecastSource for FailingSource {
    async fn fetch(&self, _location: &Location) -> spray_forecast::Result<Vec<ForecastEntry>> {
        Err(SprayForecastError::upstream(
            "Forecast request failed with status: 503 Service Unavailable",
        ))
    }
}

/// One JST day (2024-06-01) of calm hourly weather with rain at 10:00
fn sample_day() -> Vec<ForecastEntry> {
    let midnight_jst = Utc.with_ymd_and_hms(2024, 5, 31, 15, 0, 0).unwrap();
    (0..24)
        .map(|hour| {
            let precip = if hour == 10 { 0.5 } else { 0.0 };
            ForecastEntry::new(
                midnight_jst + Duration::hours(hour),
                InstantDetails {
                    wind_speed: 1.0,
                    air_temperature: 20.0,
                    cloud_area_fraction: 50.0,
                },
            )
            .with_next_1_hours(precip)
        })
        .collect()
}

fn default_location() -> Location {
    Location::new(35.5, 139.6)
}

fn stub_app(entries: Vec<ForecastEntry>) -> (axum::Router, Arc<StubSource>) {
    let source = Arc::new(StubSource {
        entries,
        requested: Mutex::new(Vec::new()),
    });
    let state = AppState::new(
        source.clone(),
        SprayEvaluator::new(Thresholds::default()).unwrap(),
        default_location(),
    );
    (web::app(state, "static"), source)
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_forecast_success_envelope() {
    let (app, source) = stub_app(sample_day());
    let (status, body) = get_json(app, "/api/forecast?lat=43.06&lon=141.35").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["location"]["lat"], 43.06);
    assert_eq!(body["location"]["lon"], 141.35);
    assert_eq!(
        source.requested.lock().unwrap().as_slice(),
        &[Location::new(43.06, 141.35)]
    );

    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 20);

    let first = &results[0];
    assert_eq!(first["local_time"], "2024-06-01T04:00:00+09:00");
    assert_eq!(first["status"], "GREEN");
    assert_eq!(first["condition"], "cloudy");
    assert_eq!(first["is_spray_time"], true);
    assert!(
        first["warnings"][0]
            .as_str()
            .unwrap()
            .contains("Rain is forecast later today")
    );

    let rain_hour = &results[6];
    assert_eq!(rain_hour["local_time"], "2024-06-01T10:00:00+09:00");
    assert_eq!(rain_hour["status"], "RED");
    assert_eq!(rain_hour["reason"], serde_json::json!(["rain risk"]));
    assert_eq!(rain_hour["condition"], "light_rain");
    assert_eq!(rain_hour["precip"], 0.5);
}

#[tokio::test]
async fn test_forecast_defaults_location() {
    let (app, source) = stub_app(sample_day());
    let (status, body) = get_json(app, "/api/forecast").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["location"]["lat"], 35.5);
    assert_eq!(body["location"]["lon"], 139.6);
    assert_eq!(source.requested.lock().unwrap()[0], default_location());
}

#[tokio::test]
async fn test_forecast_invalid_coordinate_is_server_error() {
    let (app, source) = stub_app(sample_day());
    let (status, body) = get_json(app, "/api/forecast?lat=abc").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("lat"));
    assert!(body.get("results").is_none());
    assert!(source.requested.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_forecast_duplicate_query_parameter_is_server_error() {
    let (app, source) = stub_app(sample_day());
    let (status, body) = get_json(app, "/api/forecast?lat=35&lat=36").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid input"));
    assert!(source.requested.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_forecast_upstream_failure_is_server_error() {
    let state = AppState::new(
        Arc::new(FailingSource),
        SprayEvaluator::default(),
        default_location(),
    );
    let app = web::app(state, "static");
    let (status, body) = get_json(app, "/api/forecast?lat=35.5&lon=139.6").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("503"));
}

#[tokio::test]
async fn test_empty_forecast_gives_empty_results() {
    let (app, _) = stub_app(Vec::new());
    let (status, body) = get_json(app, "/api/forecast").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"], serde_json::json!([]));
}

#[tokio::test]
async fn test_health_check() {
    let (app, _) = stub_app(Vec::new());
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"OK");
}

#[tokio::test]
async fn test_index_page_is_served() {
    let (app, _) = stub_app(Vec::new());
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(String::from_utf8_lossy(&bytes).contains("/api/forecast"));
}
