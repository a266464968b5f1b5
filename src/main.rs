use std::sync::Arc;

use anyhow::Result;
use spray_forecast::{
    AppState, MetNoClient, SprayEvaluator, SprayForecastConfig, VERSION, logging, web,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = SprayForecastConfig::load()?;
    logging::init(&config.logging)?;

    tracing::info!("Starting spray-forecast {}", VERSION);

    let evaluator = SprayEvaluator::new(config.thresholds.clone())?;
    tracing::debug!("Thresholds: {:?}", evaluator.thresholds());

    let source = MetNoClient::new(&config.weather)?;
    let state = AppState::new(
        Arc::new(source),
        evaluator,
        config.server.default_location(),
    );

    web::run(&config.server, state).await
}
