use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Targets that receive the configured level.
const LOG_TARGETS: &[&str] = &["spray_forecast", "tower_http"];

/// Initialize tracing from the logging section.
///
/// The configured level applies to this crate and `tower_http`; everything
/// else stays at `warn`. `RUST_LOG` overrides the whole filter if set.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let default_filter = std::iter::once("warn".to_string())
        .chain(
            LOG_TARGETS
                .iter()
                .map(|target| format!("{target}={}", config.level)),
        )
        .collect::<Vec<_>>()
        .join(",");

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = match config.format.as_str() {
        "json" => builder.json().try_init(),
        _ => builder.try_init(),
    };

    installed.map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))
}
