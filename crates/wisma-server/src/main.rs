//! Wisma occupancy API server.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from environment variables
//! 2. Initialize structured logging (tracing)
//! 3. Load the dataset file (an unreadable file yields an empty dataset)
//! 4. Serve the HTTP API until `Ctrl-C` or `SIGTERM`

mod error;

use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wisma_api::{AppState, ServerConfig};
use wisma_core::{Dataset, ServiceConfig};

use crate::error::AppError;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the server cannot
/// bind its address. Request-time faults never end the process.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Configuration comes first so APP_DEBUG can pick the default log level.
    let config = ServiceConfig::from_env()
        .map_err(AppError::from)
        .context("failed to load configuration")?;

    let default_level = if config.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(true)
        .init();

    info!(
        port = config.port,
        debug = config.debug,
        data_path = %config.data_path.display(),
        date_key = config.date_key,
        "wisma-server starting"
    );

    let dataset = Dataset::load(&config.data_path);
    if dataset.snapshot(&config.date_key).is_none() {
        let available: Vec<&str> = dataset.date_keys().collect();
        tracing::warn!(
            date_key = config.date_key,
            ?available,
            "configured snapshot not present, queries will return 404"
        );
    }

    let state = Arc::new(AppState::new(dataset, config.date_key.clone()));
    wisma_api::start_server(&ServerConfig::from(&config), state)
        .await
        .map_err(AppError::from)
        .context("API server failed")?;

    info!("wisma-server stopped");
    Ok(())
}
