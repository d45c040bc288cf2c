//! PDU sink server entry point.
//!
//! Wires the storage initializer and the ingestion API into one process.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from environment variables
//! 3. Open the `SQLite` store and ensure the schema (fatal on failure)
//! 4. Bind the HTTP listener and serve `POST /submit-pdu`
//! 5. On `Ctrl-C`/`SIGTERM`, drain in-flight requests and close the pool
//!
//! TLS is expected to be terminated in front of this process.

mod config;
mod error;

use std::process::ExitCode;
use std::sync::Arc;

use pdusink_api::{AppState, shutdown_signal, start_server};
use pdusink_db::SqlitePool;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::error::StartupError;

/// Application entry point.
///
/// Logs the failure and exits non-zero if startup or serving fails.
#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("pdusink-server starting");

    match run().await {
        Ok(()) => {
            info!("pdusink-server stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "pdusink-server failed");
            ExitCode::FAILURE
        }
    }
}

/// Run the startup sequence and serve until shutdown.
async fn run() -> Result<(), StartupError> {
    let config = AppConfig::from_env()?;
    info!(
        host = %config.server.host,
        port = config.server.port,
        database_url = %config.database.url,
        max_connections = config.database.max_connections,
        max_body_bytes = config.max_body_bytes,
        "Configuration loaded"
    );

    // The store must be ready before the listener accepts anything.
    let store = SqlitePool::initialize(&config.database).await?;

    let state = Arc::new(
        AppState::new(store.clone(), config.api_token).with_max_body_bytes(config.max_body_bytes),
    );

    let served = start_server(&config.server, state, shutdown_signal()).await;
    store.close().await;
    served?;

    Ok(())
}
