//! # depotd — depot daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialize tracing
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct the repository implementation (adapter)
//! - Construct the device service, injecting the repository via its port
//! - Build the axum router, injecting the service
//! - Bind to a TCP port and serve until SIGINT
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

use depot_adapter_http_axum::state::AppState;
use depot_adapter_storage_sqlite_sqlx::{Config as DbConfig, SqliteDeviceRepository};
use depot_app::services::device_service::DeviceService;
use tracing_subscriber::EnvFilter;

mod config;

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = DbConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;

    // Repository and service
    let device_repo = SqliteDeviceRepository::new(db.pool().clone());
    let device_service = DeviceService::new(device_repo);

    // HTTP
    let state = AppState::new(device_service);
    let app = depot_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "depotd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install shutdown signal handler");
    }
}
