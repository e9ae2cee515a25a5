//! # advertd — advert gateway daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialize tracing
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct the repository and notifier implementations (adapters)
//! - Construct the application service, injecting them via port traits
//! - Build the axum router, bind to a TCP port, and serve
//! - Handle graceful shutdown (SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use advert_adapter_http_axum::state::AppState;
use advert_adapter_mqtt::MqttConfirmationPublisher;
use advert_adapter_storage_sqlite_sqlx::{Config as DbConfig, SqliteAdvertRepository};
use advert_app::services::advert_service::AdvertService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = DbConfig {
        database_url: config.database.url.clone(),
    }
    .build()
    .await?;
    let repo = SqliteAdvertRepository::new(db.pool().clone());

    // Notifier
    let publisher = MqttConfirmationPublisher::new(config.notifier.clone());

    // Service + HTTP
    let state = AppState::new(AdvertService::new(repo, publisher));
    let app = advert_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(addr = %bind_addr, "advertd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
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
