//! Bank Frontend - Main Application Entry Point
//!
//! This is the web tier of a simulated banking demo. It serves HTML pages,
//! manages a trivial session cookie, and proxies user actions (balance and
//! history views, payments, deposits) to three upstream HTTP services.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Upstream calls**: reqwest with explicit timeout/retry policy
//! - **Authentication**: fixed demo token in a cookie (placeholder)
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables (fails fast when a
//!    required service address is missing)
//! 2. Build the upstream HTTP client
//! 3. Build the router
//! 4. Start the server on the configured port

use std::sync::Arc;

use bank_frontend::{config::Config, routes, services::backend::HttpBackend, state::AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Build the upstream client and shared state
    let backend = Arc::new(HttpBackend::new(&config)?);
    let port = config.port;
    let state = AppState::new(config, backend);

    let app = routes::app(state);

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Start serving HTTP requests
    axum::serve(listener, app).await?;

    Ok(())
}
