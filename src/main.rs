// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Gym Pro API Server
//!
//! Public REST backend for the Gym Pro marketing site.

use gym_pro::{config::Config, db::DocumentStore, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(
        port = config.port,
        database_configured = config.database_url.is_some(),
        "Starting Gym Pro API"
    );

    // A missing or unreachable store leaves the handle unset; data routes
    // then report a configuration error instead of the process exiting.
    let store = DocumentStore::connect(config.database_url.as_deref()).await;

    let state = Arc::new(AppState::new(config.clone(), store));
    let app = gym_pro::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gym_pro=debug,info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .init();
}
