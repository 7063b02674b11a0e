// SPDX-License-Identifier: MIT

//! GymWave API Server
//!
//! Serves the gym-management REST API: document-store-backed resources
//! with cookie-based JWT sessions and role-gated admin/trainer endpoints.

use gymwave::{config::Config, db::GymDb, services::PaymentClient, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting GymWave API");

    // Initialize document store
    let db = GymDb::new(&config.gcp_project_id)
        .await
        .expect("Failed to connect to document store");

    // Payment provider client
    let payments = PaymentClient::new(config.stripe_secret_key.clone());

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        db,
        payments,
    });

    // Build router
    let app = gymwave::routes::create_router(state);

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

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gymwave=debug".parse().expect("valid directive"))
                .add_directive("info".parse().expect("valid directive")),
        )
        .with(format)
        .init();
}
