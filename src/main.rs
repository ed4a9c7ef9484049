// SPDX-License-Identifier: MIT

//! Paceline API Server
//!
//! Loads a saved dataset of fitness-tracker auto-posts, classifies every
//! post into a structured record, and serves aggregate rows and search
//! results for the dashboard frontend.

use paceline::{config::Config, services::loader, services::RecordCollection, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env();
    tracing::info!(port = config.port, "Starting Paceline API");

    // Load the saved posts. A malformed payload is fatal: nothing renders
    // downstream, so there is no point serving a half-built collection.
    tracing::info!(path = %config.dataset_path, "Loading saved posts");
    let posts = match loader::load_from_file(&config.dataset_path) {
        Ok(posts) => posts,
        Err(err) => {
            tracing::error!(error = %err, "Dataset load failed");
            return Err(err.into());
        }
    };

    // Classify once up front; the collection is read-only from here on.
    let collection = RecordCollection::from_raw(posts);

    // Build shared state
    let state = Arc::new(AppState { config: config.clone(), collection });

    // Build router
    let app = paceline::routes::create_router(state);

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
                .add_directive("paceline=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
