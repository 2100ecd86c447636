//! Serve command - Starts the HTTP server.

use std::sync::Arc;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::{Dataset, FlashStore, SessionStore};

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");

    // Seed the in-memory sample dataset
    let dataset = Arc::new(Dataset::seeded());
    tracing::info!("Sample dataset ready");

    // Restore the durable session slot, if a snapshot was left behind
    let session = Arc::new(SessionStore::open(&config.session_file));
    let flash = Arc::new(FlashStore::new());

    // Create application state with the centralized service container
    let app_state = AppState::from_config(dataset, session, flash, &config);

    // Build router
    let app = create_router(app_state);

    // Start server
    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}
