//! Route definitions for the Crop Season Prediction Service

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Prediction endpoint (public, synchronous)
        .route("/predict", get(handlers::predict))
}
