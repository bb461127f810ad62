//! Crop Season Prediction Service - Backend
//!
//! Serves pre-trained planting-season and harvest-season classifiers
//! behind a synchronous HTTP GET endpoint.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod artifacts;
pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod services;

pub use artifacts::ModelArtifacts;
pub use config::Config;

/// Application state shared across handlers
///
/// The artifacts are loaded once at startup and immutable afterwards,
/// so handlers on every worker read them without locking.
#[derive(Clone)]
pub struct AppState {
    pub artifacts: Arc<ModelArtifacts>,
    pub config: Arc<Config>,
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Crop Season Prediction Service API v1.0"
}
