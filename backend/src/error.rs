//! Error handling for the Crop Season Prediction Service
//!
//! The pipeline reports typed errors internally; at the HTTP boundary
//! every variant degrades to the wire shape the original clients
//! expect: `200 OK` with `{"error": "<message>"}`. The endpoint never
//! answers anything but JSON.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::InferenceError;
use thiserror::Error;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    // Request coercion errors
    #[error("missing required parameter '{0}'")]
    MissingParameter(&'static str),

    #[error("parameter '{name}' must be a number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },

    #[error("invalid query string: {0}")]
    InvalidQuery(String),

    // Inference pipeline errors (unknown category, malformed artifact, ...)
    #[error(transparent)]
    Inference(#[from] InferenceError),

    // Startup errors
    #[error("artifact error: {0}")]
    Artifact(String),

    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::warn!("prediction request failed: {}", self);

        // Status is 200 by contract; clients distinguish success from
        // failure by the presence of the "error" key.
        (
            StatusCode::OK,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
