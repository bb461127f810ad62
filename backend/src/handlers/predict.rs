//! HTTP handler for the prediction endpoint

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use shared::CropObservation;

use crate::error::{AppError, AppResult};
use crate::services::PredictionService;
use crate::AppState;

/// Raw query parameters for `GET /predict`.
///
/// Everything arrives as an optional string so that missing and
/// malformed values surface as our own typed errors instead of an
/// extractor rejection; the wire contract is JSON for every outcome.
#[derive(Debug, Deserialize)]
pub struct PredictQuery {
    pub temperature: Option<String>,
    pub humidity: Option<String>,
    pub ph: Option<String>,
    pub water_availability: Option<String>,
    pub label: Option<String>,
    pub country: Option<String>,
}

impl PredictQuery {
    /// Coerce the raw parameters into an observation.
    pub fn into_observation(self) -> AppResult<CropObservation> {
        Ok(CropObservation {
            temperature: require_number("temperature", self.temperature)?,
            humidity: require_number("humidity", self.humidity)?,
            ph: require_number("ph", self.ph)?,
            water_availability: require_number("water_availability", self.water_availability)?,
            label: require_present("label", self.label)?,
            country: require_present("country", self.country)?,
        })
    }
}

fn require_present(name: &'static str, value: Option<String>) -> AppResult<String> {
    value.ok_or(AppError::MissingParameter(name))
}

fn require_number(name: &'static str, value: Option<String>) -> AppResult<f64> {
    let raw = require_present(name, value)?;
    raw.trim()
        .parse()
        .map_err(|_| AppError::InvalidNumber { name, value: raw })
}

/// Prediction endpoint handler
///
/// The extractor result is taken by value so that a query string axum
/// cannot deserialize (a duplicated parameter, say) still comes back as
/// the JSON error shape instead of the extractor's plain-text rejection.
pub async fn predict(
    State(state): State<AppState>,
    query: Result<Query<PredictQuery>, QueryRejection>,
) -> AppResult<Json<Value>> {
    let Query(query) = query.map_err(|rejection| AppError::InvalidQuery(rejection.body_text()))?;
    let observation = query.into_observation()?;
    let service = PredictionService::new(state.artifacts.clone(), state.config.model.outputs);
    let prediction = service.predict(&observation)?;
    Ok(Json(prediction.into_response_body()))
}
