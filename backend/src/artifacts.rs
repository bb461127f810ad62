//! Model artifact loading
//!
//! Artifacts are produced offline and consumed here as read-only
//! inputs. Loading happens exactly once, before the server accepts
//! requests; a bundle that fails its coherence checks aborts startup.

use std::fs;
use std::path::Path;

use shared::{ModelBundle, StandardScaler, FEATURE_COUNT};

use crate::config::{ModelConfig, PredictionOutputs};
use crate::error::{AppError, AppResult};

/// The fitted artifacts backing the prediction pipeline.
#[derive(Debug, Clone)]
pub struct ModelArtifacts {
    pub bundle: ModelBundle,
    pub scaler: StandardScaler,
}

impl ModelArtifacts {
    /// Load and validate the bundle and scaler named in configuration.
    pub fn load(config: &ModelConfig) -> AppResult<Self> {
        let bundle: ModelBundle = read_json(&config.bundle_path)?;
        let scaler: StandardScaler = read_json(&config.scaler_path)?;

        bundle.validate(FEATURE_COUNT)?;

        if scaler.n_features() != FEATURE_COUNT || scaler.mean.len() != scaler.scale.len() {
            return Err(AppError::Artifact(format!(
                "scaler was fitted on {} features, expected {}",
                scaler.n_features(),
                FEATURE_COUNT
            )));
        }

        if config.outputs == PredictionOutputs::PlantingAndHarvest && !bundle.has_planting_model() {
            return Err(AppError::Configuration(
                "outputs = planting_and_harvest requires a bundle with a planting model".into(),
            ));
        }

        Ok(Self { bundle, scaler })
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &str) -> AppResult<T> {
    let raw = fs::read_to_string(Path::new(path))
        .map_err(|e| AppError::Artifact(format!("cannot read '{}': {}", path, e)))?;
    serde_json::from_str(&raw)
        .map_err(|e| AppError::Artifact(format!("cannot parse '{}': {}", path, e)))
}
