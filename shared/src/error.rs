//! Inference error types

use thiserror::Error;

/// Errors raised by the pure inference primitives.
///
/// Unknown categories are an error by contract: the encoders are fitted
/// offline and an unseen value means the request falls outside the
/// model's training vocabulary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InferenceError {
    #[error("previously unseen {feature} category: '{value}'")]
    UnknownCategory { feature: &'static str, value: String },

    #[error("class code {0} is outside the fitted vocabulary")]
    UnknownClassCode(usize),

    #[error("expected {expected} features, got {actual}")]
    FeatureLengthMismatch { expected: usize, actual: usize },

    #[error("malformed decision tree: node reference {0} out of bounds")]
    MalformedTree(usize),

    #[error("planting model and planting season encoder must be exported together")]
    UnpairedPlantingArtifacts,
}
