//! Business logic services for the Crop Season Prediction Service

pub mod prediction;

pub use prediction::PredictionService;
