//! HTTP handlers for the Crop Season Prediction Service

pub mod health;
pub mod predict;

pub use health::health_check;
pub use predict::predict;
