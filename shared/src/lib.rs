//! Shared types for the Crop Season Prediction Service
//!
//! This crate owns the serialized artifact schema (model bundle, scaler,
//! encoders) and the pure inference primitives the backend builds on.

pub mod bundle;
pub mod encoder;
pub mod error;
pub mod features;
pub mod scaler;
pub mod tree;

pub use bundle::*;
pub use encoder::*;
pub use error::*;
pub use features::*;
pub use scaler::*;
pub use tree::*;
