//! Configuration management for the Crop Season Prediction Service
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with CSP_ prefix

use std::net::{AddrParseError, SocketAddr};

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Model artifact configuration
    pub model: ModelConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

impl ServerConfig {
    /// Bind address from the configured host and port.
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ModelConfig {
    /// Path to the serialized model bundle (classifiers + encoders)
    pub bundle_path: String,

    /// Path to the serialized feature scaler
    pub scaler_path: String,

    /// Which model outputs the predict endpoint returns
    pub outputs: PredictionOutputs,
}

/// Which predictions to include in a response.
///
/// The original deployment shipped the single-model and dual-model
/// variants as separate processes; here one pipeline serves both,
/// selected by configuration.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PredictionOutputs {
    /// Harvest season only: `{"Best_Harvest_Season": ...}`
    Harvest,
    /// Planting and harvest season, keyed by descriptive sentences
    PlantingAndHarvest,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("CSP_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("model.bundle_path", "artifacts/harvest_model.json")?
            .set_default("model.scaler_path", "artifacts/scaler.json")?
            .set_default("model.outputs", "harvest")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (CSP_ prefix)
            .add_source(
                Environment::with_prefix("CSP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}
