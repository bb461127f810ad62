//! Crop Season Prediction Service entry point

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crop_season_backend::{artifacts::ModelArtifacts, config::Config, create_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "csp_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load().context("failed to load configuration")?;

    tracing::info!("Starting Crop Season Prediction Server");
    tracing::info!("Environment: {}", config.environment);

    // Load model artifacts once; they are immutable for the process lifetime
    tracing::info!("Loading model artifacts...");
    let artifacts = ModelArtifacts::load(&config.model).context("failed to load model artifacts")?;
    tracing::info!(
        crops = artifacts.bundle.label_encoder.len(),
        countries = artifacts.bundle.country_encoder.len(),
        planting_model = artifacts.bundle.has_planting_model(),
        "Model artifacts loaded"
    );

    // Create application state
    let state = AppState {
        artifacts: Arc::new(artifacts),
        config: Arc::new(config.clone()),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = config
        .server
        .socket_addr()
        .context("invalid server.host / server.port")?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
