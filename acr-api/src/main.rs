//! acr-api - Review API microservice
//!
//! **Module Identity:**
//! - Name: acr-api (Review API)
//! - Port: 5880 (ACR_API_PORT)
//!
//! Accepts pasted source code over HTTP, forwards it to the Gemini API
//! with a fixed reviewer instruction, classifies the returned markdown,
//! and hands `{verdict, review}` back to the caller. Companion service
//! acr-ui serves the browser frontend.

use acr_common::ApiConfig;
use anyhow::Result;
use tracing::info;

use acr_api::services::{GeminiClient, ReviewService};
use acr_api::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting ACR Review API (acr-api) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let config = ApiConfig::from_env()?;
    info!("Model: {} via {}", config.gemini_model, config.gemini_api_base);
    info!("Allowed origins: {}", config.allowed_origins.join(", "));

    let client = GeminiClient::new(
        config.gemini_api_base.clone(),
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
    )?;
    let state = AppState::new(ReviewService::new(client));
    let app = build_router(state, &config.allowed_origins);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", config.port)).await?;
    info!("acr-api listening on http://127.0.0.1:{}", config.port);
    info!("Health check: http://127.0.0.1:{}/health", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
