//! acr-ui - Frontend host microservice
//!
//! **Module Identity:**
//! - Name: acr-ui (Review UI)
//! - Port: 5881 (ACR_UI_PORT)
//!
//! Serves the code-review browser page (editor, theme toggle, copy and
//! download helpers) and the compose endpoint that orders review sections
//! for display. Review requests themselves go from the browser straight
//! to acr-api.

use acr_common::UiConfig;
use anyhow::Result;
use tracing::info;

use acr_ui::{build_router, AppState};

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
        "Starting ACR Review UI (acr-ui) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let config = UiConfig::from_env();
    info!("Review API: {}", config.api_url);

    let state = AppState::new(&config.api_url);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", config.port)).await?;
    info!("acr-ui listening on http://127.0.0.1:{}", config.port);
    info!("Health check: http://127.0.0.1:{}/health", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
