//! acr-api library - review API service
//!
//! Exposes the router and state for integration testing.

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};

pub mod api;
pub mod error;
pub mod services;

pub use error::{ApiError, ApiResult};

use services::ReviewService;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Review orchestrator (stateless; shared only to reuse the HTTP client)
    pub reviewer: Arc<ReviewService>,
}

impl AppState {
    pub fn new(reviewer: ReviewService) -> Self {
        Self {
            reviewer: Arc::new(reviewer),
        }
    }
}

/// Build application router.
///
/// CORS allows only the configured origins, with credentials. Origins
/// that fail header-value parsing are dropped with a warning rather than
/// aborting startup.
pub fn build_router(state: AppState, allowed_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    // Credentials are enabled, so the origin list must stay explicit
    // (tower-http rejects allow_credentials(true) with a wildcard)
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    Router::new()
        .route("/ai/get-review", post(api::get_review))
        .route("/build_info", get(api::get_build_info))
        .merge(api::health_routes())
        .with_state(state)
        .layer(cors)
}
