//! acr-ui library - frontend host service
//!
//! Serves the embedded browser page and the presentation-composition API
//! it consumes. Exposes the router and state for integration testing.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

pub mod api;
pub mod compose;

const INDEX_TEMPLATE: &str = include_str!("ui/index.html");

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Index page with the API base URL already substituted
    pub index_html: Arc<String>,
}

impl AppState {
    /// Prepare state for the given acr-api origin (no trailing slash)
    pub fn new(api_url: &str) -> Self {
        let index_html = INDEX_TEMPLATE.replace("{{API_BASE}}", api_url.trim_end_matches('/'));
        Self {
            index_html: Arc::new(index_html),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .route("/static/style.css", get(api::serve_style_css))
        .route("/api/compose", post(api::compose_review))
        .merge(api::health_routes())
        .with_state(state)
}
