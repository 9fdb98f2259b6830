//! UI serving routes
//!
//! Serves the embedded HTML/JS/CSS page. The HTML template carries an
//! `{{API_BASE}}` placeholder that is substituted once at startup with
//! the advertised acr-api origin.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::AppState;

const APP_JS: &str = include_str!("../ui/app.js");
const STYLE_CSS: &str = include_str!("../ui/style.css");

/// GET /
///
/// Serves the main UI page with the API base URL substituted in
pub async fn serve_index(State(state): State<AppState>) -> Html<String> {
    Html(state.index_html.as_ref().clone())
}

/// GET /static/app.js
pub async fn serve_app_js() -> Response {
    (
        StatusCode::OK,
        [("content-type", "application/javascript")],
        APP_JS,
    )
        .into_response()
}

/// GET /static/style.css
pub async fn serve_style_css() -> Response {
    (StatusCode::OK, [("content-type", "text/css")], STYLE_CSS).into_response()
}
