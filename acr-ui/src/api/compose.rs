//! Compose endpoint
//!
//! The page fetches the raw review from acr-api, then asks this endpoint
//! for the render plan. Keeping composition here means the browser script
//! never re-implements verdict classification or section splitting.

use axum::Json;
use serde::Deserialize;

use crate::compose::{compose, ComposedReview};

/// POST /api/compose request body
#[derive(Debug, Deserialize)]
pub struct ComposeRequest {
    /// Raw review markdown as returned by acr-api
    pub review: String,
}

/// POST /api/compose
///
/// Pure transformation; cannot fail. Malformed markdown composes to a
/// shorter (possibly empty) section list.
pub async fn compose_review(Json(request): Json<ComposeRequest>) -> Json<ComposedReview> {
    Json(compose(&request.review))
}
