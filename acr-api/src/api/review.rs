//! Review endpoint

use acr_common::Verdict;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::AppState;

/// POST /ai/get-review request body
#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    /// Source code to review; any language, any length, may be empty
    pub code: String,
}

/// POST /ai/get-review response body
#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub verdict: Verdict,
    pub review: String,
}

/// POST /ai/get-review
///
/// One model call per request, no queueing and no retry. An upstream
/// failure maps to a single 502 via `ApiError::Upstream`.
pub async fn get_review(
    State(state): State<AppState>,
    Json(request): Json<ReviewRequest>,
) -> ApiResult<Json<ReviewResponse>> {
    let outcome = state.reviewer.review_code(&request.code).await?;

    Ok(Json(ReviewResponse {
        verdict: outcome.verdict,
        review: outcome.review,
    }))
}
