//! Comparison Routes
//!
//! Candidate sampling and outcome recording for the pairwise comparison
//! workflow.
//!
//! - GET /api/v1/user/comparisons/:content_id - Candidates for a new item
//! - POST /api/v1/user/comparisons - Record one outcome

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{ContentListResponse, StatusResponse, SubmitComparisonRequest};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::catalog::types::{ComparisonOutcome, ContentId};
use crate::workflow::comparison::MAX_ROUNDS;

/// GET /api/v1/user/comparisons/:content_id
///
/// Up to three previously-watched items to compare the given item against.
/// May be empty for a fresh account.
pub async fn comparison_candidates(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(content_id): Path<ContentId>,
) -> ApiResult<Json<ContentListResponse>> {
    let user_id = state.current_user(&headers).await;

    // 404 for unknown content rather than an empty sample
    state.store.content(user_id, content_id).await?;

    let items = state
        .store
        .comparison_candidates(user_id, content_id, MAX_ROUNDS)
        .await;
    Ok(Json(ContentListResponse::new(items)))
}

/// POST /api/v1/user/comparisons
///
/// Fire-once write: outcomes are never rolled back or read back by clients.
pub async fn submit_comparison(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<SubmitComparisonRequest>,
) -> ApiResult<(StatusCode, Json<StatusResponse>)> {
    let user_id = state.current_user(&headers).await;

    let outcome = ComparisonOutcome {
        new_content_id: req.new_content_id,
        existing_content_id: req.existing_content_id,
        preferred: req.preferred,
    };
    state.store.record_comparison(user_id, outcome).await?;

    tracing::info!(
        user_id,
        new_content_id = req.new_content_id,
        existing_content_id = req.existing_content_id,
        preferred = %req.preferred,
        "Recorded comparison"
    );

    Ok((StatusCode::CREATED, Json(StatusResponse::ok())))
}
