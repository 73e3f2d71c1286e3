//! Watched History Routes
//!
//! The requesting user's watched state and derived views.
//!
//! - GET /api/v1/user/watched - Watched content, most recent first
//! - POST /api/v1/user/watched - Mark content watched
//! - GET /api/v1/user/watchlist - Content across the user's lists
//! - GET /api/v1/user/recommendations - Unwatched content worth a look
//! - GET /api/v1/user/rankings - Watched content by comparison ranking

use axum::{extract::State, http::HeaderMap, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::{
    ContentListResponse, MarkWatchedRequest, RankedContent, RankingsResponse, StatusResponse,
};
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// GET /api/v1/user/watched
pub async fn list_watched(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<Json<ContentListResponse>> {
    let user_id = state.current_user(&headers).await;
    let items = state.store.watched_content(user_id).await;
    Ok(Json(ContentListResponse::new(items)))
}

/// POST /api/v1/user/watched
///
/// Idempotent: marking an already-watched item is acknowledged without a
/// duplicate entry.
pub async fn mark_watched(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<MarkWatchedRequest>,
) -> ApiResult<(StatusCode, Json<StatusResponse>)> {
    let user_id = state.current_user(&headers).await;
    state.store.mark_watched(user_id, req.content_id).await?;

    tracing::info!(user_id, content_id = req.content_id, "Marked watched");

    Ok((StatusCode::CREATED, Json(StatusResponse::ok())))
}

/// GET /api/v1/user/watchlist
pub async fn watchlist(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<Json<ContentListResponse>> {
    let user_id = state.current_user(&headers).await;
    let items = state.store.watchlist_content(user_id).await;
    Ok(Json(ContentListResponse::new(items)))
}

/// GET /api/v1/user/recommendations
pub async fn recommendations(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<Json<ContentListResponse>> {
    let user_id = state.current_user(&headers).await;
    let items = state
        .store
        .recommendations(user_id, state.config.recommendation_limit)
        .await;
    Ok(Json(ContentListResponse::new(items)))
}

/// GET /api/v1/user/rankings
///
/// Watched content ordered by the comparison-derived score, best first.
pub async fn rankings(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<Json<RankingsResponse>> {
    let user_id = state.current_user(&headers).await;
    let rankings: Vec<RankedContent> = state
        .store
        .rankings(user_id)
        .await
        .into_iter()
        .map(|(entry, content)| RankedContent {
            content,
            ranking_score: entry.ranking_score,
            watched_at: entry.watched_at,
        })
        .collect();

    Ok(Json(RankingsResponse {
        total: rankings.len(),
        rankings,
    }))
}
