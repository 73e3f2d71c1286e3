//! User Routes
//!
//! Social surface: search, profiles, and follows.
//!
//! - GET /api/v1/users/search?q= - Search users
//! - GET /api/v1/users/:id - Full profile view
//! - POST /api/v1/users/:id/follow - Follow a user
//! - DELETE /api/v1/users/:id/follow - Unfollow a user
//! - GET /api/v1/user/followers - Who follows the requesting user
//! - GET /api/v1/user/following - Whom the requesting user follows

use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    Json,
};
use std::sync::Arc;

use crate::api::dto::{UserProfileResponse, UserSearchParams, UsersResponse, StatusResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::catalog::types::UserId;

/// GET /api/v1/users/search
pub async fn search_users(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(params): Query<UserSearchParams>,
) -> ApiResult<Json<UsersResponse>> {
    let viewer = state.current_user(&headers).await;

    let users = if params.q.trim().is_empty() {
        Vec::new()
    } else {
        state.store.search_users(viewer, params.q.trim()).await
    };

    Ok(Json(UsersResponse {
        total: users.len(),
        users,
    }))
}

/// GET /api/v1/users/:id
///
/// Full profile: summary, bio, and the user's watched/watchlist content.
pub async fn user_profile(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<UserId>,
) -> ApiResult<Json<UserProfileResponse>> {
    let viewer = state.current_user(&headers).await;

    let account = state.store.user(id).await?;
    let summary = state.store.user_summary(viewer, id).await?;
    let watched_content = state.store.watched_content(id).await;
    let watchlist_content = state.store.watchlist_content(id).await;

    Ok(Json(UserProfileResponse {
        summary,
        bio: account.bio,
        favorite_genres: account.favorite_genres,
        streaming_platforms: account.streaming_platforms,
        watched_content,
        watchlist_content,
    }))
}

/// POST /api/v1/users/:id/follow
pub async fn follow_user(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<UserId>,
) -> ApiResult<Json<StatusResponse>> {
    let viewer = state.current_user(&headers).await;
    state.store.follow(viewer, id).await?;

    tracing::info!(follower = viewer, target = id, "Followed user");

    Ok(Json(StatusResponse::ok()))
}

/// DELETE /api/v1/users/:id/follow
pub async fn unfollow_user(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<UserId>,
) -> ApiResult<Json<StatusResponse>> {
    let viewer = state.current_user(&headers).await;
    state.store.unfollow(viewer, id).await?;

    Ok(Json(StatusResponse::ok()))
}

/// GET /api/v1/user/followers
pub async fn followers(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<Json<UsersResponse>> {
    let viewer = state.current_user(&headers).await;
    let users = state.store.followers(viewer, viewer).await;
    Ok(Json(UsersResponse {
        total: users.len(),
        users,
    }))
}

/// GET /api/v1/user/following
pub async fn following(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<Json<UsersResponse>> {
    let viewer = state.current_user(&headers).await;
    let users = state.store.following(viewer, viewer).await;
    Ok(Json(UsersResponse {
        total: users.len(),
        users,
    }))
}
