//! Auth Routes
//!
//! Minimal token-based session endpoints. Sessions are opaque bearer
//! tokens resolved by the store; clients receive the token explicitly and
//! carry it themselves.
//!
//! - POST /api/v1/auth/register - Create an account and open a session
//! - POST /api/v1/auth/login - Open a session
//! - POST /api/v1/auth/logout - Invalidate the presented token

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{AuthResponse, LoginRequest, RegisterRequest, StatusResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::{bearer_token, AppState};

/// POST /api/v1/auth/register
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let username = req.username.trim();
    if username.is_empty() {
        return Err(ApiError::Validation("Username cannot be empty".to_string()));
    }
    if req.email.trim().is_empty() || !req.email.contains('@') {
        return Err(ApiError::Validation("A valid email is required".to_string()));
    }
    if req.password.is_empty() {
        return Err(ApiError::Validation("Password cannot be empty".to_string()));
    }

    let display_name = req
        .display_name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(username);

    let (user, session) = state
        .store
        .register(username, display_name, req.email.trim(), &req.password)
        .await?;

    tracing::info!(user_id = user.id, username = %user.username, "Registered account");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token: session.token,
            user,
        }),
    ))
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let (user, session) = state.store.login(req.email.trim(), &req.password).await?;

    Ok(Json(AuthResponse {
        token: session.token,
        user,
    }))
}

/// POST /api/v1/auth/logout
///
/// Invalidates the presented bearer token; a missing token is acknowledged
/// as a no-op.
pub async fn logout(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<Json<StatusResponse>> {
    if let Some(token) = bearer_token(&headers) {
        state.store.logout(token).await;
    }
    Ok(Json(StatusResponse::ok()))
}
