//! Health Routes
//!
//! Liveness and readiness probes plus a full status view.
//!
//! - GET /health/live - Liveness probe
//! - GET /health/ready - Readiness probe
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Ready once the catalog is reachable (always, for the in-memory store).
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    let _ = state.store.content_count().await;
    StatusCode::OK
}

/// GET /health
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        content_items: state.store.content_count().await,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
