//! List Routes
//!
//! The requesting user's named lists.
//!
//! - GET /api/v1/user/lists - List summaries
//! - POST /api/v1/user/lists - Create a list (optionally adding an item)
//! - POST /api/v1/user/lists/add - Add an item to an existing list
//! - GET /api/v1/user/lists/:id - Content of one list

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{
    AddToListRequest, ContentListResponse, CreateListRequest, ListsResponse, StatusResponse,
};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::catalog::types::{ListId, ListSummary};

const MAX_LIST_NAME_LEN: usize = 100;

/// GET /api/v1/user/lists
pub async fn list_lists(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<Json<ListsResponse>> {
    let user_id = state.current_user(&headers).await;
    let lists = state.store.user_lists(user_id).await;
    Ok(Json(ListsResponse {
        total: lists.len(),
        lists,
    }))
}

/// POST /api/v1/user/lists
///
/// Creates a list; when `content_id` is present the item is added in the
/// same operation, so the pair is atomic on the server side.
pub async fn create_list(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<CreateListRequest>,
) -> ApiResult<(StatusCode, Json<ListSummary>)> {
    let user_id = state.current_user(&headers).await;

    let name = req.name.trim();
    if name.is_empty() {
        return Err(ApiError::Validation("List name cannot be empty".to_string()));
    }
    if name.len() > MAX_LIST_NAME_LEN {
        return Err(ApiError::Validation(format!(
            "List name exceeds maximum length of {} characters",
            MAX_LIST_NAME_LEN
        )));
    }

    let summary = match req.content_id {
        Some(content_id) => {
            state
                .store
                .create_list_and_add(user_id, name, content_id)
                .await?
        }
        None => state.store.create_list(user_id, name).await?,
    };

    tracing::info!(user_id, list_id = summary.id, list_name = %summary.name, "Created list");

    Ok((StatusCode::CREATED, Json(summary)))
}

/// POST /api/v1/user/lists/add
pub async fn add_to_list(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<AddToListRequest>,
) -> ApiResult<Json<StatusResponse>> {
    let user_id = state.current_user(&headers).await;
    state
        .store
        .add_to_list(user_id, req.content_id, req.list_id)
        .await?;

    Ok(Json(StatusResponse::ok()))
}

/// GET /api/v1/user/lists/:id
pub async fn list_content(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(list_id): Path<ListId>,
) -> ApiResult<Json<ContentListResponse>> {
    let user_id = state.current_user(&headers).await;
    let items = state.store.list_content(user_id, list_id).await?;
    Ok(Json(ContentListResponse::new(items)))
}
