//! HTTP API Client
//!
//! Functions for communicating with the WatchTracker REST API.

use gloo_net::http::Request;

use crate::filter::FilterState;
use crate::state::global::{ContentItem, ListSummary, UserProfile, UserSummary};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8086/api/v1";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("watchtracker_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item("watchtracker_api_url", url);
        }
    }
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct ContentListResponse {
    pub items: Vec<ContentItem>,
    pub total: usize,
}

#[derive(Debug, serde::Deserialize)]
pub struct ListsResponse {
    pub lists: Vec<ListSummary>,
    pub total: usize,
}

#[derive(Debug, serde::Deserialize)]
pub struct UsersResponse {
    pub users: Vec<UserSummary>,
    pub total: usize,
}

#[derive(Debug, serde::Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Read the error message out of a failed response
async fn error_message(response: gloo_net::http::Response) -> String {
    match response.json::<ApiErrorResponse>().await {
        Ok(body) => body.error.message,
        Err(_) => format!("API error: {}", response.status()),
    }
}

// ============ Content ============

/// Fetch trending content
pub async fn fetch_trending() -> Result<Vec<ContentItem>, String> {
    let response = Request::get(&format!("{}/content/trending", get_api_base()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let result: ContentListResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;
    Ok(result.items)
}

/// Fetch discover content with the given filters applied server-side
pub async fn fetch_discover(filters: &FilterState) -> Result<Vec<ContentItem>, String> {
    let query = filters.to_query();
    let url = if query.is_empty() {
        format!("{}/content/discover", get_api_base())
    } else {
        format!("{}/content/discover?{}", get_api_base(), query)
    };

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let result: ContentListResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;
    Ok(result.items)
}

/// Fetch one content item
pub async fn fetch_content(id: u64) -> Result<ContentItem, String> {
    let response = Request::get(&format!("{}/content/{}", get_api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

// ============ Watched & comparisons ============

/// Fetch the user's watched content
pub async fn fetch_watched() -> Result<Vec<ContentItem>, String> {
    fetch_content_list("/user/watched").await
}

/// Fetch the user's watchlist content
pub async fn fetch_watchlist() -> Result<Vec<ContentItem>, String> {
    fetch_content_list("/user/watchlist").await
}

/// Fetch recommended content
pub async fn fetch_recommendations() -> Result<Vec<ContentItem>, String> {
    fetch_content_list("/user/recommendations").await
}

/// Record that the user watched an item
pub async fn mark_watched(content_id: u64) -> Result<(), String> {
    #[derive(serde::Serialize)]
    struct MarkWatchedRequest {
        content_id: u64,
    }

    let response = Request::post(&format!("{}/user/watched", get_api_base()))
        .json(&MarkWatchedRequest { content_id })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }
    Ok(())
}

/// Fetch comparison candidates for a newly-watched item (may be empty)
pub async fn fetch_comparison_candidates(content_id: u64) -> Result<Vec<ContentItem>, String> {
    fetch_content_list(&format!("/user/comparisons/{}", content_id)).await
}

/// Submit one comparison outcome; `preferred` is "new" or "existing"
pub async fn submit_comparison(
    new_content_id: u64,
    existing_content_id: u64,
    preferred: &str,
) -> Result<(), String> {
    #[derive(serde::Serialize)]
    struct SubmitComparisonRequest {
        new_content_id: u64,
        existing_content_id: u64,
        preferred: String,
    }

    let response = Request::post(&format!("{}/user/comparisons", get_api_base()))
        .json(&SubmitComparisonRequest {
            new_content_id,
            existing_content_id,
            preferred: preferred.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }
    Ok(())
}

// ============ Lists ============

/// Fetch the user's lists
pub async fn fetch_user_lists() -> Result<Vec<ListSummary>, String> {
    let response = Request::get(&format!("{}/user/lists", get_api_base()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let result: ListsResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;
    Ok(result.lists)
}

/// Create a list with the item already in it (one server-side operation)
pub async fn create_list_with_content(
    name: &str,
    content_id: u64,
) -> Result<ListSummary, String> {
    #[derive(serde::Serialize)]
    struct CreateListRequest {
        name: String,
        content_id: u64,
    }

    let response = Request::post(&format!("{}/user/lists", get_api_base()))
        .json(&CreateListRequest {
            name: name.to_string(),
            content_id,
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

/// Add an item to an existing list
pub async fn add_to_list(content_id: u64, list_id: u64) -> Result<(), String> {
    #[derive(serde::Serialize)]
    struct AddToListRequest {
        content_id: u64,
        list_id: u64,
    }

    let response = Request::post(&format!("{}/user/lists/add", get_api_base()))
        .json(&AddToListRequest {
            content_id,
            list_id,
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }
    Ok(())
}

// ============ Users ============

/// Search users by name
pub async fn search_users(query: &str) -> Result<Vec<UserSummary>, String> {
    let response = Request::get(&format!(
        "{}/users/search?q={}",
        get_api_base(),
        crate::filter::urlencode(query)
    ))
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let result: UsersResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;
    Ok(result.users)
}

/// Fetch a user's full profile
pub async fn fetch_user_profile(id: u64) -> Result<UserProfile, String> {
    let response = Request::get(&format!("{}/users/{}", get_api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

/// Follow a user
pub async fn follow_user(id: u64) -> Result<(), String> {
    let response = Request::post(&format!("{}/users/{}/follow", get_api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }
    Ok(())
}

/// Unfollow a user
pub async fn unfollow_user(id: u64) -> Result<(), String> {
    let response = Request::delete(&format!("{}/users/{}/follow", get_api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }
    Ok(())
}

/// Fetch followers of the requesting user
pub async fn fetch_followers() -> Result<Vec<UserSummary>, String> {
    fetch_user_list("/user/followers").await
}

/// Fetch users the requesting user follows
pub async fn fetch_following() -> Result<Vec<UserSummary>, String> {
    fetch_user_list("/user/following").await
}

// ============ Helpers ============

async fn fetch_content_list(path: &str) -> Result<Vec<ContentItem>, String> {
    let response = Request::get(&format!("{}{}", get_api_base(), path))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let result: ContentListResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;
    Ok(result.items)
}

async fn fetch_user_list(path: &str) -> Result<Vec<UserSummary>, String> {
    let response = Request::get(&format!("{}{}", get_api_base(), path))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let result: UsersResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;
    Ok(result.users)
}
