//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use crate::catalog::types::{
    ContentId, ContentItem, ListId, ListSummary, Preferred, UserAccount, UserSummary,
};
use serde::{Deserialize, Serialize};

// ============================================
// CONTENT DTOs
// ============================================

/// Generic content collection response
#[derive(Debug, Serialize, Deserialize)]
pub struct ContentListResponse {
    /// Content items in result order
    pub items: Vec<ContentItem>,
    /// Total count
    pub total: usize,
}

impl ContentListResponse {
    pub fn new(items: Vec<ContentItem>) -> Self {
        Self {
            total: items.len(),
            items,
        }
    }
}

/// Discover filter query parameters
///
/// Absent parameters leave the corresponding predicate inactive; the
/// client omits identity values entirely.
#[derive(Debug, Default, Deserialize)]
pub struct DiscoverParams {
    /// Free-text search over title and platform labels
    #[serde(default)]
    pub search: Option<String>,
    /// Content type name, or "all"
    #[serde(default)]
    pub content_type: Option<String>,
    /// Single platform name, or "all"
    #[serde(default)]
    pub platform: Option<String>,
    /// Comma-separated genre labels
    #[serde(default)]
    pub genres: Option<String>,
    /// Minimum rating threshold
    #[serde(default)]
    pub min_rating: Option<f64>,
    /// Inclusive year range
    #[serde(default)]
    pub year_from: Option<i32>,
    #[serde(default)]
    pub year_to: Option<i32>,
    /// Comma-separated platform names (multi-select)
    #[serde(default)]
    pub platforms: Option<String>,
    /// Inclusive runtime range in minutes
    #[serde(default)]
    pub runtime_min: Option<u32>,
    #[serde(default)]
    pub runtime_max: Option<u32>,
}

// ============================================
// WATCHED / COMPARISON DTOs
// ============================================

/// Mark-watched request
#[derive(Debug, Deserialize)]
pub struct MarkWatchedRequest {
    /// Item to record as watched
    pub content_id: ContentId,
}

/// Comparison submission request
#[derive(Debug, Deserialize)]
pub struct SubmitComparisonRequest {
    /// The newly-watched item
    pub new_content_id: ContentId,
    /// The previously-watched candidate
    pub existing_content_id: ContentId,
    /// "new" or "existing"
    pub preferred: Preferred,
}

/// Simple acknowledgement response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Status: "ok"
    pub status: String,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// One entry of the ranked watched history
#[derive(Debug, Serialize, Deserialize)]
pub struct RankedContent {
    /// The watched item
    pub content: ContentItem,
    /// Comparison-derived ranking score
    pub ranking_score: f64,
    /// When it was marked watched (ms since epoch)
    pub watched_at: i64,
}

/// Ranked watched history response
#[derive(Debug, Serialize, Deserialize)]
pub struct RankingsResponse {
    /// Entries ordered best-first
    pub rankings: Vec<RankedContent>,
    /// Total count
    pub total: usize,
}

// ============================================
// LIST DTOs
// ============================================

/// Create-list request; when `content_id` is set the item is added in the
/// same operation
#[derive(Debug, Deserialize)]
pub struct CreateListRequest {
    /// List name
    pub name: String,
    /// Optional item to add as part of creation
    #[serde(default)]
    pub content_id: Option<ContentId>,
}

/// Add-to-existing-list request
#[derive(Debug, Deserialize)]
pub struct AddToListRequest {
    /// Item to add
    pub content_id: ContentId,
    /// Target list
    pub list_id: ListId,
}

/// User lists response
#[derive(Debug, Serialize, Deserialize)]
pub struct ListsResponse {
    /// Lists in creation order
    pub lists: Vec<ListSummary>,
    /// Total count
    pub total: usize,
}

// ============================================
// USER DTOs
// ============================================

/// User search query parameters
#[derive(Debug, Deserialize)]
pub struct UserSearchParams {
    /// Search text over username and display name
    #[serde(default)]
    pub q: String,
}

/// User collection response
#[derive(Debug, Serialize, Deserialize)]
pub struct UsersResponse {
    /// Matching users
    pub users: Vec<UserSummary>,
    /// Total count
    pub total: usize,
}

/// Full profile view of one user
#[derive(Debug, Serialize, Deserialize)]
pub struct UserProfileResponse {
    /// Viewer-relative summary (counts, follow state)
    #[serde(flatten)]
    pub summary: UserSummary,
    /// Short bio
    pub bio: String,
    /// Favorite genres
    pub favorite_genres: Vec<String>,
    /// Streaming platforms the user subscribes to
    pub streaming_platforms: Vec<String>,
    /// Recently watched content
    pub watched_content: Vec<ContentItem>,
    /// Watchlist content across the user's lists
    pub watchlist_content: Vec<ContentItem>,
}

// ============================================
// AUTH DTOs
// ============================================

/// Registration request
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    /// Defaults to the username when absent
    #[serde(default)]
    pub display_name: Option<String>,
    pub email: String,
    pub password: String,
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful register/login response
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Bearer token for subsequent requests
    pub token: String,
    /// The authenticated account
    pub user: UserAccount,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: healthy
    pub status: String,
    /// Number of content items in the catalog
    pub content_items: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
