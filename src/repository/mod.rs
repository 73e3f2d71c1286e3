//! Content repository contract
//!
//! The seam between the client-side workflows and whatever supplies content
//! and persists watched/list/comparison state. Two implementations ship:
//!
//! - [`MemoryRepository`]: backed by the in-memory [`CatalogStore`], with an
//!   optional artificial delay to mimic network latency
//! - [`HttpRepository`]: a reqwest client against the REST API, carrying an
//!   explicit [`Session`] instead of reading a token from ambient storage
//!
//! [`CatalogStore`]: crate::catalog::CatalogStore
//! [`Session`]: crate::catalog::Session

pub mod http;
pub mod memory;

pub use http::{HttpRepository, HttpRepositoryConfig};
pub use memory::MemoryRepository;

use crate::catalog::error::CatalogError;
use crate::catalog::types::{ComparisonOutcome, ContentId, ContentItem, ListId, ListSummary};
use crate::discover::FilterCriteria;
use async_trait::async_trait;
use thiserror::Error;

/// Errors from repository operations
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Referenced content, list, or user is absent
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request exceeded its timeout
    #[error("Request timed out")]
    Timeout,

    /// Repository is unreachable
    #[error("Repository unavailable")]
    Unavailable,

    /// Transport-level failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// The repository rejected the request
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

impl RepositoryError {
    /// Transient failures may succeed on retry; not-found and rejections
    /// will not
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            RepositoryError::Timeout | RepositoryError::Unavailable | RepositoryError::Transport(_)
        )
    }
}

impl From<CatalogError> for RepositoryError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::ContentNotFound(_)
            | CatalogError::ListNotFound(_)
            | CatalogError::UserNotFound(_) => RepositoryError::NotFound(err.to_string()),
            _ => RepositoryError::Api {
                status: 400,
                message: err.to_string(),
            },
        }
    }
}

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Supplies content records and persists watched/list/comparison state
///
/// All calls act on behalf of one user; implementations carry that identity
/// internally (store user id or session token).
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Fetch one content item
    async fn content_by_id(&self, id: ContentId) -> RepositoryResult<ContentItem>;

    /// Trending content, best first
    async fn trending(&self) -> RepositoryResult<Vec<ContentItem>>;

    /// Content matching the given filter criteria
    async fn discover(&self, criteria: &FilterCriteria) -> RepositoryResult<Vec<ContentItem>>;

    /// The user's watched content, most recent first
    async fn watched(&self) -> RepositoryResult<Vec<ContentItem>>;

    /// Content across the user's lists
    async fn watchlist(&self) -> RepositoryResult<Vec<ContentItem>>;

    /// Recommended content the user has not watched
    async fn recommendations(&self) -> RepositoryResult<Vec<ContentItem>>;

    /// Record that the user watched an item (idempotent)
    async fn mark_watched(&self, content_id: ContentId) -> RepositoryResult<()>;

    /// Previously-watched items to compare a newly-watched item against;
    /// may be empty
    async fn comparison_candidates(
        &self,
        content_id: ContentId,
    ) -> RepositoryResult<Vec<ContentItem>>;

    /// Record one pairwise comparison outcome (fire-once, never rolled back)
    async fn submit_comparison(&self, outcome: &ComparisonOutcome) -> RepositoryResult<()>;

    /// The user's lists
    async fn user_lists(&self) -> RepositoryResult<Vec<ListSummary>>;

    /// Add content to an existing list
    async fn add_content_to_list(
        &self,
        content_id: ContentId,
        list_id: ListId,
    ) -> RepositoryResult<()>;

    /// Create a list and add content to it as a single logical operation;
    /// the repository owns the atomicity of the pair
    async fn create_list_and_add(
        &self,
        name: &str,
        content_id: ContentId,
    ) -> RepositoryResult<ListSummary>;
}
