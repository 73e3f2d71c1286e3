//! WatchTracker catalog
//!
//! Domain types and the in-memory store that owns content, users, watched
//! history, lists, comparisons, and follows.

pub mod error;
pub mod seed;
pub mod store;
pub mod types;

pub use error::{CatalogError, CatalogResult};
pub use store::{CatalogStore, ComparisonRecord};
pub use types::{
    ComparisonOutcome, ContentId, ContentItem, ContentType, ListId, ListSummary, Preferred,
    Session, UserAccount, UserId, UserList, UserSummary, WatchedEntry,
};
