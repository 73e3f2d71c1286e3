//! Catalog error types

use crate::catalog::types::{ContentId, ListId, UserId};
use thiserror::Error;

/// Errors from the catalog store
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Referenced content id does not exist
    #[error("Content {0} not found")]
    ContentNotFound(ContentId),

    /// Referenced list id does not exist or belongs to another user
    #[error("List {0} not found")]
    ListNotFound(ListId),

    /// Referenced user id does not exist
    #[error("User {0} not found")]
    UserNotFound(UserId),

    /// Username or email already registered
    #[error("Account with this username or email already exists")]
    DuplicateAccount,

    /// Login failed
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Bearer token is unknown or expired
    #[error("Invalid session token")]
    InvalidToken,

    /// A user cannot follow themselves
    #[error("Cannot follow yourself")]
    SelfFollow,
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
