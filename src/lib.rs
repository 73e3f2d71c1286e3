//! # WatchTracker
//!
//! A full-stack Rust application for tracking, ranking, and discovering
//! movies and TV shows across streaming platforms.
//!
//! ## Features
//!
//! - **Watched tracking**: mark content watched and rank it through
//!   pairwise comparisons
//! - **Discover filtering**: conjunctive predicate filtering over the
//!   catalog (search, type, platforms, genres, rating, year, runtime)
//! - **Lists**: named watchlists with atomic create-and-add
//! - **Social**: follow other users and browse their profiles
//! - **REST API**: Axum server over an in-memory catalog store
//!
//! ## Modules
//!
//! - [`catalog`]: Domain types and the in-memory store
//! - [`discover`]: Filter criteria and the filter engine
//! - [`workflow`]: Comparison, watched-state, and list-membership workflows
//! - [`repository`]: The content repository trait and its implementations
//! - [`api`]: REST API server with Axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use watchtracker::catalog::{seed, CatalogStore};
//! use watchtracker::repository::MemoryRepository;
//! use watchtracker::workflow::{Choice, WatchedStateController};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Seed the in-memory catalog with demo content and a demo account
//!     let store = Arc::new(CatalogStore::new());
//!     let (account, _session) = seed::seed_demo(&store).await;
//!
//!     let repository = Arc::new(MemoryRepository::new(Arc::clone(&store), account.id));
//!
//!     // Mark an item watched; with prior watches this opens a comparison
//!     // workflow of up to three rounds
//!     let mut controller = WatchedStateController::new(Arc::clone(&repository), 1, false);
//!     controller.toggle_watched().await?;
//!
//!     while controller.has_open_workflow() {
//!         controller.resolve_round(Choice::PreferNew).await?;
//!     }
//!
//!     assert!(controller.is_watched());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod catalog;
pub mod config;
pub mod discover;
pub mod ranking;
pub mod repository;
pub mod workflow;

// Re-export top-level types for convenience
pub use catalog::{
    CatalogError, CatalogResult, CatalogStore, ComparisonOutcome, ContentId, ContentItem,
    ContentType, ListId, ListSummary, Preferred, Session, UserAccount, UserId, UserSummary,
    WatchedEntry,
};

pub use discover::{FilterCriteria, PlatformFilter, TypeFilter};

pub use repository::{
    ContentRepository, HttpRepository, HttpRepositoryConfig, MemoryRepository, RepositoryError,
    RepositoryResult,
};

pub use workflow::{
    Choice, ComparisonWorkflow, ListMembershipWorkflow, ListSubmission, RoundOutcome,
    ToggleOutcome, WatchedStateController, WorkflowError, WorkflowResult, WorkflowState,
    MAX_ROUNDS,
};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{
    ApiConfig as ConfigApiConfig, Config, ConfigError, LoggingConfig, RepositoryConfig,
};
