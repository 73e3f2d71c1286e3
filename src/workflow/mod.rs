//! Client-side workflows
//!
//! Bounded, stateful, cancellable processes that drive the repository on
//! behalf of one displayed content item:
//!
//! - [`ComparisonWorkflow`]: up to three sequential pairwise comparisons
//!   between a newly-watched item and previously-watched candidates
//! - [`WatchedStateController`]: owns one card's watched flag and gates
//!   entry into the comparison workflow
//! - [`ListMembershipWorkflow`]: attaches content to an existing or newly
//!   created list
//!
//! Workflow failures never panic and never tear the state machine down:
//! they are logged and the machine stays in its last good state.

pub mod comparison;
pub mod list_membership;
pub mod watched;

pub use comparison::{Choice, ComparisonWorkflow, RoundOutcome, WorkflowState, MAX_ROUNDS};
pub use list_membership::{ListMembershipWorkflow, ListSubmission};
pub use watched::{ToggleOutcome, WatchedStateController};

use crate::repository::RepositoryError;
use thiserror::Error;

/// Errors from workflow operations
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// A round action arrived while no round was active
    #[error("No comparison round is active")]
    NoActiveRound,

    /// The underlying repository call failed; the workflow stays in its
    /// last good state
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Result type for workflow operations
pub type WorkflowResult<T> = Result<T, WorkflowError>;

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted repository for workflow tests: records every call and can
    //! be told to fail specific operations.

    use crate::catalog::types::{
        ComparisonOutcome, ContentId, ContentItem, ContentType, ListId, ListSummary,
    };
    use crate::discover::FilterCriteria;
    use crate::repository::{ContentRepository, RepositoryError, RepositoryResult};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    pub fn item(id: ContentId, title: &str) -> ContentItem {
        let mut item = ContentItem::new(title, 4.0, 2023, ContentType::Movie);
        item.id = id;
        item
    }

    #[derive(Default)]
    pub struct ScriptedRepository {
        pub candidates: Mutex<Vec<ContentItem>>,
        pub lists: Mutex<Vec<ListSummary>>,
        pub marked_watched: Mutex<Vec<ContentId>>,
        pub submissions: Mutex<Vec<ComparisonOutcome>>,
        pub list_adds: Mutex<Vec<(ContentId, ListId)>>,
        pub list_creates: Mutex<Vec<(String, ContentId)>>,
        pub fail_fetch_candidates: AtomicBool,
        pub fail_mark_watched: AtomicBool,
        pub fail_submit: AtomicBool,
        pub fail_list_calls: AtomicBool,
    }

    impl ScriptedRepository {
        pub fn with_candidates(candidates: Vec<ContentItem>) -> Self {
            Self {
                candidates: Mutex::new(candidates),
                ..Default::default()
            }
        }

        fn transient() -> RepositoryError {
            RepositoryError::Transport("connection reset".to_string())
        }
    }

    #[async_trait]
    impl ContentRepository for ScriptedRepository {
        async fn content_by_id(&self, id: ContentId) -> RepositoryResult<ContentItem> {
            Ok(item(id, "scripted"))
        }

        async fn trending(&self) -> RepositoryResult<Vec<ContentItem>> {
            Ok(Vec::new())
        }

        async fn discover(&self, _criteria: &FilterCriteria) -> RepositoryResult<Vec<ContentItem>> {
            Ok(Vec::new())
        }

        async fn watched(&self) -> RepositoryResult<Vec<ContentItem>> {
            Ok(Vec::new())
        }

        async fn watchlist(&self) -> RepositoryResult<Vec<ContentItem>> {
            Ok(Vec::new())
        }

        async fn recommendations(&self) -> RepositoryResult<Vec<ContentItem>> {
            Ok(Vec::new())
        }

        async fn mark_watched(&self, content_id: ContentId) -> RepositoryResult<()> {
            if self.fail_mark_watched.load(Ordering::SeqCst) {
                return Err(Self::transient());
            }
            self.marked_watched.lock().unwrap().push(content_id);
            Ok(())
        }

        async fn comparison_candidates(
            &self,
            _content_id: ContentId,
        ) -> RepositoryResult<Vec<ContentItem>> {
            if self.fail_fetch_candidates.load(Ordering::SeqCst) {
                return Err(Self::transient());
            }
            Ok(self.candidates.lock().unwrap().clone())
        }

        async fn submit_comparison(&self, outcome: &ComparisonOutcome) -> RepositoryResult<()> {
            if self.fail_submit.load(Ordering::SeqCst) {
                return Err(Self::transient());
            }
            self.submissions.lock().unwrap().push(outcome.clone());
            Ok(())
        }

        async fn user_lists(&self) -> RepositoryResult<Vec<ListSummary>> {
            Ok(self.lists.lock().unwrap().clone())
        }

        async fn add_content_to_list(
            &self,
            content_id: ContentId,
            list_id: ListId,
        ) -> RepositoryResult<()> {
            if self.fail_list_calls.load(Ordering::SeqCst) {
                return Err(Self::transient());
            }
            self.list_adds.lock().unwrap().push((content_id, list_id));
            Ok(())
        }

        async fn create_list_and_add(
            &self,
            name: &str,
            content_id: ContentId,
        ) -> RepositoryResult<ListSummary> {
            if self.fail_list_calls.load(Ordering::SeqCst) {
                return Err(Self::transient());
            }
            self.list_creates
                .lock()
                .unwrap()
                .push((name.to_string(), content_id));
            Ok(ListSummary {
                id: 1,
                name: name.to_string(),
                content_count: 1,
            })
        }
    }
}
