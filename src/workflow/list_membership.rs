//! List membership workflow
//!
//! Attaches one content item to a list, creating the list first when the
//! target does not exist yet. The target is an existing list id XOR a new
//! list name; the new-list path goes through the repository's single
//! create-and-add operation so the pair is atomic on the repository side.

use crate::catalog::types::{ContentId, ListId, ListSummary};
use crate::repository::{ContentRepository, RepositoryResult};
use std::sync::Arc;

/// Result of an add-to-list attempt
#[derive(Debug, Clone, PartialEq)]
pub enum ListSubmission {
    /// Added to the given existing list
    Added { list_id: ListId },
    /// A new list was created with the item in it
    Created { list: ListSummary },
    /// Precondition violation (neither or both targets set): nothing was
    /// submitted and no error is surfaced
    NotSubmitted,
}

/// Workflow for adding content to a list
pub struct ListMembershipWorkflow<R> {
    repository: Arc<R>,
}

impl<R: ContentRepository> ListMembershipWorkflow<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// The user's lists, for populating the target selector
    pub async fn available_lists(&self) -> RepositoryResult<Vec<ListSummary>> {
        self.repository.user_lists().await
    }

    /// Attach `content_id` to the chosen target.
    ///
    /// Exactly one of `existing` / `new_name` must be set (a blank name
    /// counts as unset). Anything else is a caller bug, answered with
    /// [`ListSubmission::NotSubmitted`] and no repository call.
    pub async fn add_to_list(
        &self,
        content_id: ContentId,
        existing: Option<ListId>,
        new_name: Option<&str>,
    ) -> RepositoryResult<ListSubmission> {
        let new_name = new_name.map(str::trim).filter(|n| !n.is_empty());

        match (existing, new_name) {
            (Some(list_id), None) => {
                self.repository
                    .add_content_to_list(content_id, list_id)
                    .await?;
                Ok(ListSubmission::Added { list_id })
            }
            (None, Some(name)) => {
                let list = self
                    .repository
                    .create_list_and_add(name, content_id)
                    .await?;
                Ok(ListSubmission::Created { list })
            }
            _ => {
                tracing::debug!(
                    content_id,
                    "Add-to-list called without exactly one target; ignoring"
                );
                Ok(ListSubmission::NotSubmitted)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::testing::ScriptedRepository;
    use std::sync::atomic::Ordering;

    fn workflow() -> (Arc<ScriptedRepository>, ListMembershipWorkflow<ScriptedRepository>) {
        let repo = Arc::new(ScriptedRepository::default());
        let workflow = ListMembershipWorkflow::new(Arc::clone(&repo));
        (repo, workflow)
    }

    #[tokio::test]
    async fn test_add_to_existing_list() {
        let (repo, workflow) = workflow();

        let result = workflow.add_to_list(42, Some(7), None).await.unwrap();

        assert_eq!(result, ListSubmission::Added { list_id: 7 });
        assert_eq!(*repo.list_adds.lock().unwrap(), vec![(42, 7)]);
        assert!(repo.list_creates.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_and_add_is_one_call() {
        let (repo, workflow) = workflow();

        let result = workflow
            .add_to_list(42, None, Some("Sci-Fi Favorites"))
            .await
            .unwrap();

        assert!(matches!(result, ListSubmission::Created { .. }));
        assert_eq!(
            *repo.list_creates.lock().unwrap(),
            vec![("Sci-Fi Favorites".to_string(), 42)]
        );
        assert!(repo.list_adds.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_both_targets_set_is_noop() {
        let (repo, workflow) = workflow();

        let result = workflow
            .add_to_list(42, Some(7), Some("New List"))
            .await
            .unwrap();

        assert_eq!(result, ListSubmission::NotSubmitted);
        assert!(repo.list_adds.lock().unwrap().is_empty());
        assert!(repo.list_creates.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_neither_target_set_is_noop() {
        let (repo, workflow) = workflow();

        let result = workflow.add_to_list(42, None, None).await.unwrap();
        assert_eq!(result, ListSubmission::NotSubmitted);

        // A blank name counts as unset
        let result = workflow.add_to_list(42, None, Some("   ")).await.unwrap();
        assert_eq!(result, ListSubmission::NotSubmitted);

        assert!(repo.list_adds.lock().unwrap().is_empty());
        assert!(repo.list_creates.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failure_is_surfaced_for_retry() {
        let (repo, workflow) = workflow();
        repo.fail_list_calls.store(true, Ordering::SeqCst);

        assert!(workflow.add_to_list(42, Some(7), None).await.is_err());

        // Same input can be retried after the failure clears
        repo.fail_list_calls.store(false, Ordering::SeqCst);
        let result = workflow.add_to_list(42, Some(7), None).await.unwrap();
        assert_eq!(result, ListSubmission::Added { list_id: 7 });
    }
}
