//! Watched-state controller
//!
//! Owns the boolean "is this item currently marked watched" for one
//! displayed content item and gates entry into the comparison workflow.
//! The repository is authoritative; this flag is a cached projection that
//! only changes through the paths below.

use crate::catalog::types::ContentId;
use crate::repository::ContentRepository;
use crate::workflow::comparison::{Choice, ComparisonWorkflow, RoundOutcome};
use crate::workflow::{WorkflowError, WorkflowResult};
use std::sync::Arc;

/// What a toggle led to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Item flipped to unwatched; no workflow, no repository call
    Unwatched,
    /// Item was recorded watched and a comparison workflow is now open
    WorkflowOpened,
    /// Item was recorded watched and the workflow completed immediately
    /// (no candidates to compare against)
    WorkflowCompleted,
    /// A workflow is already open for this item; the toggle was ignored
    AlreadyPending,
}

/// Per-item watched toggle that drives the comparison workflow
pub struct WatchedStateController<R> {
    repository: Arc<R>,
    content_id: ContentId,
    watched: bool,
    workflow: Option<ComparisonWorkflow<R>>,
}

impl<R: ContentRepository> WatchedStateController<R> {
    /// Create a controller for one displayed item
    pub fn new(repository: Arc<R>, content_id: ContentId, watched: bool) -> Self {
        Self {
            repository,
            content_id,
            watched,
            workflow: None,
        }
    }

    /// The item this controller owns
    pub fn content_id(&self) -> ContentId {
        self.content_id
    }

    /// Current cached watched flag
    pub fn is_watched(&self) -> bool {
        self.watched
    }

    /// Whether a comparison workflow is open for this item
    pub fn has_open_workflow(&self) -> bool {
        self.workflow.is_some()
    }

    /// The open workflow, for callers that drive rounds directly
    pub fn workflow_mut(&mut self) -> Option<&mut ComparisonWorkflow<R>> {
        self.workflow.as_mut()
    }

    /// Toggle the watched state.
    ///
    /// Unwatched -> watched records the watch with the repository first and
    /// only then opens the comparison workflow; if the recording fails, no
    /// workflow opens and the error is surfaced. The watched flag is NOT
    /// flipped optimistically: only workflow completion sets it.
    ///
    /// Watched -> unwatched flips immediately with no workflow.
    ///
    /// At most one workflow is open per item; re-invocation while one is
    /// open is a no-op.
    pub async fn toggle_watched(&mut self) -> WorkflowResult<ToggleOutcome> {
        if self.watched {
            self.watched = false;
            return Ok(ToggleOutcome::Unwatched);
        }

        if self.workflow.is_some() {
            return Ok(ToggleOutcome::AlreadyPending);
        }

        if let Err(err) = self.repository.mark_watched(self.content_id).await {
            tracing::warn!(
                content_id = self.content_id,
                error = %err,
                "Failed to record watch; comparison workflow not opened"
            );
            return Err(err.into());
        }

        let workflow =
            ComparisonWorkflow::open(Arc::clone(&self.repository), self.content_id).await;

        if workflow.is_complete() {
            // Nothing to compare against: completion still runs so the
            // watched flag gets set.
            self.on_workflow_complete();
            return Ok(ToggleOutcome::WorkflowCompleted);
        }

        self.workflow = Some(workflow);
        Ok(ToggleOutcome::WorkflowOpened)
    }

    /// Resolve the open workflow's active round, running completion when
    /// the final round lands
    pub async fn resolve_round(&mut self, choice: Choice) -> WorkflowResult<RoundOutcome> {
        let workflow = self.workflow.as_mut().ok_or(WorkflowError::NoActiveRound)?;
        let outcome = workflow.choose(choice).await?;
        if outcome == RoundOutcome::Completed {
            self.on_workflow_complete();
        }
        Ok(outcome)
    }

    /// Successful workflow completion: set the flag, close the workflow.
    /// This is the only path that sets the watched flag.
    pub fn on_workflow_complete(&mut self) {
        self.watched = true;
        self.workflow = None;
    }

    /// Dismiss the open workflow without completing it. Outcomes already
    /// submitted stay submitted; the watched flag stays unset.
    pub fn cancel_workflow(&mut self) {
        self.workflow = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::testing::{item, ScriptedRepository};
    use std::sync::atomic::Ordering;

    fn controller_with_candidates(
        n: usize,
    ) -> (Arc<ScriptedRepository>, WatchedStateController<ScriptedRepository>) {
        let candidates = (0..n)
            .map(|i| item(100 + i as u64, &format!("Candidate {}", i)))
            .collect();
        let repo = Arc::new(ScriptedRepository::with_candidates(candidates));
        let controller = WatchedStateController::new(Arc::clone(&repo), 42, false);
        (repo, controller)
    }

    #[tokio::test]
    async fn test_toggle_off_makes_no_repository_calls() {
        let (repo, mut controller) = controller_with_candidates(3);
        controller.watched = true;

        let outcome = controller.toggle_watched().await.unwrap();

        assert_eq!(outcome, ToggleOutcome::Unwatched);
        assert!(!controller.is_watched());
        assert!(repo.marked_watched.lock().unwrap().is_empty());
        assert!(repo.submissions.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_toggle_on_marks_watched_then_opens_workflow() {
        let (repo, mut controller) = controller_with_candidates(3);

        let outcome = controller.toggle_watched().await.unwrap();

        assert_eq!(outcome, ToggleOutcome::WorkflowOpened);
        assert_eq!(*repo.marked_watched.lock().unwrap(), vec![42]);
        assert!(controller.has_open_workflow());
        // Not flipped optimistically
        assert!(!controller.is_watched());
    }

    #[tokio::test]
    async fn test_mark_watched_failure_aborts_workflow_entry() {
        let (repo, mut controller) = controller_with_candidates(3);
        repo.fail_mark_watched.store(true, Ordering::SeqCst);

        assert!(controller.toggle_watched().await.is_err());
        assert!(!controller.has_open_workflow());
        assert!(!controller.is_watched());
    }

    #[tokio::test]
    async fn test_toggle_while_workflow_open_is_noop() {
        let (repo, mut controller) = controller_with_candidates(3);

        controller.toggle_watched().await.unwrap();
        let outcome = controller.toggle_watched().await.unwrap();

        assert_eq!(outcome, ToggleOutcome::AlreadyPending);
        // mark_watched was not re-issued
        assert_eq!(repo.marked_watched.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_zero_candidates_completes_immediately() {
        let (repo, mut controller) = controller_with_candidates(0);

        let outcome = controller.toggle_watched().await.unwrap();

        assert_eq!(outcome, ToggleOutcome::WorkflowCompleted);
        assert!(controller.is_watched());
        assert!(!controller.has_open_workflow());
        assert!(repo.submissions.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_completion_sets_flag_after_final_round() {
        let (repo, mut controller) = controller_with_candidates(2);
        controller.toggle_watched().await.unwrap();

        assert_eq!(
            controller.resolve_round(Choice::PreferNew).await.unwrap(),
            RoundOutcome::Advanced { round: 1 }
        );
        assert!(!controller.is_watched());

        assert_eq!(
            controller.resolve_round(Choice::PreferNew).await.unwrap(),
            RoundOutcome::Completed
        );
        assert!(controller.is_watched());
        assert!(!controller.has_open_workflow());
        assert_eq!(repo.submissions.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_cancellation_leaves_flag_unset() {
        let (repo, mut controller) = controller_with_candidates(3);
        controller.toggle_watched().await.unwrap();
        controller.resolve_round(Choice::PreferNew).await.unwrap();

        controller.cancel_workflow();

        assert!(!controller.is_watched());
        assert!(!controller.has_open_workflow());
        // The submitted round is not rolled back
        assert_eq!(repo.submissions.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_selecting_new_every_round_submits_expected_outcomes() {
        let candidates: Vec<_> = (0..5)
            .map(|i| item(200 + i as u64, &format!("Candidate {}", i)))
            .collect();
        let repo = Arc::new(ScriptedRepository::with_candidates(candidates));
        let mut controller = WatchedStateController::new(Arc::clone(&repo), 42, false);

        controller.toggle_watched().await.unwrap();
        while controller.has_open_workflow() {
            controller.resolve_round(Choice::PreferNew).await.unwrap();
        }

        let submissions = repo.submissions.lock().unwrap();
        assert_eq!(submissions.len(), 3);
        for (i, submission) in submissions.iter().enumerate() {
            assert_eq!(submission.new_content_id, 42);
            assert_eq!(submission.existing_content_id, 200 + i as u64);
            assert_eq!(submission.preferred, crate::catalog::types::Preferred::New);
        }
    }
}
