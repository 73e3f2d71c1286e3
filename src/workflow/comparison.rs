//! Pairwise comparison workflow
//!
//! Runs up to `min(3, candidates)` sequential comparisons between a
//! newly-watched item and a repository-supplied sample of previously-watched
//! items, recording each outcome, then signals completion.
//!
//! State machine: `Loading -> Active(round) -> Complete`. A round never
//! advances while its submission is outstanding, so outcomes for the same
//! content pair are never written out of order. Dropping the workflow is
//! cancellation: outcomes already submitted are fire-once writes and are not
//! rolled back.

use crate::catalog::types::{ComparisonOutcome, ContentId, ContentItem, Preferred};
use crate::repository::ContentRepository;
use crate::workflow::{WorkflowError, WorkflowResult};
use std::sync::Arc;

/// Upper bound on comparison rounds per workflow
pub const MAX_ROUNDS: usize = 3;

/// Observable workflow state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    /// Candidate fetch in flight
    Loading,
    /// Awaiting the user's choice for the given zero-based round
    Active { round: usize },
    /// All rounds resolved (terminal)
    Complete,
}

/// The user's action for one round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// The newly-watched item was preferred
    PreferNew,
    /// The shown candidate was preferred
    PreferExisting,
    /// No decision; counts as a vote for the existing item
    Skip,
}

impl Choice {
    /// The preference this choice submits. Skip is not a neutral
    /// abstention: it votes for the existing item, matching how downstream
    /// ranking interprets an undecided round.
    pub fn preferred(self) -> Preferred {
        match self {
            Choice::PreferNew => Preferred::New,
            Choice::PreferExisting | Choice::Skip => Preferred::Existing,
        }
    }
}

/// What a resolved round led to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The workflow advanced to the given round
    Advanced { round: usize },
    /// The final round resolved; the caller runs its completion exactly once
    Completed,
}

/// Sequential pairwise comparison workflow for one newly-watched item
pub struct ComparisonWorkflow<R> {
    repository: Arc<R>,
    new_content_id: ContentId,
    candidates: Vec<ContentItem>,
    completed_rounds: usize,
    state: WorkflowState,
}

impl<R: ContentRepository> ComparisonWorkflow<R> {
    /// Create a workflow in the `Loading` state; call [`load`](Self::load)
    /// to fetch candidates
    pub fn new(repository: Arc<R>, new_content_id: ContentId) -> Self {
        Self {
            repository,
            new_content_id,
            candidates: Vec::new(),
            completed_rounds: 0,
            state: WorkflowState::Loading,
        }
    }

    /// Create and load in one step
    pub async fn open(repository: Arc<R>, new_content_id: ContentId) -> Self {
        let mut workflow = Self::new(repository, new_content_id);
        workflow.load().await;
        workflow
    }

    /// Fetch the candidate sample and leave `Loading`.
    ///
    /// A failed fetch is logged and treated as an empty sample; with zero
    /// candidates there is nothing to compare and the workflow completes
    /// immediately (the caller still runs its completion handling).
    pub async fn load(&mut self) {
        if self.state != WorkflowState::Loading {
            return;
        }

        match self
            .repository
            .comparison_candidates(self.new_content_id)
            .await
        {
            Ok(candidates) => self.candidates = candidates,
            Err(err) => {
                tracing::warn!(
                    content_id = self.new_content_id,
                    error = %err,
                    "Failed to fetch comparison candidates"
                );
                self.candidates.clear();
            }
        }

        self.state = if self.total_rounds() == 0 {
            WorkflowState::Complete
        } else {
            WorkflowState::Active { round: 0 }
        };
    }

    /// The item being ranked
    pub fn new_content_id(&self) -> ContentId {
        self.new_content_id
    }

    /// Current state
    pub fn state(&self) -> WorkflowState {
        self.state
    }

    /// Number of rounds this workflow will run
    pub fn total_rounds(&self) -> usize {
        self.candidates.len().min(MAX_ROUNDS)
    }

    /// Zero-based index of the active round, if any
    pub fn current_round(&self) -> Option<usize> {
        match self.state {
            WorkflowState::Active { round } => Some(round),
            _ => None,
        }
    }

    /// The candidate shown for the active round, if any
    pub fn current_candidate(&self) -> Option<&ContentItem> {
        self.current_round().and_then(|r| self.candidates.get(r))
    }

    /// Rounds resolved so far
    pub fn completed_rounds(&self) -> usize {
        self.completed_rounds
    }

    /// Progress as a percentage of completed rounds (not in-flight ones)
    pub fn progress_percent(&self) -> f32 {
        let total = self.total_rounds();
        if total == 0 {
            return if self.is_complete() { 100.0 } else { 0.0 };
        }
        self.completed_rounds as f32 / total as f32 * 100.0
    }

    /// Whether the workflow reached its terminal state
    pub fn is_complete(&self) -> bool {
        self.state == WorkflowState::Complete
    }

    /// Resolve the active round with the user's choice.
    ///
    /// The outcome is submitted and awaited before the round advances. A
    /// failed submission leaves the workflow in the same `Active` round so
    /// progression never outruns what the repository recorded; the caller
    /// may retry the round.
    pub async fn choose(&mut self, choice: Choice) -> WorkflowResult<RoundOutcome> {
        let round = self.current_round().ok_or(WorkflowError::NoActiveRound)?;
        let candidate = self
            .candidates
            .get(round)
            .ok_or(WorkflowError::NoActiveRound)?;

        let outcome = ComparisonOutcome {
            new_content_id: self.new_content_id,
            existing_content_id: candidate.id,
            preferred: choice.preferred(),
        };

        if let Err(err) = self.repository.submit_comparison(&outcome).await {
            tracing::warn!(
                content_id = self.new_content_id,
                round,
                error = %err,
                "Comparison submission failed; round not advanced"
            );
            return Err(err.into());
        }

        self.completed_rounds += 1;
        if round + 1 >= self.total_rounds() {
            self.state = WorkflowState::Complete;
            Ok(RoundOutcome::Completed)
        } else {
            self.state = WorkflowState::Active { round: round + 1 };
            Ok(RoundOutcome::Advanced { round: round + 1 })
        }
    }

    /// Reset round bookkeeping for display reuse after completion.
    /// Cosmetic only; a completed workflow stays complete.
    pub fn reset_progress(&mut self) {
        self.completed_rounds = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::testing::{item, ScriptedRepository};
    use std::sync::atomic::Ordering;

    fn candidates(n: usize) -> Vec<ContentItem> {
        (0..n)
            .map(|i| item(100 + i as u64, &format!("Candidate {}", i)))
            .collect()
    }

    #[tokio::test]
    async fn test_zero_candidates_completes_without_submissions() {
        let repo = Arc::new(ScriptedRepository::with_candidates(Vec::new()));
        let workflow = ComparisonWorkflow::open(Arc::clone(&repo), 42).await;

        assert!(workflow.is_complete());
        assert_eq!(workflow.total_rounds(), 0);
        assert!(repo.submissions.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rounds_cap_at_three() {
        let repo = Arc::new(ScriptedRepository::with_candidates(candidates(5)));
        let mut workflow = ComparisonWorkflow::open(Arc::clone(&repo), 42).await;

        assert_eq!(workflow.total_rounds(), 3);

        for expected_round in 0..3 {
            assert_eq!(workflow.current_round(), Some(expected_round));
            workflow.choose(Choice::PreferNew).await.unwrap();
        }

        assert!(workflow.is_complete());

        // Exactly min(3, N) submissions, each against a distinct candidate
        let submissions = repo.submissions.lock().unwrap();
        assert_eq!(submissions.len(), 3);
        let mut existing: Vec<_> = submissions.iter().map(|s| s.existing_content_id).collect();
        existing.dedup();
        assert_eq!(existing, vec![100, 101, 102]);
        assert!(submissions
            .iter()
            .all(|s| s.new_content_id == 42 && s.preferred == Preferred::New));
    }

    #[tokio::test]
    async fn test_fewer_candidates_than_cap() {
        let repo = Arc::new(ScriptedRepository::with_candidates(candidates(2)));
        let mut workflow = ComparisonWorkflow::open(Arc::clone(&repo), 42).await;

        assert_eq!(workflow.total_rounds(), 2);
        assert_eq!(
            workflow.choose(Choice::PreferExisting).await.unwrap(),
            RoundOutcome::Advanced { round: 1 }
        );
        assert_eq!(
            workflow.choose(Choice::PreferExisting).await.unwrap(),
            RoundOutcome::Completed
        );
        assert_eq!(repo.submissions.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_skip_votes_for_existing() {
        let repo = Arc::new(ScriptedRepository::with_candidates(candidates(1)));
        let mut workflow = ComparisonWorkflow::open(Arc::clone(&repo), 42).await;

        workflow.choose(Choice::Skip).await.unwrap();

        let submissions = repo.submissions.lock().unwrap();
        assert_eq!(submissions.len(), 1);
        assert_eq!(submissions[0].preferred, Preferred::Existing);
    }

    #[tokio::test]
    async fn test_failed_submission_does_not_advance() {
        let repo = Arc::new(ScriptedRepository::with_candidates(candidates(2)));
        let mut workflow = ComparisonWorkflow::open(Arc::clone(&repo), 42).await;

        repo.fail_submit.store(true, Ordering::SeqCst);
        assert!(workflow.choose(Choice::PreferNew).await.is_err());

        // Last good state: still round 0, nothing recorded
        assert_eq!(workflow.current_round(), Some(0));
        assert_eq!(workflow.completed_rounds(), 0);
        assert!(repo.submissions.lock().unwrap().is_empty());

        // Retry of the same round succeeds and advances
        repo.fail_submit.store(false, Ordering::SeqCst);
        assert_eq!(
            workflow.choose(Choice::PreferNew).await.unwrap(),
            RoundOutcome::Advanced { round: 1 }
        );
    }

    #[tokio::test]
    async fn test_failed_fetch_is_treated_as_empty() {
        let repo = Arc::new(ScriptedRepository::with_candidates(candidates(3)));
        repo.fail_fetch_candidates.store(true, Ordering::SeqCst);

        let workflow = ComparisonWorkflow::open(Arc::clone(&repo), 42).await;
        assert!(workflow.is_complete());
        assert_eq!(workflow.total_rounds(), 0);
    }

    #[tokio::test]
    async fn test_progress_reflects_completed_rounds() {
        let repo = Arc::new(ScriptedRepository::with_candidates(candidates(3)));
        let mut workflow = ComparisonWorkflow::open(Arc::clone(&repo), 42).await;

        assert_eq!(workflow.progress_percent(), 0.0);
        workflow.choose(Choice::PreferNew).await.unwrap();
        assert!((workflow.progress_percent() - 100.0 / 3.0).abs() < 0.01);
        workflow.choose(Choice::PreferNew).await.unwrap();
        workflow.choose(Choice::PreferNew).await.unwrap();
        assert_eq!(workflow.progress_percent(), 100.0);
    }

    #[tokio::test]
    async fn test_choose_after_complete_is_rejected() {
        let repo = Arc::new(ScriptedRepository::with_candidates(candidates(1)));
        let mut workflow = ComparisonWorkflow::open(Arc::clone(&repo), 42).await;

        workflow.choose(Choice::PreferNew).await.unwrap();
        assert!(matches!(
            workflow.choose(Choice::PreferNew).await,
            Err(WorkflowError::NoActiveRound)
        ));
        assert_eq!(repo.submissions.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_new_workflow_starts_loading() {
        let repo = Arc::new(ScriptedRepository::with_candidates(candidates(1)));
        let workflow = ComparisonWorkflow::new(Arc::clone(&repo), 42);
        assert_eq!(workflow.state(), WorkflowState::Loading);
    }
}
