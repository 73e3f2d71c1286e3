//! In-memory repository
//!
//! Thin client over the [`CatalogStore`], acting as one user. An optional
//! artificial delay mimics network latency for demos and UI development.

use crate::catalog::store::CatalogStore;
use crate::catalog::types::{ComparisonOutcome, ContentId, ContentItem, ListId, ListSummary, UserId};
use crate::discover::FilterCriteria;
use crate::repository::{ContentRepository, RepositoryResult};
use crate::workflow::comparison::MAX_ROUNDS;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

const TRENDING_LIMIT: usize = 20;
const RECOMMENDATION_LIMIT: usize = 10;

/// Repository backed by the in-memory catalog store
pub struct MemoryRepository {
    store: Arc<CatalogStore>,
    user_id: UserId,
    delay: Option<Duration>,
}

impl MemoryRepository {
    /// Create a repository acting as the given user
    pub fn new(store: Arc<CatalogStore>, user_id: UserId) -> Self {
        Self {
            store,
            user_id,
            delay: None,
        }
    }

    /// Builder: add an artificial delay before every call
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// The user this repository acts as
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    async fn pause(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl ContentRepository for MemoryRepository {
    async fn content_by_id(&self, id: ContentId) -> RepositoryResult<ContentItem> {
        self.pause().await;
        Ok(self.store.content(self.user_id, id).await?)
    }

    async fn trending(&self) -> RepositoryResult<Vec<ContentItem>> {
        self.pause().await;
        Ok(self.store.trending(self.user_id, TRENDING_LIMIT).await)
    }

    async fn discover(&self, criteria: &FilterCriteria) -> RepositoryResult<Vec<ContentItem>> {
        self.pause().await;
        Ok(self.store.discover(self.user_id, criteria).await)
    }

    async fn watched(&self) -> RepositoryResult<Vec<ContentItem>> {
        self.pause().await;
        Ok(self.store.watched_content(self.user_id).await)
    }

    async fn watchlist(&self) -> RepositoryResult<Vec<ContentItem>> {
        self.pause().await;
        Ok(self.store.watchlist_content(self.user_id).await)
    }

    async fn recommendations(&self) -> RepositoryResult<Vec<ContentItem>> {
        self.pause().await;
        Ok(self
            .store
            .recommendations(self.user_id, RECOMMENDATION_LIMIT)
            .await)
    }

    async fn mark_watched(&self, content_id: ContentId) -> RepositoryResult<()> {
        self.pause().await;
        Ok(self.store.mark_watched(self.user_id, content_id).await?)
    }

    async fn comparison_candidates(
        &self,
        content_id: ContentId,
    ) -> RepositoryResult<Vec<ContentItem>> {
        self.pause().await;
        Ok(self
            .store
            .comparison_candidates(self.user_id, content_id, MAX_ROUNDS)
            .await)
    }

    async fn submit_comparison(&self, outcome: &ComparisonOutcome) -> RepositoryResult<()> {
        self.pause().await;
        Ok(self
            .store
            .record_comparison(self.user_id, outcome.clone())
            .await?)
    }

    async fn user_lists(&self) -> RepositoryResult<Vec<ListSummary>> {
        self.pause().await;
        Ok(self.store.user_lists(self.user_id).await)
    }

    async fn add_content_to_list(
        &self,
        content_id: ContentId,
        list_id: ListId,
    ) -> RepositoryResult<()> {
        self.pause().await;
        Ok(self
            .store
            .add_to_list(self.user_id, content_id, list_id)
            .await?)
    }

    async fn create_list_and_add(
        &self,
        name: &str,
        content_id: ContentId,
    ) -> RepositoryResult<ListSummary> {
        self.pause().await;
        Ok(self
            .store
            .create_list_and_add(self.user_id, name, content_id)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed;
    use crate::repository::RepositoryError;

    async fn demo_repository() -> MemoryRepository {
        let store = Arc::new(CatalogStore::new());
        let (account, _) = seed::seed_demo(&store).await;
        MemoryRepository::new(store, account.id)
    }

    #[tokio::test]
    async fn test_content_by_id_maps_not_found() {
        let repo = demo_repository().await;
        let err = repo.content_by_id(9999).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_candidates_are_bounded() {
        let repo = demo_repository().await;
        let trending = repo.trending().await.unwrap();
        for item in &trending {
            repo.mark_watched(item.id).await.unwrap();
        }

        let candidates = repo.comparison_candidates(trending[0].id).await.unwrap();
        assert!(candidates.len() <= MAX_ROUNDS);
        assert!(candidates.iter().all(|c| c.id != trending[0].id));
    }

    #[tokio::test]
    async fn test_artificial_delay_is_applied() {
        let store = Arc::new(CatalogStore::new());
        let (account, _) = seed::seed_demo(&store).await;
        let repo =
            MemoryRepository::new(store, account.id).with_delay(Duration::from_millis(20));

        let started = std::time::Instant::now();
        repo.trending().await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(20));
    }
}
