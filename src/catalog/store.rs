//! In-memory catalog store
//!
//! Authoritative state for content, users, watched history, lists,
//! comparisons, and follows. Thread-safe via Tokio's async RwLock for
//! concurrent access from API handlers; there is no on-disk persistence.
//!
//! The store is the single source of truth for the watched flag: views hold
//! a cached projection that is refreshed on workflow completion, never
//! silently diverging.

use crate::catalog::error::{CatalogError, CatalogResult};
use crate::catalog::types::{
    ComparisonOutcome, ContentId, ContentItem, ListId, ListSummary, Session, UserAccount, UserId,
    UserList, UserSummary, WatchedEntry,
};
use crate::discover::{self, FilterCriteria};
use crate::ranking;
use chrono::Utc;
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;

/// A recorded pairwise comparison
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRecord {
    /// User who submitted the comparison
    pub user_id: UserId,
    /// The resolved outcome
    pub outcome: ComparisonOutcome,
    /// Unix timestamp in milliseconds
    pub created_at: i64,
}

/// In-memory catalog store
pub struct CatalogStore {
    inner: RwLock<CatalogInner>,
}

#[derive(Default)]
struct CatalogInner {
    content: Vec<ContentItem>,
    next_content_id: ContentId,
    users: HashMap<UserId, UserAccount>,
    credentials: HashMap<UserId, String>,
    next_user_id: UserId,
    tokens: HashMap<String, UserId>,
    watched: HashMap<UserId, Vec<WatchedEntry>>,
    lists: HashMap<ListId, UserList>,
    next_list_id: ListId,
    comparisons: Vec<ComparisonRecord>,
    following: HashMap<UserId, HashSet<UserId>>,
}

impl CatalogInner {
    fn content_by_id(&self, id: ContentId) -> Option<&ContentItem> {
        self.content.iter().find(|c| c.id == id)
    }

    fn has_watched(&self, user_id: UserId, content_id: ContentId) -> bool {
        self.watched
            .get(&user_id)
            .map(|entries| entries.iter().any(|e| e.content_id == content_id))
            .unwrap_or(false)
    }

    /// Copy an item with the viewer-relative watched flag set
    fn project(&self, viewer: UserId, item: &ContentItem) -> ContentItem {
        let mut projected = item.clone();
        projected.watched = self.has_watched(viewer, item.id);
        projected
    }

    fn watched_entry_mut(
        &mut self,
        user_id: UserId,
        content_id: ContentId,
    ) -> Option<&mut WatchedEntry> {
        self.watched
            .get_mut(&user_id)
            .and_then(|entries| entries.iter_mut().find(|e| e.content_id == content_id))
    }

    fn followers_of(&self, user_id: UserId) -> usize {
        self.following
            .values()
            .filter(|followed| followed.contains(&user_id))
            .count()
    }

    fn summarize_user(&self, viewer: UserId, account: &UserAccount) -> UserSummary {
        UserSummary {
            id: account.id,
            username: account.username.clone(),
            display_name: account.display_name.clone(),
            avatar: account.avatar.clone(),
            followers_count: self.followers_of(account.id),
            following_count: self
                .following
                .get(&account.id)
                .map(|f| f.len())
                .unwrap_or(0),
            is_following: self
                .following
                .get(&viewer)
                .map(|f| f.contains(&account.id))
                .unwrap_or(false),
        }
    }
}

impl CatalogStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(CatalogInner::default()),
        }
    }

    // ============ Content ============

    /// Add a content item, assigning its id. Returns the assigned id.
    pub async fn add_content(&self, mut item: ContentItem) -> ContentId {
        let mut inner = self.inner.write().await;
        inner.next_content_id += 1;
        item.id = inner.next_content_id;
        let id = item.id;
        inner.content.push(item);
        id
    }

    /// Number of content items in the catalog
    pub async fn content_count(&self) -> usize {
        self.inner.read().await.content.len()
    }

    /// Fetch one content item with the viewer's watched flag
    pub async fn content(&self, viewer: UserId, id: ContentId) -> CatalogResult<ContentItem> {
        let inner = self.inner.read().await;
        inner
            .content_by_id(id)
            .map(|item| inner.project(viewer, item))
            .ok_or(CatalogError::ContentNotFound(id))
    }

    /// Trending content: highest-rated items first
    pub async fn trending(&self, viewer: UserId, limit: usize) -> Vec<ContentItem> {
        let inner = self.inner.read().await;
        let mut items: Vec<ContentItem> = inner
            .content
            .iter()
            .map(|item| inner.project(viewer, item))
            .collect();
        items.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        items.truncate(limit);
        items
    }

    /// Discover: the filter engine applied over the whole catalog,
    /// preserving catalog order
    pub async fn discover(&self, viewer: UserId, criteria: &FilterCriteria) -> Vec<ContentItem> {
        let inner = self.inner.read().await;
        let projected: Vec<ContentItem> = inner
            .content
            .iter()
            .map(|item| inner.project(viewer, item))
            .collect();
        discover::apply(&projected, criteria)
    }

    /// Recommendations: highest-rated items the viewer has not watched
    pub async fn recommendations(&self, viewer: UserId, limit: usize) -> Vec<ContentItem> {
        let inner = self.inner.read().await;
        let mut items: Vec<ContentItem> = inner
            .content
            .iter()
            .filter(|item| !inner.has_watched(viewer, item.id))
            .cloned()
            .collect();
        items.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        items.truncate(limit);
        items
    }

    // ============ Accounts & sessions ============

    /// Register a new account and open a session for it
    pub async fn register(
        &self,
        username: &str,
        display_name: &str,
        email: &str,
        password: &str,
    ) -> CatalogResult<(UserAccount, Session)> {
        let mut inner = self.inner.write().await;

        let taken = inner
            .users
            .values()
            .any(|u| u.username == username || u.email == email);
        if taken {
            return Err(CatalogError::DuplicateAccount);
        }

        inner.next_user_id += 1;
        let account = UserAccount {
            id: inner.next_user_id,
            username: username.to_string(),
            display_name: display_name.to_string(),
            email: email.to_string(),
            avatar: "/placeholder.svg".to_string(),
            bio: String::new(),
            favorite_genres: Vec::new(),
            streaming_platforms: Vec::new(),
            created_at: Utc::now().timestamp_millis(),
        };
        inner.users.insert(account.id, account.clone());
        inner.credentials.insert(account.id, password.to_string());

        let session = Session {
            user_id: account.id,
            token: uuid::Uuid::new_v4().to_string(),
        };
        inner.tokens.insert(session.token.clone(), account.id);

        Ok((account, session))
    }

    /// Open a session for an existing account
    pub async fn login(&self, email: &str, password: &str) -> CatalogResult<(UserAccount, Session)> {
        let mut inner = self.inner.write().await;

        let account = inner
            .users
            .values()
            .find(|u| u.email == email)
            .cloned()
            .ok_or(CatalogError::InvalidCredentials)?;

        let stored = inner
            .credentials
            .get(&account.id)
            .ok_or(CatalogError::InvalidCredentials)?;
        if stored != password {
            return Err(CatalogError::InvalidCredentials);
        }

        let session = Session {
            user_id: account.id,
            token: uuid::Uuid::new_v4().to_string(),
        };
        inner.tokens.insert(session.token.clone(), account.id);

        Ok((account, session))
    }

    /// Invalidate a session token
    pub async fn logout(&self, token: &str) {
        self.inner.write().await.tokens.remove(token);
    }

    /// Resolve a bearer token to its user
    pub async fn authenticate(&self, token: &str) -> Option<UserId> {
        self.inner.read().await.tokens.get(token).copied()
    }

    /// Fetch one account
    pub async fn user(&self, id: UserId) -> CatalogResult<UserAccount> {
        self.inner
            .read()
            .await
            .users
            .get(&id)
            .cloned()
            .ok_or(CatalogError::UserNotFound(id))
    }

    /// Viewer-relative summary of one user
    pub async fn user_summary(&self, viewer: UserId, id: UserId) -> CatalogResult<UserSummary> {
        let inner = self.inner.read().await;
        let account = inner.users.get(&id).ok_or(CatalogError::UserNotFound(id))?;
        Ok(inner.summarize_user(viewer, account))
    }

    /// Search users by username or display name (case-insensitive substring)
    pub async fn search_users(&self, viewer: UserId, query: &str) -> Vec<UserSummary> {
        let needle = query.to_lowercase();
        let inner = self.inner.read().await;
        let mut results: Vec<UserSummary> = inner
            .users
            .values()
            .filter(|u| {
                u.id != viewer
                    && (u.username.to_lowercase().contains(&needle)
                        || u.display_name.to_lowercase().contains(&needle))
            })
            .map(|u| inner.summarize_user(viewer, u))
            .collect();
        results.sort_by(|a, b| a.username.cmp(&b.username));
        results
    }

    // ============ Follows ============

    /// Follow another user
    pub async fn follow(&self, viewer: UserId, target: UserId) -> CatalogResult<()> {
        if viewer == target {
            return Err(CatalogError::SelfFollow);
        }
        let mut inner = self.inner.write().await;
        if !inner.users.contains_key(&target) {
            return Err(CatalogError::UserNotFound(target));
        }
        inner.following.entry(viewer).or_default().insert(target);
        Ok(())
    }

    /// Stop following another user
    pub async fn unfollow(&self, viewer: UserId, target: UserId) -> CatalogResult<()> {
        let mut inner = self.inner.write().await;
        if !inner.users.contains_key(&target) {
            return Err(CatalogError::UserNotFound(target));
        }
        if let Some(followed) = inner.following.get_mut(&viewer) {
            followed.remove(&target);
        }
        Ok(())
    }

    /// Users who follow `of`
    pub async fn followers(&self, viewer: UserId, of: UserId) -> Vec<UserSummary> {
        let inner = self.inner.read().await;
        let mut results: Vec<UserSummary> = inner
            .following
            .iter()
            .filter(|(_, followed)| followed.contains(&of))
            .filter_map(|(follower, _)| inner.users.get(follower))
            .map(|u| inner.summarize_user(viewer, u))
            .collect();
        results.sort_by_key(|u| u.id);
        results
    }

    /// Users whom `of` follows
    pub async fn following(&self, viewer: UserId, of: UserId) -> Vec<UserSummary> {
        let inner = self.inner.read().await;
        let mut results: Vec<UserSummary> = inner
            .following
            .get(&of)
            .into_iter()
            .flatten()
            .filter_map(|id| inner.users.get(id))
            .map(|u| inner.summarize_user(viewer, u))
            .collect();
        results.sort_by_key(|u| u.id);
        results
    }

    // ============ Watched history ============

    /// Mark a content item watched (idempotent, get-or-create)
    pub async fn mark_watched(&self, user_id: UserId, content_id: ContentId) -> CatalogResult<()> {
        let mut inner = self.inner.write().await;
        if inner.content_by_id(content_id).is_none() {
            return Err(CatalogError::ContentNotFound(content_id));
        }
        if !inner.has_watched(user_id, content_id) {
            inner
                .watched
                .entry(user_id)
                .or_default()
                .push(WatchedEntry::new(content_id));
        }
        Ok(())
    }

    /// Watched entries, most recent first
    pub async fn watched_entries(&self, user_id: UserId) -> Vec<WatchedEntry> {
        let mut entries = self
            .inner
            .read()
            .await
            .watched
            .get(&user_id)
            .cloned()
            .unwrap_or_default();
        entries.sort_by(|a, b| b.watched_at.cmp(&a.watched_at));
        entries
    }

    /// Watched content items, most recent first
    pub async fn watched_content(&self, user_id: UserId) -> Vec<ContentItem> {
        let entries = self.watched_entries(user_id).await;
        let inner = self.inner.read().await;
        entries
            .iter()
            .filter_map(|e| inner.content_by_id(e.content_id))
            .map(|item| {
                let mut projected = item.clone();
                projected.watched = true;
                projected
            })
            .collect()
    }

    /// Watched content ordered by comparison-derived ranking score
    pub async fn rankings(&self, user_id: UserId) -> Vec<(WatchedEntry, ContentItem)> {
        let mut entries = self
            .inner
            .read()
            .await
            .watched
            .get(&user_id)
            .cloned()
            .unwrap_or_default();
        ranking::rank(&mut entries);

        let inner = self.inner.read().await;
        entries
            .into_iter()
            .filter_map(|entry| {
                inner
                    .content_by_id(entry.content_id)
                    .map(|item| (entry.clone(), inner.project(user_id, item)))
            })
            .collect()
    }

    // ============ Comparisons ============

    /// Previously-watched items to compare a new item against, most recent
    /// first, excluding the new item itself
    pub async fn comparison_candidates(
        &self,
        user_id: UserId,
        content_id: ContentId,
        limit: usize,
    ) -> Vec<ContentItem> {
        let entries = self.watched_entries(user_id).await;
        let inner = self.inner.read().await;
        entries
            .iter()
            .filter(|e| e.content_id != content_id)
            .take(limit)
            .filter_map(|e| inner.content_by_id(e.content_id))
            .map(|item| {
                let mut projected = item.clone();
                projected.watched = true;
                projected
            })
            .collect()
    }

    /// Record one comparison outcome and adjust both ranking scores
    pub async fn record_comparison(
        &self,
        user_id: UserId,
        outcome: ComparisonOutcome,
    ) -> CatalogResult<()> {
        let mut inner = self.inner.write().await;
        if inner.content_by_id(outcome.new_content_id).is_none() {
            return Err(CatalogError::ContentNotFound(outcome.new_content_id));
        }
        if inner.content_by_id(outcome.existing_content_id).is_none() {
            return Err(CatalogError::ContentNotFound(outcome.existing_content_id));
        }

        // Scores only move for entries that are actually in the watched
        // history; the record is kept either way.
        let (new_delta, existing_delta) = ranking::deltas(outcome.preferred);
        if let Some(entry) = inner.watched_entry_mut(user_id, outcome.new_content_id) {
            entry.ranking_score += new_delta;
        }
        if let Some(entry) = inner.watched_entry_mut(user_id, outcome.existing_content_id) {
            entry.ranking_score += existing_delta;
        }

        inner.comparisons.push(ComparisonRecord {
            user_id,
            outcome,
            created_at: Utc::now().timestamp_millis(),
        });
        Ok(())
    }

    /// All comparisons submitted by a user, oldest first
    pub async fn comparisons(&self, user_id: UserId) -> Vec<ComparisonRecord> {
        self.inner
            .read()
            .await
            .comparisons
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect()
    }

    // ============ Lists ============

    /// Create an empty named list
    pub async fn create_list(&self, user_id: UserId, name: &str) -> CatalogResult<ListSummary> {
        let mut inner = self.inner.write().await;
        inner.next_list_id += 1;
        let mut list = UserList::new(user_id, name);
        list.id = inner.next_list_id;
        let summary = list.summary();
        inner.lists.insert(list.id, list);
        Ok(summary)
    }

    /// The user's lists in creation order
    pub async fn user_lists(&self, user_id: UserId) -> Vec<ListSummary> {
        let inner = self.inner.read().await;
        let mut lists: Vec<&UserList> = inner
            .lists
            .values()
            .filter(|l| l.owner == user_id)
            .collect();
        lists.sort_by_key(|l| l.id);
        lists.iter().map(|l| l.summary()).collect()
    }

    /// Add a content item to an existing list (idempotent on membership)
    pub async fn add_to_list(
        &self,
        user_id: UserId,
        content_id: ContentId,
        list_id: ListId,
    ) -> CatalogResult<()> {
        let mut inner = self.inner.write().await;
        if inner.content_by_id(content_id).is_none() {
            return Err(CatalogError::ContentNotFound(content_id));
        }
        let list = inner
            .lists
            .get_mut(&list_id)
            .filter(|l| l.owner == user_id)
            .ok_or(CatalogError::ListNotFound(list_id))?;
        if !list.items.contains(&content_id) {
            list.items.push(content_id);
        }
        Ok(())
    }

    /// Create a list and add a content item as one atomic operation
    ///
    /// The content id is validated before the list is created, so a failed
    /// call leaves no half-made list behind.
    pub async fn create_list_and_add(
        &self,
        user_id: UserId,
        name: &str,
        content_id: ContentId,
    ) -> CatalogResult<ListSummary> {
        let mut inner = self.inner.write().await;
        if inner.content_by_id(content_id).is_none() {
            return Err(CatalogError::ContentNotFound(content_id));
        }

        inner.next_list_id += 1;
        let mut list = UserList::new(user_id, name);
        list.id = inner.next_list_id;
        list.items.push(content_id);
        let summary = list.summary();
        inner.lists.insert(list.id, list);
        Ok(summary)
    }

    /// Content of one list, in insertion order
    pub async fn list_content(&self, user_id: UserId, list_id: ListId) -> CatalogResult<Vec<ContentItem>> {
        let inner = self.inner.read().await;
        let list = inner
            .lists
            .get(&list_id)
            .filter(|l| l.owner == user_id)
            .ok_or(CatalogError::ListNotFound(list_id))?;
        Ok(list
            .items
            .iter()
            .filter_map(|id| inner.content_by_id(*id))
            .map(|item| inner.project(user_id, item))
            .collect())
    }

    /// Union of the user's list contents (the watchlist view), deduplicated
    /// and in list order
    pub async fn watchlist_content(&self, user_id: UserId) -> Vec<ContentItem> {
        let inner = self.inner.read().await;
        let mut lists: Vec<&UserList> = inner
            .lists
            .values()
            .filter(|l| l.owner == user_id)
            .collect();
        lists.sort_by_key(|l| l.id);

        let mut seen = HashSet::new();
        let mut items = Vec::new();
        for list in lists {
            for content_id in &list.items {
                if seen.insert(*content_id) {
                    if let Some(item) = inner.content_by_id(*content_id) {
                        items.push(inner.project(user_id, item));
                    }
                }
            }
        }
        items
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::{ContentType, Preferred};

    async fn store_with_content() -> (CatalogStore, Vec<ContentId>) {
        let store = CatalogStore::new();
        let mut ids = Vec::new();
        for (title, rating, year) in [
            ("Dune: Part Two", 4.8, 2024),
            ("The Bear", 4.9, 2023),
            ("Oppenheimer", 4.7, 2023),
        ] {
            let item = ContentItem::new(title, rating, year, ContentType::Movie);
            ids.push(store.add_content(item).await);
        }
        (store, ids)
    }

    async fn demo_session(store: &CatalogStore) -> Session {
        let (_, session) = store
            .register("demo", "Demo User", "demo@example.com", "hunter2")
            .await
            .unwrap();
        session
    }

    #[tokio::test]
    async fn test_content_lookup_and_not_found() {
        let (store, ids) = store_with_content().await;
        let session = demo_session(&store).await;

        let item = store.content(session.user_id, ids[0]).await.unwrap();
        assert_eq!(item.title, "Dune: Part Two");
        assert!(!item.watched);

        assert_eq!(
            store.content(session.user_id, 999).await,
            Err(CatalogError::ContentNotFound(999))
        );
    }

    #[tokio::test]
    async fn test_trending_sorts_by_rating() {
        let (store, _) = store_with_content().await;
        let session = demo_session(&store).await;

        let trending = store.trending(session.user_id, 10).await;
        let titles: Vec<_> = trending.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["The Bear", "Dune: Part Two", "Oppenheimer"]);
    }

    #[tokio::test]
    async fn test_register_login_logout() {
        let store = CatalogStore::new();
        let (account, session) = store
            .register("demo", "Demo User", "demo@example.com", "hunter2")
            .await
            .unwrap();

        assert_eq!(store.authenticate(&session.token).await, Some(account.id));

        // Duplicate username rejected
        assert_eq!(
            store
                .register("demo", "Other", "other@example.com", "pw")
                .await
                .unwrap_err(),
            CatalogError::DuplicateAccount
        );

        // Wrong password rejected
        assert_eq!(
            store.login("demo@example.com", "wrong").await.unwrap_err(),
            CatalogError::InvalidCredentials
        );

        let (_, fresh) = store.login("demo@example.com", "hunter2").await.unwrap();
        store.logout(&fresh.token).await;
        assert_eq!(store.authenticate(&fresh.token).await, None);
    }

    #[tokio::test]
    async fn test_follow_updates_counts() {
        let store = CatalogStore::new();
        let (alice, _) = store
            .register("alice", "Alice", "alice@example.com", "pw")
            .await
            .unwrap();
        let (bob, _) = store
            .register("bob", "Bob", "bob@example.com", "pw")
            .await
            .unwrap();

        store.follow(alice.id, bob.id).await.unwrap();
        let bob_summary = store.user_summary(alice.id, bob.id).await.unwrap();
        assert!(bob_summary.is_following);
        assert_eq!(bob_summary.followers_count, 1);

        assert_eq!(
            store.follow(alice.id, alice.id).await.unwrap_err(),
            CatalogError::SelfFollow
        );

        store.unfollow(alice.id, bob.id).await.unwrap();
        let bob_summary = store.user_summary(alice.id, bob.id).await.unwrap();
        assert!(!bob_summary.is_following);
        assert_eq!(bob_summary.followers_count, 0);
    }

    #[tokio::test]
    async fn test_mark_watched_is_idempotent() {
        let (store, ids) = store_with_content().await;
        let session = demo_session(&store).await;

        store.mark_watched(session.user_id, ids[0]).await.unwrap();
        store.mark_watched(session.user_id, ids[0]).await.unwrap();

        assert_eq!(store.watched_entries(session.user_id).await.len(), 1);

        let item = store.content(session.user_id, ids[0]).await.unwrap();
        assert!(item.watched);
    }

    #[tokio::test]
    async fn test_comparison_candidates_exclude_new_item() {
        let (store, ids) = store_with_content().await;
        let session = demo_session(&store).await;

        for id in &ids {
            store.mark_watched(session.user_id, *id).await.unwrap();
        }

        let candidates = store
            .comparison_candidates(session.user_id, ids[0], 3)
            .await;
        assert_eq!(candidates.len(), 2);
        assert!(candidates.iter().all(|c| c.id != ids[0]));
        assert!(candidates.iter().all(|c| c.watched));
    }

    #[tokio::test]
    async fn test_record_comparison_moves_scores() {
        let (store, ids) = store_with_content().await;
        let session = demo_session(&store).await;
        store.mark_watched(session.user_id, ids[0]).await.unwrap();
        store.mark_watched(session.user_id, ids[1]).await.unwrap();

        store
            .record_comparison(
                session.user_id,
                ComparisonOutcome {
                    new_content_id: ids[0],
                    existing_content_id: ids[1],
                    preferred: Preferred::New,
                },
            )
            .await
            .unwrap();

        let rankings = store.rankings(session.user_id).await;
        assert_eq!(rankings[0].1.id, ids[0]);
        assert_eq!(rankings[0].0.ranking_score, ranking::WIN_POINTS);
        assert_eq!(rankings[1].0.ranking_score, -ranking::LOSS_POINTS);

        assert_eq!(store.comparisons(session.user_id).await.len(), 1);
    }

    #[tokio::test]
    async fn test_lists_create_add_and_dedupe() {
        let (store, ids) = store_with_content().await;
        let session = demo_session(&store).await;

        let list = store.create_list(session.user_id, "Must Watch").await.unwrap();
        store
            .add_to_list(session.user_id, ids[0], list.id)
            .await
            .unwrap();
        store
            .add_to_list(session.user_id, ids[0], list.id)
            .await
            .unwrap();

        let lists = store.user_lists(session.user_id).await;
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].content_count, 1);

        assert_eq!(
            store
                .add_to_list(session.user_id, ids[0], 999)
                .await
                .unwrap_err(),
            CatalogError::ListNotFound(999)
        );
    }

    #[tokio::test]
    async fn test_create_list_and_add_is_atomic() {
        let (store, ids) = store_with_content().await;
        let session = demo_session(&store).await;

        let summary = store
            .create_list_and_add(session.user_id, "Sci-Fi Favorites", ids[0])
            .await
            .unwrap();
        assert_eq!(summary.content_count, 1);

        // Unknown content creates nothing
        assert_eq!(
            store
                .create_list_and_add(session.user_id, "Broken", 999)
                .await
                .unwrap_err(),
            CatalogError::ContentNotFound(999)
        );
        assert_eq!(store.user_lists(session.user_id).await.len(), 1);
    }

    #[tokio::test]
    async fn test_watchlist_unions_lists_without_duplicates() {
        let (store, ids) = store_with_content().await;
        let session = demo_session(&store).await;

        store
            .create_list_and_add(session.user_id, "A", ids[0])
            .await
            .unwrap();
        let second = store
            .create_list_and_add(session.user_id, "B", ids[0])
            .await
            .unwrap();
        store
            .add_to_list(session.user_id, ids[1], second.id)
            .await
            .unwrap();

        let watchlist = store.watchlist_content(session.user_id).await;
        let found: Vec<_> = watchlist.iter().map(|i| i.id).collect();
        assert_eq!(found, vec![ids[0], ids[1]]);
    }

    #[tokio::test]
    async fn test_recommendations_exclude_watched() {
        let (store, ids) = store_with_content().await;
        let session = demo_session(&store).await;
        store.mark_watched(session.user_id, ids[1]).await.unwrap();

        let recs = store.recommendations(session.user_id, 10).await;
        assert!(recs.iter().all(|i| i.id != ids[1]));
        assert_eq!(recs.len(), 2);
    }
}
