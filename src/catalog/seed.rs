//! Demo catalog seeding
//!
//! A small built-in catalog so the server and CLI demo are usable without
//! any external content source.

use crate::catalog::store::CatalogStore;
use crate::catalog::types::{ContentItem, ContentType, Session, UserAccount};

/// The built-in sample catalog
pub fn sample_catalog() -> Vec<ContentItem> {
    vec![
        ContentItem::new("Dune: Part Two", 4.8, 2024, ContentType::Movie)
            .platforms(&["HBO Max", "Prime Video"])
            .genres(&["Sci-Fi", "Adventure", "Drama"])
            .runtime(166)
            .description(
                "Paul Atreides unites with Chani and the Fremen while seeking revenge \
                 against the conspirators who destroyed his family.",
            ),
        ContentItem::new("The Bear", 4.9, 2023, ContentType::Show)
            .platforms(&["Hulu", "Disney+"])
            .genres(&["Comedy", "Drama"])
            .runtime(30)
            .description(
                "A young chef from the fine dining world returns to Chicago to run his \
                 family's sandwich shop.",
            ),
        ContentItem::new("Oppenheimer", 4.7, 2023, ContentType::Movie)
            .platforms(&["Prime Video"])
            .genres(&["Drama", "Biography", "History"])
            .runtime(180),
        ContentItem::new("Succession", 4.9, 2023, ContentType::Show)
            .platforms(&["HBO Max"])
            .genres(&["Drama"])
            .runtime(60),
        ContentItem::new("The Last of Us", 4.8, 2023, ContentType::Show)
            .platforms(&["HBO Max"])
            .genres(&["Drama", "Horror", "Action"])
            .runtime(55),
        ContentItem::new("Slow Horses", 4.7, 2023, ContentType::Show)
            .platforms(&["Apple TV+"])
            .genres(&["Thriller", "Drama", "Mystery"])
            .runtime(45),
        ContentItem::new("The Gentlemen", 4.3, 2024, ContentType::Show)
            .platforms(&["Netflix"])
            .genres(&["Action", "Comedy", "Crime"])
            .runtime(50),
        ContentItem::new("Fallout", 4.5, 2024, ContentType::Show)
            .platforms(&["Prime Video"])
            .genres(&["Sci-Fi", "Action", "Adventure"])
            .runtime(60),
        ContentItem::new("Foundation", 4.6, 2023, ContentType::Show)
            .platforms(&["Apple TV+"])
            .genres(&["Sci-Fi", "Drama"])
            .runtime(55),
        ContentItem::new("Poor Things", 4.5, 2023, ContentType::Movie)
            .platforms(&["Hulu"])
            .genres(&["Comedy", "Drama", "Romance"])
            .runtime(141),
        ContentItem::new("Shogun", 4.8, 2024, ContentType::Show)
            .platforms(&["Hulu", "Disney+"])
            .genres(&["Drama", "History", "Adventure"])
            .runtime(60),
        ContentItem::new("Spirited Away", 4.9, 2001, ContentType::Anime)
            .platforms(&["HBO Max", "Netflix"])
            .genres(&["Fantasy", "Adventure", "Animation"])
            .runtime(125),
        ContentItem::new("Planet Earth III", 4.8, 2023, ContentType::Documentary)
            .platforms(&["BBC iPlayer", "Discovery+"])
            .genres(&["Documentary", "Family"])
            .runtime(50),
    ]
}

/// Seed the store with the sample catalog and a demo account.
///
/// Returns the demo account and an open session for it; the API server uses
/// this account as the guest identity for unauthenticated requests.
pub async fn seed_demo(store: &CatalogStore) -> (UserAccount, Session) {
    for item in sample_catalog() {
        store.add_content(item).await;
    }

    let (account, session) = store
        .register("demo", "Demo User", "demo@watchtracker.local", "demo")
        .await
        .expect("seeding an empty store cannot collide");

    (account, session)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_is_well_formed() {
        let catalog = sample_catalog();
        assert!(catalog.len() >= 10);
        for item in &catalog {
            assert!(!item.title.is_empty());
            assert!((0.0..=5.0).contains(&item.rating));
            assert!(!item.platforms.is_empty());
            assert!(!item.genres.is_empty());
        }
    }

    #[tokio::test]
    async fn test_seed_demo_creates_account_and_content() {
        let store = CatalogStore::new();
        let (account, session) = seed_demo(&store).await;

        assert_eq!(account.username, "demo");
        assert_eq!(store.authenticate(&session.token).await, Some(account.id));
        assert_eq!(store.content_count().await, sample_catalog().len());
    }
}
