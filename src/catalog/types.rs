//! Core data types for the WatchTracker catalog
//!
//! This module defines the fundamental types used throughout the application:
//! - `ContentItem`: A trackable movie or TV-show record
//! - `WatchedEntry`: A user's watched record with its ranking score
//! - `UserList`: A named list of content items
//! - `ComparisonOutcome`: One resolved pairwise preference
//! - `UserAccount`: A registered user

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Unique identifier for a content item
pub type ContentId = u64;
/// Unique identifier for a user list
pub type ListId = u64;
/// Unique identifier for a user account
pub type UserId = u64;

/// Kind of content for filtering and display
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// Feature film
    Movie,
    /// Episodic TV series
    Show,
    /// Documentary film or series
    Documentary,
    /// Anime film or series
    Anime,
}

impl ContentType {
    /// Get all content types for iteration
    pub fn all() -> &'static [ContentType] {
        &[
            ContentType::Movie,
            ContentType::Show,
            ContentType::Documentary,
            ContentType::Anime,
        ]
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentType::Movie => write!(f, "movie"),
            ContentType::Show => write!(f, "show"),
            ContentType::Documentary => write!(f, "documentary"),
            ContentType::Anime => write!(f, "anime"),
        }
    }
}

impl std::str::FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "movie" | "movies" => Ok(ContentType::Movie),
            "show" | "shows" | "tv" => Ok(ContentType::Show),
            "documentary" | "documentaries" => Ok(ContentType::Documentary),
            "anime" => Ok(ContentType::Anime),
            _ => Err(format!(
                "Invalid content type: {}. Use movie, show, documentary, or anime",
                s
            )),
        }
    }
}

/// A trackable movie or TV-show record
///
/// Immutable once fetched except for the `watched` flag, which is a
/// viewer-relative projection of repository state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentItem {
    /// Unique identifier
    pub id: ContentId,
    /// Display title
    pub title: String,
    /// Poster image reference (may be a placeholder)
    pub image: String,
    /// Community rating, 0.0-5.0 with one-decimal granularity by convention
    pub rating: f64,
    /// Release year
    pub year: i32,
    /// Kind of content
    pub content_type: ContentType,
    /// Genre labels
    #[serde(default)]
    pub genres: Vec<String>,
    /// Streaming platforms carrying this item (display order preserved)
    #[serde(default)]
    pub platforms: Vec<String>,
    /// Synopsis text
    #[serde(default)]
    pub description: String,
    /// Runtime in minutes (per episode for shows); None when unknown
    #[serde(default)]
    pub runtime_minutes: Option<u32>,
    /// Whether the requesting user has watched this item
    #[serde(default)]
    pub watched: bool,
}

impl ContentItem {
    /// Create a new content item with required fields
    pub fn new(
        title: impl Into<String>,
        rating: f64,
        year: i32,
        content_type: ContentType,
    ) -> Self {
        Self {
            id: 0, // Assigned by the catalog store
            title: title.into(),
            image: "/placeholder.svg".to_string(),
            rating,
            year,
            content_type,
            genres: Vec::new(),
            platforms: Vec::new(),
            description: String::new(),
            runtime_minutes: None,
            watched: false,
        }
    }

    /// Builder: set the poster image reference
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Builder: set genre labels
    pub fn genres(mut self, genres: &[&str]) -> Self {
        self.genres = genres.iter().map(|g| g.to_string()).collect();
        self
    }

    /// Builder: set streaming platforms
    pub fn platforms(mut self, platforms: &[&str]) -> Self {
        self.platforms = platforms.iter().map(|p| p.to_string()).collect();
        self
    }

    /// Builder: set the synopsis
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder: set the runtime in minutes
    pub fn runtime(mut self, minutes: u32) -> Self {
        self.runtime_minutes = Some(minutes);
        self
    }

    /// Check whether the item is carried by a platform (case-insensitive)
    pub fn on_platform(&self, platform: &str) -> bool {
        let needle = platform.to_lowercase();
        self.platforms
            .iter()
            .any(|p| p.to_lowercase().contains(&needle))
    }

    /// Check whether the item carries a genre label (case-insensitive)
    pub fn has_genre(&self, genre: &str) -> bool {
        let needle = genre.to_lowercase();
        self.genres.iter().any(|g| g.to_lowercase() == needle)
    }
}

/// Which side of a pairwise comparison the user preferred
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Preferred {
    /// The newly-watched item
    New,
    /// The previously-watched candidate
    Existing,
}

impl std::fmt::Display for Preferred {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Preferred::New => write!(f, "new"),
            Preferred::Existing => write!(f, "existing"),
        }
    }
}

/// One resolved pairwise comparison, submitted to the repository
///
/// Ephemeral on the client: created and destroyed within one workflow
/// invocation, never read back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComparisonOutcome {
    /// The newly-watched item
    pub new_content_id: ContentId,
    /// The previously-watched candidate it was compared against
    pub existing_content_id: ContentId,
    /// Which side won the round
    pub preferred: Preferred,
}

/// A user's watched record for one content item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchedEntry {
    /// The watched content item
    pub content_id: ContentId,
    /// Unix timestamp in milliseconds when the item was marked watched
    pub watched_at: i64,
    /// Comparison-derived ranking score, starts at 0
    pub ranking_score: f64,
}

impl WatchedEntry {
    /// Create a new entry stamped with the current time
    pub fn new(content_id: ContentId) -> Self {
        Self {
            content_id,
            watched_at: Utc::now().timestamp_millis(),
            ranking_score: 0.0,
        }
    }
}

/// A named list of content items owned by one user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserList {
    /// Unique identifier
    pub id: ListId,
    /// Owning user
    pub owner: UserId,
    /// Display name, unique per user
    pub name: String,
    /// Member content ids in insertion order
    pub items: Vec<ContentId>,
    /// Unix timestamp in milliseconds when the list was created
    pub created_at: i64,
}

impl UserList {
    /// Create a new empty list stamped with the current time
    pub fn new(owner: UserId, name: impl Into<String>) -> Self {
        Self {
            id: 0, // Assigned by the catalog store
            owner,
            name: name.into(),
            items: Vec::new(),
            created_at: Utc::now().timestamp_millis(),
        }
    }

    /// Summarize for API responses
    pub fn summary(&self) -> ListSummary {
        ListSummary {
            id: self.id,
            name: self.name.clone(),
            content_count: self.items.len(),
        }
    }
}

/// Lightweight list view: `content_count` is repository-owned and
/// read-only to clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListSummary {
    pub id: ListId,
    pub name: String,
    pub content_count: usize,
}

/// A registered user account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserAccount {
    /// Unique identifier
    pub id: UserId,
    /// Unique handle
    pub username: String,
    /// Display name shown in the UI
    pub display_name: String,
    /// Login email
    pub email: String,
    /// Avatar image reference
    pub avatar: String,
    /// Short bio shown on the profile page
    #[serde(default)]
    pub bio: String,
    /// Favorite genres shown on the profile page
    #[serde(default)]
    pub favorite_genres: Vec<String>,
    /// Streaming platforms the user subscribes to
    #[serde(default)]
    pub streaming_platforms: Vec<String>,
    /// Unix timestamp in milliseconds when the account was created
    pub created_at: i64,
}

/// Viewer-relative user summary for search results and follow lists
///
/// `followers_count` / `following_count` are repository-derived;
/// `is_following` is relative to the requesting user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSummary {
    pub id: UserId,
    pub username: String,
    pub display_name: String,
    pub avatar: String,
    pub followers_count: usize,
    pub following_count: usize,
    pub is_following: bool,
}

/// An authenticated session, passed explicitly to clients rather than
/// read from ambient storage
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    /// The authenticated user
    pub user_id: UserId,
    /// Opaque bearer token
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_parsing() {
        assert_eq!("movie".parse::<ContentType>(), Ok(ContentType::Movie));
        assert_eq!("Shows".parse::<ContentType>(), Ok(ContentType::Show));
        assert!("music".parse::<ContentType>().is_err());
    }

    #[test]
    fn test_content_item_builder() {
        let item = ContentItem::new("Dune: Part Two", 4.8, 2024, ContentType::Movie)
            .platforms(&["HBO Max", "Prime Video"])
            .genres(&["Sci-Fi", "Adventure"])
            .runtime(166);

        assert_eq!(item.title, "Dune: Part Two");
        assert!(item.on_platform("hbo max"));
        assert!(item.has_genre("sci-fi"));
        assert!(!item.has_genre("comedy"));
        assert_eq!(item.runtime_minutes, Some(166));
        assert!(!item.watched);
    }

    #[test]
    fn test_preferred_serialization() {
        assert_eq!(serde_json::to_string(&Preferred::New).unwrap(), "\"new\"");
        assert_eq!(
            serde_json::to_string(&Preferred::Existing).unwrap(),
            "\"existing\""
        );
    }

    #[test]
    fn test_list_summary_counts_items() {
        let mut list = UserList::new(1, "Must Watch");
        list.items.push(10);
        list.items.push(11);
        assert_eq!(list.summary().content_count, 2);
    }
}
