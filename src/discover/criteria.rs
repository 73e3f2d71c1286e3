//! Filter criteria for discover queries
//!
//! A fixed-shape value object: the recognized filter fields are fully
//! enumerable, so there is no dynamically-keyed map here. The default
//! criteria match everything.

use crate::catalog::types::ContentType;

/// Inclusive year range applied by default (spans the whole catalog)
pub const DEFAULT_YEAR_RANGE: (i32, i32) = (1900, 2100);
/// Inclusive runtime range in minutes applied by default
pub const DEFAULT_RUNTIME_RANGE: (u32, u32) = (0, 600);

/// Content-type selection: a sentinel "all" or one specific type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    /// Match every content type
    #[default]
    All,
    /// Match one specific type
    Only(ContentType),
}

/// Single-select platform filter: a sentinel "all" or one named platform
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PlatformFilter {
    /// Match every platform
    #[default]
    All,
    /// Match items carried by the named platform
    Named(String),
}

/// The full set of discover filters
///
/// No invariant beyond `lo <= hi` on the two ranges. Default criteria are
/// the identity: applying them returns the input collection unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// Free-text search over title and platform labels
    pub search: String,
    /// Content-type selection
    pub content_type: TypeFilter,
    /// Single-select platform
    pub platform: PlatformFilter,
    /// Selected genre labels; empty means no genre filtering
    pub genres: Vec<String>,
    /// Minimum rating threshold; 0 disables the predicate
    pub min_rating: f64,
    /// Inclusive release-year range
    pub year_range: (i32, i32),
    /// Multi-select platforms; empty means no platform-set filtering
    pub platforms: Vec<String>,
    /// Inclusive runtime range in minutes
    pub runtime_range: (u32, u32),
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            content_type: TypeFilter::All,
            platform: PlatformFilter::All,
            genres: Vec::new(),
            min_rating: 0.0,
            year_range: DEFAULT_YEAR_RANGE,
            platforms: Vec::new(),
            runtime_range: DEFAULT_RUNTIME_RANGE,
        }
    }
}

impl FilterCriteria {
    /// Builder: set the search text
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    /// Builder: restrict to one content type
    pub fn content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = TypeFilter::Only(content_type);
        self
    }

    /// Builder: restrict to one named platform
    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = PlatformFilter::Named(platform.into());
        self
    }

    /// Builder: add a genre to the selected set
    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genres.push(genre.into());
        self
    }

    /// Builder: set the minimum rating threshold
    pub fn min_rating(mut self, rating: f64) -> Self {
        self.min_rating = rating;
        self
    }

    /// Builder: set the inclusive release-year range
    pub fn years(mut self, lo: i32, hi: i32) -> Self {
        self.year_range = (lo, hi);
        self
    }

    /// Builder: set the multi-select platform set
    pub fn on_any_of(mut self, platforms: &[&str]) -> Self {
        self.platforms = platforms.iter().map(|p| p.to_string()).collect();
        self
    }

    /// Builder: set the inclusive runtime range in minutes
    pub fn runtime(mut self, lo: u32, hi: u32) -> Self {
        self.runtime_range = (lo, hi);
        self
    }

    /// True when every field is at its identity default
    pub fn is_identity(&self) -> bool {
        *self == FilterCriteria::default()
    }
}
