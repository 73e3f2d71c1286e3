//! Client-side discover filtering
//!
//! The discover page prefers server-side filtering; this module is the
//! fallback applied to the built-in sample catalog when the API is
//! unreachable. The whole filter is reapplied whenever any field changes.

use crate::state::global::ContentItem;

/// Initial year window shown on the discover page
pub const INITIAL_YEAR_RANGE: (i32, i32) = (2000, 2024);
/// Initial runtime window shown on the discover page (minutes)
pub const INITIAL_RUNTIME_RANGE: (u32, u32) = (30, 180);
/// Initial minimum-rating slider position; values at or below it are not
/// sent to the server
pub const INITIAL_MIN_RATING: f64 = 3.5;

/// The discover page's filter form state
#[derive(Clone, Debug, PartialEq)]
pub struct FilterState {
    pub search: String,
    /// Content type name, or "all"
    pub content_type: String,
    /// Single platform name, or "all"
    pub platform: String,
    pub genres: Vec<String>,
    pub min_rating: f64,
    pub year_range: (i32, i32),
    pub platforms: Vec<String>,
    pub runtime_range: (u32, u32),
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            content_type: "all".to_string(),
            platform: "all".to_string(),
            genres: Vec::new(),
            min_rating: INITIAL_MIN_RATING,
            year_range: INITIAL_YEAR_RANGE,
            platforms: Vec::new(),
            runtime_range: INITIAL_RUNTIME_RANGE,
        }
    }
}

impl FilterState {
    /// Encode as discover query parameters, omitting inactive filters.
    /// The minimum rating is only sent above its initial slider position.
    pub fn to_query(&self) -> String {
        let mut params: Vec<String> = Vec::new();

        if !self.search.is_empty() {
            params.push(format!("search={}", urlencode(&self.search)));
        }
        if self.content_type != "all" {
            params.push(format!("content_type={}", urlencode(&self.content_type)));
        }
        if self.platform != "all" {
            params.push(format!("platform={}", urlencode(&self.platform)));
        }
        if !self.genres.is_empty() {
            params.push(format!("genres={}", urlencode(&self.genres.join(","))));
        }
        if self.min_rating > INITIAL_MIN_RATING {
            params.push(format!("min_rating={}", self.min_rating));
        }
        if self.year_range != INITIAL_YEAR_RANGE {
            params.push(format!("year_from={}", self.year_range.0));
            params.push(format!("year_to={}", self.year_range.1));
        }
        if !self.platforms.is_empty() {
            params.push(format!("platforms={}", urlencode(&self.platforms.join(","))));
        }
        if self.runtime_range != INITIAL_RUNTIME_RANGE {
            params.push(format!("runtime_min={}", self.runtime_range.0));
            params.push(format!("runtime_max={}", self.runtime_range.1));
        }

        params.join("&")
    }
}

/// Apply the filter to an in-memory collection, preserving input order.
/// Predicates compose conjunctively; unset fields match everything.
pub fn apply_filters(items: &[ContentItem], filters: &FilterState) -> Vec<ContentItem> {
    items
        .iter()
        .filter(|item| matches(item, filters))
        .cloned()
        .collect()
}

fn matches(item: &ContentItem, filters: &FilterState) -> bool {
    // Text search over title and platform labels
    if !filters.search.is_empty() {
        let needle = filters.search.to_lowercase();
        let in_title = item.title.to_lowercase().contains(&needle);
        let in_platforms = item
            .platforms
            .iter()
            .any(|p| p.to_lowercase().contains(&needle));
        if !in_title && !in_platforms {
            return false;
        }
    }

    if filters.content_type != "all" && item.content_type != filters.content_type {
        return false;
    }

    if filters.platform != "all" {
        let needle = filters.platform.to_lowercase();
        if !item
            .platforms
            .iter()
            .any(|p| p.to_lowercase().contains(&needle))
        {
            return false;
        }
    }

    if !filters.genres.is_empty() {
        let any_genre = filters.genres.iter().any(|g| {
            item.genres
                .iter()
                .any(|item_genre| item_genre.eq_ignore_ascii_case(g))
        });
        if !any_genre {
            return false;
        }
    }

    if filters.min_rating > 0.0 && item.rating < filters.min_rating {
        return false;
    }

    let (year_lo, year_hi) = filters.year_range;
    if item.year < year_lo || item.year > year_hi {
        return false;
    }

    if !filters.platforms.is_empty() {
        let any_platform = filters.platforms.iter().any(|selected| {
            item.platforms
                .iter()
                .any(|p| p.eq_ignore_ascii_case(selected))
        });
        if !any_platform {
            return false;
        }
    }

    // Items with unknown runtime pass
    if let Some(runtime) = item.runtime_minutes {
        let (lo, hi) = filters.runtime_range;
        if runtime < lo || runtime > hi {
            return false;
        }
    }

    true
}

/// Built-in sample content shown when the API is unreachable
pub fn sample_content() -> Vec<ContentItem> {
    vec![
        ContentItem {
            id: 1,
            title: "Dune: Part Two".to_string(),
            image: "/placeholder.svg".to_string(),
            rating: 4.8,
            year: 2024,
            content_type: "movie".to_string(),
            genres: vec!["Sci-Fi".to_string(), "Adventure".to_string()],
            platforms: vec!["HBO Max".to_string(), "Prime Video".to_string()],
            description: String::new(),
            runtime_minutes: Some(166),
            watched: false,
        },
        ContentItem {
            id: 2,
            title: "The Bear".to_string(),
            image: "/placeholder.svg".to_string(),
            rating: 4.9,
            year: 2023,
            content_type: "show".to_string(),
            genres: vec!["Comedy".to_string(), "Drama".to_string()],
            platforms: vec!["Hulu".to_string(), "Disney+".to_string()],
            description: String::new(),
            runtime_minutes: Some(30),
            watched: false,
        },
        ContentItem {
            id: 3,
            title: "Oppenheimer".to_string(),
            image: "/placeholder.svg".to_string(),
            rating: 4.7,
            year: 2023,
            content_type: "movie".to_string(),
            genres: vec!["Drama".to_string(), "Biography".to_string()],
            platforms: vec!["Prime Video".to_string()],
            description: String::new(),
            runtime_minutes: Some(180),
            watched: false,
        },
    ]
}

/// Percent-encode a query parameter value
pub(crate) fn urlencode(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filters_match_sample() {
        let items = sample_content();
        // The initial slider position still lets everything through
        let result = apply_filters(&items, &FilterState::default());
        assert_eq!(result.len(), items.len());
    }

    #[test]
    fn test_year_window_scenario() {
        let mut items = sample_content();
        items[1].year = 2010;
        items[1].rating = 2.0;

        let filters = FilterState {
            year_range: (2015, 2024),
            min_rating: 0.0,
            ..Default::default()
        };
        let result = apply_filters(&items, &filters);
        assert!(result.iter().all(|i| (2015..=2024).contains(&i.year)));
        assert!(!result.iter().any(|i| i.id == items[1].id));
    }

    #[test]
    fn test_genre_uses_metadata_not_title() {
        let items = sample_content();
        let filters = FilterState {
            genres: vec!["Drama".to_string()],
            ..Default::default()
        };
        let result = apply_filters(&items, &filters);
        let ids: Vec<_> = result.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_query_omits_initial_values() {
        assert_eq!(FilterState::default().to_query(), "");

        let filters = FilterState {
            search: "dune".to_string(),
            content_type: "movie".to_string(),
            min_rating: 4.0,
            ..Default::default()
        };
        let query = filters.to_query();
        assert!(query.contains("search=dune"));
        assert!(query.contains("content_type=movie"));
        assert!(query.contains("min_rating=4"));
        assert!(!query.contains("year_from"));
    }

    #[test]
    fn test_urlencode_spaces() {
        assert_eq!(urlencode("the bear"), "the%20bear");
    }
}
