//! Discover filter engine
//!
//! Narrows an in-memory content collection to the items matching a
//! [`FilterCriteria`]. Predicates compose conjunctively and the result
//! preserves input order; the full filter is reapplied whenever any field
//! changes rather than updated incrementally.
//!
//! The same engine backs the server's discover endpoint and serves as the
//! client-side fallback when filtering must happen locally.

use crate::catalog::types::ContentItem;
use crate::discover::criteria::{FilterCriteria, PlatformFilter, TypeFilter};

/// Apply filter criteria to a content collection
///
/// Returns matching items in their input order.
pub fn apply(items: &[ContentItem], criteria: &FilterCriteria) -> Vec<ContentItem> {
    items
        .iter()
        .filter(|item| matches(item, criteria))
        .cloned()
        .collect()
}

/// Check whether a single item passes every active predicate
pub fn matches(item: &ContentItem, criteria: &FilterCriteria) -> bool {
    matches_search(item, &criteria.search)
        && matches_content_type(item, &criteria.content_type)
        && matches_platform(item, &criteria.platform)
        && matches_genres(item, &criteria.genres)
        && matches_min_rating(item, criteria.min_rating)
        && matches_year_range(item, criteria.year_range)
        && matches_platform_set(item, &criteria.platforms)
        && matches_runtime_range(item, criteria.runtime_range)
}

/// Case-insensitive substring match against title or any platform label
fn matches_search(item: &ContentItem, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    item.title.to_lowercase().contains(&needle)
        || item
            .platforms
            .iter()
            .any(|p| p.to_lowercase().contains(&needle))
}

fn matches_content_type(item: &ContentItem, filter: &TypeFilter) -> bool {
    match filter {
        TypeFilter::All => true,
        TypeFilter::Only(content_type) => item.content_type == *content_type,
    }
}

fn matches_platform(item: &ContentItem, filter: &PlatformFilter) -> bool {
    match filter {
        PlatformFilter::All => true,
        PlatformFilter::Named(name) => item.on_platform(name),
    }
}

/// Any selected genre present on the item passes (genre labels are real
/// metadata on the item, not inferred from the title)
fn matches_genres(item: &ContentItem, genres: &[String]) -> bool {
    if genres.is_empty() {
        return true;
    }
    genres.iter().any(|g| item.has_genre(g))
}

fn matches_min_rating(item: &ContentItem, min_rating: f64) -> bool {
    if min_rating <= 0.0 {
        return true;
    }
    item.rating >= min_rating
}

fn matches_year_range(item: &ContentItem, (lo, hi): (i32, i32)) -> bool {
    lo <= item.year && item.year <= hi
}

/// At least one platform overlap with the selected set
fn matches_platform_set(item: &ContentItem, platforms: &[String]) -> bool {
    if platforms.is_empty() {
        return true;
    }
    platforms.iter().any(|selected| {
        item.platforms
            .iter()
            .any(|p| p.eq_ignore_ascii_case(selected))
    })
}

/// Inclusive runtime bounds; items with unknown runtime pass
fn matches_runtime_range(item: &ContentItem, (lo, hi): (u32, u32)) -> bool {
    match item.runtime_minutes {
        Some(runtime) => lo <= runtime && runtime <= hi,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::ContentType;

    fn sample_items() -> Vec<ContentItem> {
        vec![
            ContentItem {
                id: 1,
                ..ContentItem::new("Dune: Part Two", 4.8, 2024, ContentType::Movie)
                    .platforms(&["HBO Max", "Prime Video"])
                    .genres(&["Sci-Fi", "Adventure"])
                    .runtime(166)
            },
            ContentItem {
                id: 2,
                ..ContentItem::new("The Bear", 4.9, 2023, ContentType::Show)
                    .platforms(&["Hulu", "Disney+"])
                    .genres(&["Comedy", "Drama"])
                    .runtime(30)
            },
            ContentItem {
                id: 3,
                ..ContentItem::new("Oppenheimer", 4.7, 2023, ContentType::Movie)
                    .platforms(&["Prime Video"])
                    .genres(&["Drama", "Biography"])
                    .runtime(180)
            },
        ]
    }

    #[test]
    fn test_default_criteria_are_identity() {
        let items = sample_items();
        let result = apply(&items, &FilterCriteria::default());
        assert_eq!(result, items);
    }

    #[test]
    fn test_search_matches_title_and_platforms() {
        let items = sample_items();

        let by_title = apply(&items, &FilterCriteria::default().search("dune"));
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, 1);

        // "prime" matches the platform label on items 1 and 3
        let by_platform = apply(&items, &FilterCriteria::default().search("prime"));
        let ids: Vec<_> = by_platform.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_content_type_filter() {
        let items = sample_items();
        let shows = apply(
            &items,
            &FilterCriteria::default().content_type(ContentType::Show),
        );
        assert_eq!(shows.len(), 1);
        assert_eq!(shows[0].id, 2);
    }

    #[test]
    fn test_single_platform_filter() {
        let items = sample_items();
        let on_hulu = apply(&items, &FilterCriteria::default().platform("hulu"));
        assert_eq!(on_hulu.len(), 1);
        assert_eq!(on_hulu[0].id, 2);
    }

    #[test]
    fn test_genre_filter_uses_genre_metadata() {
        let items = sample_items();
        let dramas = apply(&items, &FilterCriteria::default().genre("drama"));
        let ids: Vec<_> = dramas.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 3]);

        // A genre word appearing in a title must not match by itself
        let comedy = apply(&items, &FilterCriteria::default().genre("Bear"));
        assert!(comedy.is_empty());
    }

    #[test]
    fn test_min_rating_threshold() {
        let items = sample_items();
        let top = apply(&items, &FilterCriteria::default().min_rating(4.8));
        let ids: Vec<_> = top.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_year_range_is_inclusive() {
        let items = sample_items();
        let criteria = FilterCriteria::default().years(2023, 2023);
        let result = apply(&items, &criteria);
        assert!(result.iter().all(|i| i.year == 2023));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_year_range_bounds_hold_for_all_results() {
        let items = sample_items();
        let (lo, hi) = (2015, 2024);
        let result = apply(&items, &FilterCriteria::default().years(lo, hi));
        assert!(result.iter().all(|i| lo <= i.year && i.year <= hi));
    }

    #[test]
    fn test_platform_set_requires_overlap() {
        let items = sample_items();
        let criteria = FilterCriteria::default().on_any_of(&["Hulu", "Netflix"]);
        let result = apply(&items, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 2);
    }

    #[test]
    fn test_runtime_range_passes_unknown_runtimes() {
        let mut items = sample_items();
        items[2].runtime_minutes = None;

        let criteria = FilterCriteria::default().runtime(20, 60);
        let result = apply(&items, &criteria);
        let ids: Vec<_> = result.iter().map(|i| i.id).collect();
        // The Bear (30 min) matches; Oppenheimer has unknown runtime and passes
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_conjunction_and_stable_order() {
        let items = sample_items();
        let criteria = FilterCriteria::default().years(2023, 2024).min_rating(4.7);
        let result = apply(&items, &criteria);
        let ids: Vec<_> = result.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_filter_scenario_year_window() {
        let items = vec![
            ContentItem {
                id: 1,
                ..ContentItem::new("A", 4.0, 2020, ContentType::Movie)
            },
            ContentItem {
                id: 2,
                ..ContentItem::new("B", 2.0, 2010, ContentType::Movie)
            },
        ];

        let criteria = FilterCriteria::default().years(2015, 2024);
        let result = apply(&items, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);
    }
}
