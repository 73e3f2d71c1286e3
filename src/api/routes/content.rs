//! Content Routes
//!
//! Catalog browsing endpoints.
//!
//! - GET /api/v1/content/trending - Highest-rated content
//! - GET /api/v1/content/discover - Filtered catalog browse
//! - GET /api/v1/content/:id - One content item

use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    Json,
};
use std::sync::Arc;

use crate::api::dto::{ContentListResponse, DiscoverParams};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::catalog::types::{ContentId, ContentItem, ContentType};
use crate::discover::FilterCriteria;

/// GET /api/v1/content/trending
///
/// Highest-rated catalog items, best first.
pub async fn trending(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<Json<ContentListResponse>> {
    let user_id = state.current_user(&headers).await;
    let items = state.store.trending(user_id, state.config.trending_limit).await;
    Ok(Json(ContentListResponse::new(items)))
}

/// GET /api/v1/content/discover
///
/// Catalog items matching the query-parameter filters, in catalog order.
pub async fn discover(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(params): Query<DiscoverParams>,
) -> ApiResult<Json<ContentListResponse>> {
    let user_id = state.current_user(&headers).await;
    let criteria = criteria_from_params(&params)?;
    let items = state.store.discover(user_id, &criteria).await;
    Ok(Json(ContentListResponse::new(items)))
}

/// GET /api/v1/content/:id
///
/// One content item with the viewer's watched flag.
pub async fn get_content(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<ContentId>,
) -> ApiResult<Json<ContentItem>> {
    let user_id = state.current_user(&headers).await;
    let item = state.store.content(user_id, id).await?;
    Ok(Json(item))
}

/// Convert query parameters into filter criteria
fn criteria_from_params(params: &DiscoverParams) -> ApiResult<FilterCriteria> {
    let mut criteria = FilterCriteria::default();

    if let Some(search) = &params.search {
        criteria.search = search.clone();
    }

    if let Some(content_type) = params.content_type.as_deref() {
        if !content_type.eq_ignore_ascii_case("all") {
            let parsed: ContentType = content_type
                .parse()
                .map_err(ApiError::Validation)?;
            criteria = criteria.content_type(parsed);
        }
    }

    if let Some(platform) = params.platform.as_deref() {
        if !platform.eq_ignore_ascii_case("all") && !platform.is_empty() {
            criteria = criteria.platform(platform);
        }
    }

    if let Some(genres) = &params.genres {
        criteria.genres = split_csv(genres);
    }

    if let Some(min_rating) = params.min_rating {
        if !(0.0..=5.0).contains(&min_rating) {
            return Err(ApiError::Validation(format!(
                "min_rating must be between 0 and 5, got {}",
                min_rating
            )));
        }
        criteria.min_rating = min_rating;
    }

    if params.year_from.is_some() || params.year_to.is_some() {
        let lo = params.year_from.unwrap_or(criteria.year_range.0);
        let hi = params.year_to.unwrap_or(criteria.year_range.1);
        if lo > hi {
            return Err(ApiError::Validation(format!(
                "year range is inverted: {} > {}",
                lo, hi
            )));
        }
        criteria.year_range = (lo, hi);
    }

    if let Some(platforms) = &params.platforms {
        criteria.platforms = split_csv(platforms);
    }

    if params.runtime_min.is_some() || params.runtime_max.is_some() {
        let lo = params.runtime_min.unwrap_or(criteria.runtime_range.0);
        let hi = params.runtime_max.unwrap_or(criteria.runtime_range.1);
        if lo > hi {
            return Err(ApiError::Validation(format!(
                "runtime range is inverted: {} > {}",
                lo, hi
            )));
        }
        criteria.runtime_range = (lo, hi);
    }

    Ok(criteria)
}

/// Split a comma-separated parameter into trimmed, non-empty values
fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discover::TypeFilter;

    #[test]
    fn test_empty_params_give_identity_criteria() {
        let criteria = criteria_from_params(&DiscoverParams::default()).unwrap();
        assert!(criteria.is_identity());
    }

    #[test]
    fn test_all_sentinels_are_skipped() {
        let params = DiscoverParams {
            content_type: Some("all".to_string()),
            platform: Some("all".to_string()),
            ..Default::default()
        };
        let criteria = criteria_from_params(&params).unwrap();
        assert!(criteria.is_identity());
    }

    #[test]
    fn test_csv_genres_are_split() {
        let params = DiscoverParams {
            genres: Some("Drama, Sci-Fi,,Comedy".to_string()),
            ..Default::default()
        };
        let criteria = criteria_from_params(&params).unwrap();
        assert_eq!(criteria.genres, vec!["Drama", "Sci-Fi", "Comedy"]);
    }

    #[test]
    fn test_content_type_is_parsed() {
        let params = DiscoverParams {
            content_type: Some("shows".to_string()),
            ..Default::default()
        };
        let criteria = criteria_from_params(&params).unwrap();
        assert_eq!(criteria.content_type, TypeFilter::Only(ContentType::Show));

        let bad = DiscoverParams {
            content_type: Some("music".to_string()),
            ..Default::default()
        };
        assert!(criteria_from_params(&bad).is_err());
    }

    #[test]
    fn test_inverted_ranges_are_rejected() {
        let params = DiscoverParams {
            year_from: Some(2024),
            year_to: Some(2000),
            ..Default::default()
        };
        assert!(criteria_from_params(&params).is_err());

        let params = DiscoverParams {
            runtime_min: Some(200),
            runtime_max: Some(100),
            ..Default::default()
        };
        assert!(criteria_from_params(&params).is_err());
    }

    #[test]
    fn test_out_of_range_rating_is_rejected() {
        let params = DiscoverParams {
            min_rating: Some(7.5),
            ..Default::default()
        };
        assert!(criteria_from_params(&params).is_err());
    }
}
