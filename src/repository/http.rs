//! HTTP repository client
//!
//! reqwest client against the WatchTracker REST API. The session is passed
//! in explicitly at construction; nothing is read from ambient storage.

use crate::catalog::types::{
    ComparisonOutcome, ContentId, ContentItem, ListId, ListSummary, Session,
};
use crate::discover::criteria::{DEFAULT_RUNTIME_RANGE, DEFAULT_YEAR_RANGE};
use crate::discover::{FilterCriteria, PlatformFilter, TypeFilter};
use crate::repository::{ContentRepository, RepositoryError, RepositoryResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Configuration for the HTTP repository client
#[derive(Debug, Clone)]
pub struct HttpRepositoryConfig {
    /// Base URL of the API (e.g., "http://localhost:8086/api/v1")
    pub base_url: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for HttpRepositoryConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8086/api/v1".to_string(),
            request_timeout_ms: 5000,
        }
    }
}

/// Repository backed by the REST API
pub struct HttpRepository {
    client: Client,
    config: HttpRepositoryConfig,
    session: Session,
}

#[derive(Deserialize)]
struct ContentListResponse {
    items: Vec<ContentItem>,
}

#[derive(Deserialize)]
struct ListsResponse {
    lists: Vec<ListSummary>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl HttpRepository {
    /// Create a client for the given API and session
    pub fn new(config: HttpRepositoryConfig, session: Session) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            config,
            session,
        }
    }

    /// The session this client acts under
    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn map_send_error(err: reqwest::Error) -> RepositoryError {
        if err.is_timeout() {
            RepositoryError::Timeout
        } else if err.is_connect() {
            RepositoryError::Unavailable
        } else {
            RepositoryError::Transport(err.to_string())
        }
    }

    async fn check_status(response: reqwest::Response) -> RepositoryResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.error.message,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
        };

        if status == reqwest::StatusCode::NOT_FOUND {
            Err(RepositoryError::NotFound(message))
        } else {
            Err(RepositoryError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> RepositoryResult<T> {
        let response = self
            .client
            .get(self.url(path))
            .bearer_auth(&self.session.token)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        let response = Self::check_status(response).await?;
        response
            .json()
            .await
            .map_err(|e| RepositoryError::Transport(e.to_string()))
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> RepositoryResult<T> {
        let response = self
            .client
            .post(self.url(path))
            .bearer_auth(&self.session.token)
            .json(body)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        let response = Self::check_status(response).await?;
        response
            .json()
            .await
            .map_err(|e| RepositoryError::Transport(e.to_string()))
    }

    /// Encode criteria as query parameters, omitting identity values
    fn discover_query(criteria: &FilterCriteria) -> String {
        let mut params: Vec<String> = Vec::new();

        if !criteria.search.is_empty() {
            params.push(format!("search={}", urlencoding::encode(&criteria.search)));
        }
        if let TypeFilter::Only(content_type) = criteria.content_type {
            params.push(format!("content_type={}", content_type));
        }
        if let PlatformFilter::Named(name) = &criteria.platform {
            params.push(format!("platform={}", urlencoding::encode(name)));
        }
        if !criteria.genres.is_empty() {
            params.push(format!(
                "genres={}",
                urlencoding::encode(&criteria.genres.join(","))
            ));
        }
        if criteria.min_rating > 0.0 {
            params.push(format!("min_rating={}", criteria.min_rating));
        }
        if criteria.year_range != DEFAULT_YEAR_RANGE {
            params.push(format!("year_from={}", criteria.year_range.0));
            params.push(format!("year_to={}", criteria.year_range.1));
        }
        if !criteria.platforms.is_empty() {
            params.push(format!(
                "platforms={}",
                urlencoding::encode(&criteria.platforms.join(","))
            ));
        }
        if criteria.runtime_range != DEFAULT_RUNTIME_RANGE {
            params.push(format!("runtime_min={}", criteria.runtime_range.0));
            params.push(format!("runtime_max={}", criteria.runtime_range.1));
        }

        params.join("&")
    }
}

#[async_trait]
impl ContentRepository for HttpRepository {
    async fn content_by_id(&self, id: ContentId) -> RepositoryResult<ContentItem> {
        self.get_json(&format!("/content/{}", id)).await
    }

    async fn trending(&self) -> RepositoryResult<Vec<ContentItem>> {
        let response: ContentListResponse = self.get_json("/content/trending").await?;
        Ok(response.items)
    }

    async fn discover(&self, criteria: &FilterCriteria) -> RepositoryResult<Vec<ContentItem>> {
        let query = Self::discover_query(criteria);
        let path = if query.is_empty() {
            "/content/discover".to_string()
        } else {
            format!("/content/discover?{}", query)
        };
        let response: ContentListResponse = self.get_json(&path).await?;
        Ok(response.items)
    }

    async fn watched(&self) -> RepositoryResult<Vec<ContentItem>> {
        let response: ContentListResponse = self.get_json("/user/watched").await?;
        Ok(response.items)
    }

    async fn watchlist(&self) -> RepositoryResult<Vec<ContentItem>> {
        let response: ContentListResponse = self.get_json("/user/watchlist").await?;
        Ok(response.items)
    }

    async fn recommendations(&self) -> RepositoryResult<Vec<ContentItem>> {
        let response: ContentListResponse = self.get_json("/user/recommendations").await?;
        Ok(response.items)
    }

    async fn mark_watched(&self, content_id: ContentId) -> RepositoryResult<()> {
        #[derive(Serialize)]
        struct MarkWatchedRequest {
            content_id: ContentId,
        }

        let _: serde_json::Value = self
            .post_json("/user/watched", &MarkWatchedRequest { content_id })
            .await?;
        Ok(())
    }

    async fn comparison_candidates(
        &self,
        content_id: ContentId,
    ) -> RepositoryResult<Vec<ContentItem>> {
        let response: ContentListResponse = self
            .get_json(&format!("/user/comparisons/{}", content_id))
            .await?;
        Ok(response.items)
    }

    async fn submit_comparison(&self, outcome: &ComparisonOutcome) -> RepositoryResult<()> {
        let _: serde_json::Value = self.post_json("/user/comparisons", outcome).await?;
        Ok(())
    }

    async fn user_lists(&self) -> RepositoryResult<Vec<ListSummary>> {
        let response: ListsResponse = self.get_json("/user/lists").await?;
        Ok(response.lists)
    }

    async fn add_content_to_list(
        &self,
        content_id: ContentId,
        list_id: ListId,
    ) -> RepositoryResult<()> {
        #[derive(Serialize)]
        struct AddToListRequest {
            content_id: ContentId,
            list_id: ListId,
        }

        let _: serde_json::Value = self
            .post_json(
                "/user/lists/add",
                &AddToListRequest {
                    content_id,
                    list_id,
                },
            )
            .await?;
        Ok(())
    }

    async fn create_list_and_add(
        &self,
        name: &str,
        content_id: ContentId,
    ) -> RepositoryResult<ListSummary> {
        #[derive(Serialize)]
        struct CreateListRequest {
            name: String,
            content_id: ContentId,
        }

        self.post_json(
            "/user/lists",
            &CreateListRequest {
                name: name.to_string(),
                content_id,
            },
        )
        .await
    }
}
