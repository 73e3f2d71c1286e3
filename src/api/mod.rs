//! WatchTracker REST API
//!
//! HTTP API layer for WatchTracker, built with Axum.
//!
//! # Endpoints
//!
//! ## Content
//! - `GET /api/v1/content/trending` - Highest-rated content
//! - `GET /api/v1/content/discover` - Filtered catalog browse
//! - `GET /api/v1/content/:id` - One content item
//!
//! ## Watched & comparisons
//! - `GET /api/v1/user/watched` - Watched content
//! - `POST /api/v1/user/watched` - Mark content watched
//! - `GET /api/v1/user/watchlist` - Content across the user's lists
//! - `GET /api/v1/user/recommendations` - Unwatched suggestions
//! - `GET /api/v1/user/rankings` - Watched content by comparison ranking
//! - `GET /api/v1/user/comparisons/:content_id` - Comparison candidates
//! - `POST /api/v1/user/comparisons` - Record a comparison outcome
//!
//! ## Lists
//! - `GET /api/v1/user/lists` - List summaries
//! - `POST /api/v1/user/lists` - Create a list (optionally adding an item)
//! - `POST /api/v1/user/lists/add` - Add an item to an existing list
//! - `GET /api/v1/user/lists/:id` - Content of one list
//!
//! ## Users
//! - `GET /api/v1/users/search` - Search users
//! - `GET /api/v1/users/:id` - Full profile view
//! - `POST /api/v1/users/:id/follow` - Follow
//! - `DELETE /api/v1/users/:id/follow` - Unfollow
//! - `GET /api/v1/user/followers` - Followers of the requesting user
//! - `GET /api/v1/user/following` - Whom the requesting user follows
//!
//! ## Auth
//! - `POST /api/v1/auth/register` - Create an account
//! - `POST /api/v1/auth/login` - Open a session
//! - `POST /api/v1/auth/logout` - Invalidate the presented token
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Content routes
        .route("/content/trending", get(routes::content::trending))
        .route("/content/discover", get(routes::content::discover))
        .route("/content/:id", get(routes::content::get_content))
        // Watched routes
        .route("/user/watched", get(routes::watched::list_watched))
        .route("/user/watched", post(routes::watched::mark_watched))
        .route("/user/watchlist", get(routes::watched::watchlist))
        .route(
            "/user/recommendations",
            get(routes::watched::recommendations),
        )
        .route("/user/rankings", get(routes::watched::rankings))
        // Comparison routes
        .route(
            "/user/comparisons/:content_id",
            get(routes::comparisons::comparison_candidates),
        )
        .route(
            "/user/comparisons",
            post(routes::comparisons::submit_comparison),
        )
        // List routes
        .route("/user/lists", get(routes::lists::list_lists))
        .route("/user/lists", post(routes::lists::create_list))
        .route("/user/lists/add", post(routes::lists::add_to_list))
        .route("/user/lists/:id", get(routes::lists::list_content))
        // User routes
        .route("/users/search", get(routes::users::search_users))
        .route("/users/:id", get(routes::users::user_profile))
        .route("/users/:id/follow", post(routes::users::follow_user))
        .route("/users/:id/follow", delete(routes::users::unfollow_user))
        .route("/user/followers", get(routes::users::followers))
        .route("/user/following", get(routes::users::following))
        // Auth routes
        .route("/auth/register", post(routes::auth::register))
        .route("/auth/login", post(routes::auth::login))
        .route("/auth/logout", post(routes::auth::logout));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()) // Configure properly in production
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("WatchTracker API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("WatchTracker API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed;
    use crate::catalog::store::CatalogStore;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    async fn create_test_app() -> Router {
        let store = Arc::new(CatalogStore::new());
        let (guest, _) = seed::seed_demo(&store).await;
        let state = AppState::new(store, ApiConfig::default(), guest.id);
        build_router(state)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let app = create_test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/live")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let app = create_test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert!(body["content_items"].as_u64().unwrap() > 0);
    }

    #[tokio::test]
    async fn test_trending_returns_catalog() {
        let app = create_test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/content/trending")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["total"].as_u64().unwrap() > 0);
    }

    #[tokio::test]
    async fn test_discover_with_filters() {
        let app = create_test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/content/discover?content_type=show&min_rating=4.8")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        for item in body["items"].as_array().unwrap() {
            assert_eq!(item["content_type"], "show");
            assert!(item["rating"].as_f64().unwrap() >= 4.8);
        }
    }

    #[tokio::test]
    async fn test_discover_rejects_bad_params() {
        let app = create_test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/content/discover?content_type=music")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_content_not_found() {
        let app = create_test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/content/9999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_mark_watched_and_candidates_flow() {
        let app = create_test_app().await;

        // Mark items 1 and 2 watched
        for id in [1, 2] {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/api/v1/user/watched")
                        .header("Content-Type", "application/json")
                        .body(Body::from(format!(r#"{{"content_id": {}}}"#, id)))
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        // Candidates for item 3 exclude it and come from the watched set
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/user/comparisons/3")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["total"], 2);

        // Submit an outcome
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/user/comparisons")
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        r#"{"new_content_id": 1, "existing_content_id": 2, "preferred": "new"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_comparison_rejects_bad_preferred() {
        let app = create_test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/user/comparisons")
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        r#"{"new_content_id": 1, "existing_content_id": 2, "preferred": "both"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_create_list_and_add_in_one_call() {
        let app = create_test_app().await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/user/lists")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"name": "Must Watch", "content_id": 1}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["name"], "Must Watch");
        assert_eq!(body["content_count"], 1);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/user/lists")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["total"], 1);
    }

    #[tokio::test]
    async fn test_register_login_and_authed_request() {
        let app = create_test_app().await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/auth/register")
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        r#"{"username": "alice", "email": "alice@example.com", "password": "pw"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        let token = body["token"].as_str().unwrap().to_string();

        // Watched history under the token is independent of the guest's
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/user/watched")
                    .header("Content-Type", "application/json")
                    .header("Authorization", format!("Bearer {}", token))
                    .body(Body::from(r#"{"content_id": 1}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_follow_and_search_users() {
        let app = create_test_app().await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/auth/register")
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        r#"{"username": "bob", "display_name": "Bob", "email": "bob@example.com", "password": "pw"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        let bob_id = body_json(response).await["user"]["id"].as_u64().unwrap();

        // Guest follows bob
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/api/v1/users/{}/follow", bob_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/users/search?q=bob")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["total"], 1);
        assert_eq!(body["users"][0]["is_following"], true);
        assert_eq!(body["users"][0]["followers_count"], 1);
    }
}
