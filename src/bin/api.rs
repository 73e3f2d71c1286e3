//! WatchTracker API Server
//!
//! Run with: cargo run --bin watchtracker-api
//!
//! # Configuration
//!
//! Environment variables:
//! - `WATCHTRACKER_HOST`: Host to bind to (default: 0.0.0.0)
//! - `WATCHTRACKER_PORT`: Port to listen on (default: 8086)
//! - `WATCHTRACKER_SEED_DEMO`: Seed the demo catalog on startup (default: true)
//! - `RUST_LOG`: Log level (default: info)

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use watchtracker::api::{serve, ApiConfig, AppState};
use watchtracker::catalog::{seed, CatalogStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "watchtracker=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Starting WatchTracker API server v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Load configuration from environment
    let api_config = load_api_config();

    // Initialize the catalog store
    let store = Arc::new(CatalogStore::new());

    let guest = if seed_enabled() {
        let (account, _session) = seed::seed_demo(&store).await;
        tracing::info!(
            "Seeded demo catalog: {} items, guest account '{}'",
            store.content_count().await,
            account.username
        );
        account.id
    } else {
        let (account, _session) = store
            .register("guest", "Guest", "guest@watchtracker.local", "guest")
            .await?;
        tracing::info!("Created empty catalog with guest account");
        account.id
    };

    let state = AppState::new(Arc::clone(&store), api_config.clone(), guest);

    // Run server
    tracing::info!("Starting server on {}:{}", api_config.host, api_config.port);
    serve(state, &api_config).await?;

    tracing::info!("WatchTracker API server stopped");
    Ok(())
}

/// Load API configuration from environment
fn load_api_config() -> ApiConfig {
    let host = std::env::var("WATCHTRACKER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

    let port = std::env::var("WATCHTRACKER_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8086);

    ApiConfig {
        host,
        port,
        ..Default::default()
    }
}

/// Whether to seed the demo catalog on startup
fn seed_enabled() -> bool {
    std::env::var("WATCHTRACKER_SEED_DEMO")
        .map(|s| s.to_lowercase() != "false" && s != "0")
        .unwrap_or(true)
}
