//! WatchTracker CLI
//!
//! Demo walkthrough of the core workflows against an in-memory catalog.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use watchtracker::catalog::{seed, CatalogStore};
use watchtracker::discover::FilterCriteria;
use watchtracker::repository::{ContentRepository, MemoryRepository};
use watchtracker::workflow::{Choice, ListMembershipWorkflow, WatchedStateController};

#[derive(Parser)]
#[command(name = "watchtracker", version, about = "WatchTracker demo CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Walk through discover, watched marking, comparisons, and lists
    Demo,
    /// Print a default configuration file to stdout
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "watchtracker=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Demo) {
        Command::Demo => run_demo().await,
        Command::Config => {
            print!("{}", watchtracker::config::generate_default_config());
            Ok(())
        }
    }
}

async fn run_demo() -> Result<()> {
    tracing::info!("WatchTracker v{}", env!("CARGO_PKG_VERSION"));

    // Seed the in-memory catalog with demo content and a demo account
    let store = Arc::new(CatalogStore::new());
    let (account, _session) = seed::seed_demo(&store).await;
    tracing::info!(
        "Seeded {} content items for {}",
        store.content_count().await,
        account.username
    );

    let repository = Arc::new(MemoryRepository::new(Arc::clone(&store), account.id));

    demo_discover(&repository).await?;
    demo_watch_and_compare(&repository).await?;
    demo_lists(&repository).await?;
    demo_rankings(&store, account.id).await;

    tracing::info!("Demo complete");
    Ok(())
}

async fn demo_discover(repository: &Arc<MemoryRepository>) -> Result<()> {
    tracing::info!("Discovering highly-rated recent shows...");

    let criteria = FilterCriteria::default()
        .min_rating(4.5)
        .years(2023, 2024)
        .genre("Drama");

    let results = repository.discover(&criteria).await?;
    for item in &results {
        tracing::info!(
            "  {} ({}) - {:.1} on {}",
            item.title,
            item.year,
            item.rating,
            item.platforms.join(", ")
        );
    }

    Ok(())
}

async fn demo_watch_and_compare(repository: &Arc<MemoryRepository>) -> Result<()> {
    let trending = repository.trending().await?;
    anyhow::ensure!(trending.len() >= 4, "demo catalog too small");

    // Build up a watched history so later items have comparison candidates
    for item in trending.iter().take(3) {
        repository.mark_watched(item.id).await?;
        tracing::info!("Watched: {}", item.title);
    }

    // The next watch triggers a full comparison workflow
    let next = &trending[3];
    tracing::info!("Marking '{}' watched, comparing...", next.title);

    let mut controller =
        WatchedStateController::new(Arc::clone(repository), next.id, false);
    controller.toggle_watched().await?;

    let choices = [Choice::PreferNew, Choice::Skip, Choice::PreferExisting];
    let mut round = 0;
    while controller.has_open_workflow() {
        let candidate = controller
            .workflow_mut()
            .and_then(|w| w.current_candidate())
            .map(|c| c.title.clone())
            .unwrap_or_default();
        let choice = choices[round % choices.len()];
        tracing::info!("  Round {}: '{}' vs '{}'", round + 1, next.title, candidate);
        controller.resolve_round(choice).await?;
        round += 1;
    }

    tracing::info!(
        "'{}' is now watched: {}",
        next.title,
        controller.is_watched()
    );
    Ok(())
}

async fn demo_lists(repository: &Arc<MemoryRepository>) -> Result<()> {
    let trending = repository.trending().await?;
    let workflow = ListMembershipWorkflow::new(Arc::clone(repository));

    // Create a list with its first item in one operation
    workflow
        .add_to_list(trending[0].id, None, Some("Must Watch"))
        .await?;

    // Add another item to the list we just made
    let lists = workflow.available_lists().await?;
    workflow
        .add_to_list(trending[1].id, Some(lists[0].id), None)
        .await?;

    for list in repository.user_lists().await? {
        tracing::info!("List '{}' holds {} items", list.name, list.content_count);
    }
    Ok(())
}

async fn demo_rankings(store: &Arc<CatalogStore>, user_id: watchtracker::UserId) {
    tracing::info!("Watched rankings:");
    for (entry, item) in store.rankings(user_id).await {
        tracing::info!("  {:+6.1}  {}", entry.ranking_score, item.title);
    }
}
