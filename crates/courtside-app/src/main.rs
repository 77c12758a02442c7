//! Courtside application binary - composition root.
//!
//! Ties the crates together into a single executable:
//! 1. Load configuration from TOML
//! 2. Open the SQLite conversation log
//! 3. Build the news feed, generation provider, and orchestrator
//! 4. Start the axum API server

mod cli;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use courtside_api::{create_router, AppState};
use courtside_chat::ChatOrchestrator;
use courtside_core::config::CourtsideConfig;
use courtside_news::{EspnFeed, NewsService};
use courtside_provider::OpenRouterClient;
use courtside_storage::{Database, HistoryRepository};

use cli::CliArgs;

/// Expand a leading `~/` to the home directory.
fn resolve_data_dir(raw: &str) -> PathBuf {
    if let Some(rest) = raw.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(rest)
    } else {
        PathBuf::from(raw)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Tracing. RUST_LOG wins, then the --log-level flag.
    let default_level = args.log_level.clone().unwrap_or_else(|| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    tracing::info!("Starting Courtside v{}", env!("CARGO_PKG_VERSION"));

    // Config.
    let config_file = args.resolve_config_path();
    let config = CourtsideConfig::load_or_default(&config_file);
    tracing::info!(path = %config_file.display(), "Configuration loaded");

    // Storage.
    let data_dir = resolve_data_dir(
        &args
            .resolve_data_dir()
            .unwrap_or_else(|| config.general.data_dir.clone()),
    );
    std::fs::create_dir_all(&data_dir)?;
    let db_path = data_dir.join("courtside.db");
    let database = Arc::new(Database::new(&db_path)?);
    let history = Arc::new(HistoryRepository::new(database));
    tracing::info!(path = %db_path.display(), "Conversation log opened");

    // News feed.
    let feed = Arc::new(EspnFeed::new(&config.news)?);
    let news = Arc::new(NewsService::new(feed, config.news.max_items));

    // Generation provider. The environment variable overrides the file so
    // the key never has to live on disk.
    let mut provider_config = config.provider.clone();
    if let Ok(key) = std::env::var("COURTSIDE_API_KEY") {
        provider_config.api_key = key;
    }
    if provider_config.api_key.is_empty() {
        tracing::warn!("No provider API key configured; generation requests will fail");
    }
    let provider = Arc::new(OpenRouterClient::new(&provider_config)?);
    tracing::info!(model = %provider_config.model, "Generation provider ready");

    // Orchestrator and API.
    let orchestrator = ChatOrchestrator::new(
        provider,
        Arc::clone(&news),
        Arc::clone(&history),
        config.chat.clone(),
    );

    let port = args.resolve_port(config.general.port);
    let addr = format!("{}:{}", config.general.host, port);
    let state = AppState::new(config, orchestrator, news, history);
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "API server listening");
    axum::serve(listener, router).await?;

    Ok(())
}
