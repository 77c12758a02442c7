//! Application state shared across all route handlers.

use std::sync::Arc;

use courtside_chat::ChatOrchestrator;
use courtside_core::config::CourtsideConfig;
use courtside_news::NewsService;
use courtside_storage::HistoryRepository;

/// Shared application state.
///
/// All fields use `Arc` for cheap cloning across handler tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<CourtsideConfig>,
    /// Conversation orchestrator driving streamed turns.
    pub orchestrator: Arc<ChatOrchestrator>,
    /// News aggregation for the proactive check endpoint.
    pub news: Arc<NewsService>,
    /// Conversation log for history reads and clears.
    pub history: Arc<HistoryRepository>,
}

impl AppState {
    pub fn new(
        config: CourtsideConfig,
        orchestrator: ChatOrchestrator,
        news: Arc<NewsService>,
        history: Arc<HistoryRepository>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            orchestrator: Arc::new(orchestrator),
            news,
            history,
        }
    }
}
