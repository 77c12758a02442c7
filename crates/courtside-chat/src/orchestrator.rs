//! Conversation orchestrator: turns one user message into an event stream.
//!
//! Each accepted turn runs on its own spawned task feeding an mpsc channel;
//! the returned stream is finite and one-shot. A dropped receiver (client
//! disconnect) makes sends fail, which stops the provider stream and commits
//! whatever was generated so far.

use std::collections::HashSet;
use std::sync::Arc;

use futures::StreamExt;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tracing::{debug, info, warn};

use courtside_core::config::ChatConfig;
use courtside_core::types::{SportsClip, Turn, UserPreferences};
use courtside_news::{default_teams_for_location, NewsService};
use courtside_provider::GenerationProvider;
use courtside_storage::HistoryRepository;

use crate::error::{ChatError, ErrorKind};
use crate::events::TurnEvent;
use crate::intent::is_news_request;
use crate::prompt::{self, Persona};

/// Reply streamed when a news request finds nothing notable.
const NO_NEWS_REPLY: &str = "There's no major news right now for your teams. \
    All quiet on the sports front! Check back later or ask me anything about \
    sports history and lore.";

/// One incoming chat turn.
#[derive(Debug, Clone)]
pub struct TurnRequest {
    pub user_id: String,
    pub message: String,
    /// Omitted preferences fall back to the default location's teams.
    pub preferences: Option<UserPreferences>,
}

/// Central coordinator wiring catalog, news, provider, and store.
pub struct ChatOrchestrator {
    provider: Arc<dyn GenerationProvider>,
    news: Arc<NewsService>,
    history: Arc<HistoryRepository>,
    config: ChatConfig,
}

impl ChatOrchestrator {
    pub fn new(
        provider: Arc<dyn GenerationProvider>,
        news: Arc<NewsService>,
        history: Arc<HistoryRepository>,
        config: ChatConfig,
    ) -> Self {
        Self {
            provider,
            news,
            history,
            config,
        }
    }

    /// Validate and start one turn.
    ///
    /// Malformed requests are rejected here, before any event is emitted or
    /// anything is persisted. The stream always begins with `Start` and ends
    /// with exactly one of `Done` or `Error`.
    pub fn handle_turn(&self, request: TurnRequest) -> Result<ReceiverStream<TurnEvent>, ChatError> {
        let message = request.message.trim().to_string();
        if message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if message.chars().count() > self.config.max_message_length {
            return Err(ChatError::MessageTooLong(self.config.max_message_length));
        }
        let user_id = request.user_id.trim().to_string();
        if user_id.is_empty() {
            return Err(ChatError::EmptyUserId);
        }

        let preferences = request
            .preferences
            .unwrap_or_else(|| default_teams_for_location("Seattle"));

        info!(user_id = %user_id, "Chat turn accepted");

        let (tx, rx) = mpsc::channel(32);
        let worker = TurnWorker {
            provider: Arc::clone(&self.provider),
            news: Arc::clone(&self.news),
            history: Arc::clone(&self.history),
            config: self.config.clone(),
            user_id,
            message,
            preferences,
            tx,
        };
        tokio::spawn(worker.run());
        Ok(ReceiverStream::new(rx))
    }
}

/// State for one in-flight turn.
struct TurnWorker {
    provider: Arc<dyn GenerationProvider>,
    news: Arc<NewsService>,
    history: Arc<HistoryRepository>,
    config: ChatConfig,
    user_id: String,
    message: String,
    preferences: UserPreferences,
    tx: mpsc::Sender<TurnEvent>,
}

impl TurnWorker {
    async fn run(self) {
        if self.tx.send(TurnEvent::Start).await.is_err() {
            return;
        }

        // Read the context window before appending the new turn; a read
        // failure degrades to an empty window.
        let history = match self.history.read(&self.user_id, self.config.context_turns) {
            Ok(turns) => turns,
            Err(e) => {
                warn!(user_id = %self.user_id, error = %e, "History read failed; using empty context");
                Vec::new()
            }
        };

        // The user turn is committed up front so the log survives any later
        // failure; an assistant-less entry is the accepted worst case.
        if let Err(e) = self.history.append(&self.user_id, &Turn::user(&self.message)) {
            warn!(
                user_id = %self.user_id,
                kind = ?ErrorKind::StoreWriteFailure,
                error = %e,
                "Failed to persist user turn"
            );
        }

        let clips = self.matched_clips();
        let persona = if is_news_request(&self.message) {
            Persona::News
        } else {
            Persona::Lore
        };
        debug!(user_id = %self.user_id, ?persona, clips = clips.len(), "Turn classified");

        let prompt = match persona {
            Persona::News => {
                let news = self.news.important_news(&self.preferences).await;
                if news.is_empty() {
                    self.stream_canned(NO_NEWS_REPLY).await;
                    return;
                }
                prompt::assemble(Persona::News, &self.message, &history, &clips, &news)
            }
            Persona::Lore => prompt::assemble(Persona::Lore, &self.message, &history, &clips, &[]),
        };

        // Clip references go out before the first token so the client can
        // render them while text streams.
        for clip in &clips {
            let event = TurnEvent::Clip { clip: clip.clone() };
            if self.tx.send(event).await.is_err() {
                return;
            }
        }

        let mut stream = match self.provider.stream_completion(&prompt).await {
            Ok(stream) => stream,
            Err(e) => {
                warn!(user_id = %self.user_id, error = %e, "Provider refused the completion");
                let _ = self.tx.send(TurnEvent::provider_error(&e)).await;
                return;
            }
        };

        let mut response = String::new();
        while let Some(item) = stream.next().await {
            match item {
                Ok(token) => {
                    response.push_str(&token);
                    if self.tx.send(TurnEvent::token(token)).await.is_err() {
                        // Receiver gone: stop pulling tokens and keep what
                        // was generated so far.
                        debug!(user_id = %self.user_id, "Client disconnected mid-stream");
                        self.commit_assistant_turn(&response, clips);
                        return;
                    }
                }
                Err(e) => {
                    warn!(user_id = %self.user_id, error = %e, "Provider stream failed");
                    let _ = self.tx.send(TurnEvent::provider_error(&e)).await;
                    return;
                }
            }
        }

        self.commit_assistant_turn(&response, clips);
        let _ = self.tx.send(TurnEvent::Done).await;
    }

    /// Catalog matches for the message, deduplicated and capped.
    fn matched_clips(&self) -> Vec<SportsClip> {
        let mut seen = HashSet::new();
        let mut clips: Vec<SportsClip> = courtside_catalog::search(&self.message)
            .into_iter()
            .filter(|clip| seen.insert(clip.key.clone()))
            .collect();
        clips.truncate(self.config.max_clips_per_turn);
        clips
    }

    /// Stream a fixed reply word-by-word, persist it, and finish the turn.
    async fn stream_canned(&self, content: &str) {
        let words: Vec<&str> = content.split_whitespace().collect();
        for (i, word) in words.iter().enumerate() {
            let token = if i == words.len() - 1 {
                (*word).to_string()
            } else {
                format!("{} ", word)
            };
            if self.tx.send(TurnEvent::token(token)).await.is_err() {
                self.commit_assistant_turn(content, Vec::new());
                return;
            }
        }
        self.commit_assistant_turn(content, Vec::new());
        let _ = self.tx.send(TurnEvent::Done).await;
    }

    /// Persist the assistant turn; write failure is logged, never fatal.
    fn commit_assistant_turn(&self, content: &str, clips: Vec<SportsClip>) {
        if content.is_empty() {
            return;
        }
        let turn = Turn::assistant(content, clips);
        if let Err(e) = self.history.append(&self.user_id, &turn) {
            warn!(
                user_id = %self.user_id,
                kind = ?ErrorKind::StoreWriteFailure,
                error = %e,
                "Failed to persist assistant turn"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use courtside_core::types::{NewsImportance, NewsItem, Role, TeamPreference};
    use courtside_news::StaticFeed;
    use courtside_provider::{MockProvider, ProviderError};
    use courtside_storage::Database;

    fn build(
        provider: Arc<MockProvider>,
        feed: StaticFeed,
    ) -> (ChatOrchestrator, Arc<HistoryRepository>) {
        let history = Arc::new(HistoryRepository::new(Arc::new(
            Database::in_memory().unwrap(),
        )));
        let news = Arc::new(NewsService::new(Arc::new(feed), 5));
        let orchestrator = ChatOrchestrator::new(
            provider,
            news,
            Arc::clone(&history),
            ChatConfig::default(),
        );
        (orchestrator, history)
    }

    fn request(message: &str) -> TurnRequest {
        TurnRequest {
            user_id: "alice".to_string(),
            message: message.to_string(),
            preferences: None,
        }
    }

    fn mariners_fan() -> UserPreferences {
        UserPreferences {
            location: "Seattle".to_string(),
            teams: vec![
                TeamPreference {
                    team_name: "Seattle Mariners".to_string(),
                    team_id: "12".to_string(),
                    sport: "baseball".to_string(),
                    league: "mlb".to_string(),
                    is_local: true,
                },
                TeamPreference {
                    team_name: "New York Yankees".to_string(),
                    team_id: "10".to_string(),
                    sport: "baseball".to_string(),
                    league: "mlb".to_string(),
                    is_local: false,
                },
            ],
        }
    }

    fn local_item(team: &str, title: &str) -> NewsItem {
        NewsItem {
            title: title.to_string(),
            description: "details".to_string(),
            team: team.to_string(),
            sport: "baseball".to_string(),
            importance: NewsImportance::Local,
            link: None,
            published: None,
        }
    }

    async fn drain(mut stream: ReceiverStream<TurnEvent>) -> Vec<TurnEvent> {
        let mut events = Vec::new();
        while let Some(event) = stream.next().await {
            events.push(event);
        }
        events
    }

    #[tokio::test]
    async fn test_lore_turn_emits_clips_before_tokens() {
        let provider = Arc::new(MockProvider::new(vec!["It ", "bounced ", "four times."]));
        let (orchestrator, history) = build(Arc::clone(&provider), StaticFeed::default());

        let stream = orchestrator
            .handle_turn(request("tell me about kawhi leonard's bounce"))
            .unwrap();
        let events = drain(stream).await;

        assert_eq!(events[0], TurnEvent::Start);
        assert_eq!(*events.last().unwrap(), TurnEvent::Done);

        let clip_at = events
            .iter()
            .position(|e| matches!(e, TurnEvent::Clip { .. }))
            .unwrap();
        let first_token_at = events
            .iter()
            .position(|e| matches!(e, TurnEvent::Token { .. }))
            .unwrap();
        assert!(clip_at < first_token_at);

        let turns = history.read("alice", 10).unwrap();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].role, Role::User);
        assert_eq!(turns[1].role, Role::Assistant);
        assert_eq!(turns[1].content, "It bounced four times.");
        assert_eq!(turns[1].clips[0].key, "kawhi_bounce");
    }

    #[tokio::test]
    async fn test_news_turn_grounds_only_on_followed_local_teams() {
        let provider = Arc::new(MockProvider::new(vec!["Summary."]));
        let feed = StaticFeed::new(vec![
            local_item("Seattle Mariners", "Mariners call up prospect"),
            local_item("New York Yankees", "Yankees shuffle rotation"),
        ]);
        let (orchestrator, _history) = build(Arc::clone(&provider), feed);

        let stream = orchestrator
            .handle_turn(TurnRequest {
                user_id: "alice".to_string(),
                message: "any news today?".to_string(),
                preferences: Some(mariners_fan()),
            })
            .unwrap();
        let events = drain(stream).await;
        assert_eq!(*events.last().unwrap(), TurnEvent::Done);

        let prompt = provider.last_prompt().unwrap();
        let content = &prompt.messages.last().unwrap().content;
        assert!(content.contains("Mariners call up prospect"));
        assert!(!content.contains("Yankees"));
    }

    #[tokio::test]
    async fn test_no_news_streams_canned_reply() {
        let provider = Arc::new(MockProvider::new(vec!["never used"]));
        let (orchestrator, history) = build(Arc::clone(&provider), StaticFeed::default());

        let stream = orchestrator.handle_turn(request("what's new?")).unwrap();
        let events = drain(stream).await;

        assert_eq!(events[0], TurnEvent::Start);
        assert_eq!(*events.last().unwrap(), TurnEvent::Done);
        let text: String = events
            .iter()
            .filter_map(|e| match e {
                TurnEvent::Token { content } => Some(content.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(text, NO_NEWS_REPLY);

        // The provider is never consulted on the canned path.
        assert!(provider.last_prompt().is_none());
        let turns = history.read("alice", 10).unwrap();
        assert_eq!(turns[1].content, NO_NEWS_REPLY);
    }

    #[tokio::test]
    async fn test_rate_limit_midstream_keeps_user_turn_only() {
        let provider = Arc::new(MockProvider::failing_after_with(
            vec!["a", "b", "c"],
            2,
            ProviderError::RateLimited,
        ));
        let (orchestrator, history) = build(provider, StaticFeed::default());

        let stream = orchestrator
            .handle_turn(request("who is michael jordan?"))
            .unwrap();
        let events = drain(stream).await;

        match events.last().unwrap() {
            TurnEvent::Error { content, kind } => {
                assert!(content.contains("Rate limit"));
                assert_eq!(*kind, ErrorKind::ProviderRateLimited);
            }
            other => panic!("expected terminal error, got {:?}", other),
        }
        assert!(!events.contains(&TurnEvent::Done));

        let turns = history.read("alice", 10).unwrap();
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].role, Role::User);
    }

    #[tokio::test]
    async fn test_provider_unavailable_before_first_token() {
        let provider = Arc::new(MockProvider::unavailable());
        let (orchestrator, history) = build(provider, StaticFeed::default());

        let stream = orchestrator.handle_turn(request("who is lebron?")).unwrap();
        let events = drain(stream).await;

        match events.last().unwrap() {
            TurnEvent::Error { content, kind } => {
                assert!(content.contains("Network error"));
                assert_eq!(*kind, ErrorKind::ProviderUnavailable);
            }
            other => panic!("expected terminal error, got {:?}", other),
        }
        assert_eq!(history.count("alice").unwrap(), 1);
    }

    #[tokio::test]
    async fn test_malformed_requests_rejected_before_any_effect() {
        let provider = Arc::new(MockProvider::new(vec!["x"]));
        let (orchestrator, history) = build(provider, StaticFeed::default());

        assert!(matches!(
            orchestrator.handle_turn(request("   ")),
            Err(ChatError::EmptyMessage)
        ));
        assert!(matches!(
            orchestrator.handle_turn(TurnRequest {
                user_id: "  ".to_string(),
                message: "hello".to_string(),
                preferences: None,
            }),
            Err(ChatError::EmptyUserId)
        ));
        let long = "x".repeat(ChatConfig::default().max_message_length + 1);
        assert!(matches!(
            orchestrator.handle_turn(request(&long)),
            Err(ChatError::MessageTooLong(_))
        ));

        assert_eq!(history.count("alice").unwrap(), 0);
    }

    #[tokio::test]
    async fn test_concurrent_turns_for_one_user_persist_all_records() {
        let provider = Arc::new(MockProvider::new(vec!["reply"]));
        let (orchestrator, history) = build(provider, StaticFeed::default());

        let first = orchestrator.handle_turn(request("who is lebron?")).unwrap();
        let second = orchestrator
            .handle_turn(request("explain the malice at the palace"))
            .unwrap();
        let (a, b) = tokio::join!(drain(first), drain(second));

        assert_eq!(*a.last().unwrap(), TurnEvent::Done);
        assert_eq!(*b.last().unwrap(), TurnEvent::Done);
        assert_eq!(history.count("alice").unwrap(), 4);
    }

    #[tokio::test]
    async fn test_disconnect_midstream_commits_partial_turn() {
        let tokens: Vec<&str> = std::iter::repeat("x ").take(64).collect();
        let provider = Arc::new(MockProvider::new(tokens));
        let (orchestrator, history) = build(provider, StaticFeed::default());

        let mut stream = orchestrator
            .handle_turn(request("tell me something interesting"))
            .unwrap();
        assert_eq!(stream.next().await.unwrap(), TurnEvent::Start);
        assert!(matches!(
            stream.next().await.unwrap(),
            TurnEvent::Token { .. }
        ));
        drop(stream);

        // Wait for the worker to notice the closed channel and commit.
        let mut turns = Vec::new();
        for _ in 0..100 {
            turns = history.read("alice", 10).unwrap();
            if turns.len() == 2 {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[1].role, Role::Assistant);
        assert!(!turns[1].content.is_empty());
        // Partial: fewer than the full 64 tokens made it in.
        assert!(turns[1].content.len() < 64 * 2);
    }
}
