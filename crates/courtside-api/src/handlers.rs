//! Route handlers and their request/response types.

use std::convert::Infallible;
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio_stream::StreamExt;
use tracing::{debug, info};

use courtside_chat::TurnRequest;
use courtside_core::types::{NewsItem, SportsClip, Turn, UserPreferences};
use courtside_news::{available_locations, default_teams_for_location, LocationInfo};

use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/chat/stream request body.
#[derive(Debug, Deserialize)]
pub struct ChatStreamRequest {
    pub message: String,
    pub user_id: String,
    #[serde(default)]
    pub preferences: Option<UserPreferences>,
}

/// POST /api/chat/stream - streamed conversation turn.
///
/// Emits one SSE `data:` line per turn event; the stream is finite and
/// terminates with a `done` or `error` event.
pub async fn chat_stream(
    State(state): State<AppState>,
    Json(request): Json<ChatStreamRequest>,
) -> Result<Sse<impl tokio_stream::Stream<Item = Result<Event, Infallible>> + Send>, ApiError> {
    info!(user_id = %request.user_id, "Chat stream request");
    let events = state.orchestrator.handle_turn(TurnRequest {
        user_id: request.user_id,
        message: request.message,
        preferences: request.preferences,
    })?;

    let stream = events.map(|event| {
        let data = serde_json::to_string(&event).unwrap_or_default();
        Ok(Event::default().data(data))
    });
    Ok(Sse::new(stream).keep_alive(KeepAlive::new().interval(Duration::from_secs(15))))
}

/// POST /api/chat/check-news response body.
#[derive(Debug, Serialize)]
pub struct CheckNewsResponse {
    pub should_notify: bool,
    pub news_count: usize,
    pub news_items: Vec<NewsItem>,
}

/// POST /api/chat/check-news - proactive news check.
pub async fn check_news(
    State(state): State<AppState>,
    Json(preferences): Json<UserPreferences>,
) -> Json<CheckNewsResponse> {
    let (should_notify, news_items) = state.news.check_proactive_news(&preferences).await;
    Json(CheckNewsResponse {
        should_notify,
        news_count: news_items.len(),
        news_items,
    })
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<usize>,
}

/// One history entry on the wire.
#[derive(Debug, Serialize)]
pub struct HistoryMessage {
    pub role: String,
    pub content: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub clips: Vec<SportsClip>,
    pub created_at: DateTime<Utc>,
}

impl From<Turn> for HistoryMessage {
    fn from(turn: Turn) -> Self {
        Self {
            role: turn.role.as_str().to_string(),
            content: turn.content,
            clips: turn.clips,
            created_at: turn.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub user_id: String,
    pub messages: Vec<HistoryMessage>,
    pub total: usize,
}

/// GET /api/chat/history/{user_id} - recent turns, oldest-first.
pub async fn get_history(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let limit = query.limit.unwrap_or(state.config.chat.history_limit);
    debug!(user_id = %user_id, limit, "History read");

    let turns = state.history.read(&user_id, limit)?;
    let messages: Vec<HistoryMessage> = turns.into_iter().map(HistoryMessage::from).collect();
    let total = messages.len();
    Ok(Json(HistoryResponse {
        user_id,
        messages,
        total,
    }))
}

#[derive(Debug, Serialize)]
pub struct ClearHistoryResponse {
    pub user_id: String,
    pub deleted_count: usize,
    pub status: String,
}

/// DELETE /api/chat/history/{user_id} - clear a user's log.
pub async fn clear_history(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ClearHistoryResponse>, ApiError> {
    info!(user_id = %user_id, "Clearing chat history");
    let deleted_count = state.history.clear(&user_id)?;
    Ok(Json(ClearHistoryResponse {
        user_id,
        deleted_count,
        status: "success".to_string(),
    }))
}

/// GET /api/onboarding/default-teams/{location}.
pub async fn default_teams(
    Path(location): Path<String>,
) -> Result<Json<UserPreferences>, ApiError> {
    let preferences = default_teams_for_location(&location);
    if preferences.teams.is_empty() {
        return Err(ApiError::NotFound(format!(
            "No default teams configured for location: {}",
            location
        )));
    }
    Ok(Json(preferences))
}

/// GET /api/onboarding/available-locations.
pub async fn list_locations() -> Json<Vec<LocationInfo>> {
    Json(available_locations())
}

#[derive(Debug, Serialize)]
pub struct SavePreferencesResponse {
    pub status: String,
    pub message: String,
    pub preferences: UserPreferences,
}

/// POST /api/onboarding/preferences - validate and echo.
pub async fn save_preferences(
    Json(preferences): Json<UserPreferences>,
) -> Result<Json<SavePreferencesResponse>, ApiError> {
    if preferences.location.trim().is_empty() {
        return Err(ApiError::BadRequest("location cannot be empty".to_string()));
    }
    if preferences
        .teams
        .iter()
        .any(|team| team.team_name.trim().is_empty() || team.league.trim().is_empty())
    {
        return Err(ApiError::BadRequest(
            "each team needs a name and a league".to_string(),
        ));
    }
    Ok(Json(SavePreferencesResponse {
        status: "success".to_string(),
        message: "Preferences saved successfully".to_string(),
        preferences,
    }))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

/// GET /health.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "courtside".to_string(),
    })
}
