//! Core domain types shared across the Courtside crates.
//!
//! Wire-facing types derive serde; field renames follow the HTTP contract
//! (camelCase team preferences, lowercase tags).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a turn in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "assistant" => Ok(Role::Assistant),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

/// A catalogued historical-moment clip reference.
///
/// Instances originate from the static catalog; the `key` is the stable
/// catalog identity used for deduplication and lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SportsClip {
    #[serde(rename = "clipId", default)]
    pub key: String,
    pub title: String,
    pub description: String,
    pub youtube_id: String,
    /// Optional start offset in seconds.
    pub timestamp: Option<u32>,
}

/// One exchange in a conversation log. Append-only; immutable once written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub id: Uuid,
    pub role: Role,
    pub content: String,
    #[serde(default)]
    pub clips: Vec<SportsClip>,
    pub created_at: DateTime<Utc>,
}

impl Turn {
    /// Build a user turn with no attachments.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::User,
            content: content.into(),
            clips: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Build an assistant turn with the given clip attachments.
    pub fn assistant(content: impl Into<String>, clips: Vec<SportsClip>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::Assistant,
            content: content.into(),
            clips,
            created_at: Utc::now(),
        }
    }
}

/// Why a news item might matter to a user.
///
/// Unrecognized wire values land on `Unknown` and are dropped by the news
/// filter rather than passed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsImportance {
    Playoff,
    Local,
    General,
    #[serde(other)]
    Unknown,
}

impl NewsImportance {
    pub fn as_str(&self) -> &'static str {
        match self {
            NewsImportance::Playoff => "playoff",
            NewsImportance::Local => "local",
            NewsImportance::General => "general",
            NewsImportance::Unknown => "unknown",
        }
    }
}

/// A sports news item produced by the feed collaborator.
///
/// Not persisted on its own; embedded into a turn only when attached to a
/// response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub description: String,
    pub team: String,
    pub sport: String,
    pub importance: NewsImportance,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub published: Option<String>,
}

/// A team the user follows. Owned by onboarding; read-only per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPreference {
    pub team_name: String,
    pub team_id: String,
    pub sport: String,
    pub league: String,
    #[serde(default)]
    pub is_local: bool,
}

/// User preferences: location plus followed teams.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreferences {
    pub location: String,
    #[serde(default)]
    pub teams: Vec<TeamPreference>,
}

/// Assembled prompt payload handed to the generation provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prompt {
    pub system: String,
    pub messages: Vec<PromptMessage>,
}

/// One role/content pair in the provider message list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptMessage {
    pub role: String,
    pub content: String,
}

impl PromptMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        assert_eq!(Role::User.as_str(), "user");
        assert_eq!(Role::Assistant.as_str(), "assistant");
        assert_eq!("user".parse::<Role>().unwrap(), Role::User);
        assert_eq!("assistant".parse::<Role>().unwrap(), Role::Assistant);
        assert!("system".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_serde_lowercase() {
        let json = serde_json::to_string(&Role::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
        let role: Role = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(role, Role::User);
    }

    #[test]
    fn test_clip_wire_shape() {
        let clip = SportsClip {
            key: "kawhi_bounce".to_string(),
            title: "Kawhi Leonard's Game 7 Buzzer Beater (2019)".to_string(),
            description: "Four bounces on the rim.".to_string(),
            youtube_id: "ChT3ewZXTfM".to_string(),
            timestamp: None,
        };
        let json = serde_json::to_value(&clip).unwrap();
        assert_eq!(json["clipId"], "kawhi_bounce");
        assert_eq!(json["youtubeId"], "ChT3ewZXTfM");
        assert!(json["timestamp"].is_null());
    }

    #[test]
    fn test_clip_deserialize_without_key() {
        let json = r#"{"title":"t","description":"d","youtubeId":"abc","timestamp":12}"#;
        let clip: SportsClip = serde_json::from_str(json).unwrap();
        assert_eq!(clip.key, "");
        assert_eq!(clip.timestamp, Some(12));
    }

    #[test]
    fn test_turn_constructors() {
        let user = Turn::user("hello");
        assert_eq!(user.role, Role::User);
        assert!(user.clips.is_empty());

        let clip = SportsClip {
            key: "k".into(),
            title: "t".into(),
            description: "d".into(),
            youtube_id: "y".into(),
            timestamp: None,
        };
        let assistant = Turn::assistant("hi", vec![clip]);
        assert_eq!(assistant.role, Role::Assistant);
        assert_eq!(assistant.clips.len(), 1);
        assert_ne!(user.id, assistant.id);
    }

    #[test]
    fn test_importance_known_values() {
        let playoff: NewsImportance = serde_json::from_str("\"playoff\"").unwrap();
        assert_eq!(playoff, NewsImportance::Playoff);
        let local: NewsImportance = serde_json::from_str("\"local\"").unwrap();
        assert_eq!(local, NewsImportance::Local);
        let general: NewsImportance = serde_json::from_str("\"general\"").unwrap();
        assert_eq!(general, NewsImportance::General);
    }

    #[test]
    fn test_importance_unrecognized_maps_to_unknown() {
        let odd: NewsImportance = serde_json::from_str("\"breaking\"").unwrap();
        assert_eq!(odd, NewsImportance::Unknown);
    }

    #[test]
    fn test_team_preference_camel_case_wire() {
        let json = r#"{"teamName":"Seattle Mariners","teamId":"12","sport":"baseball","league":"mlb","isLocal":true}"#;
        let team: TeamPreference = serde_json::from_str(json).unwrap();
        assert_eq!(team.team_name, "Seattle Mariners");
        assert_eq!(team.team_id, "12");
        assert!(team.is_local);

        let back = serde_json::to_value(&team).unwrap();
        assert_eq!(back["teamId"], "12");
        assert_eq!(back["isLocal"], true);
    }

    #[test]
    fn test_team_preference_is_local_defaults_false() {
        let json = r#"{"teamName":"n","teamId":"1","sport":"s","league":"l"}"#;
        let team: TeamPreference = serde_json::from_str(json).unwrap();
        assert!(!team.is_local);
    }

    #[test]
    fn test_news_item_round_trip() {
        let item = NewsItem {
            title: "Mariners clinch wildcard".to_string(),
            description: "First postseason berth in years.".to_string(),
            team: "Seattle Mariners".to_string(),
            sport: "baseball".to_string(),
            importance: NewsImportance::Playoff,
            link: None,
            published: Some("2024-10-01".to_string()),
        };
        let json = serde_json::to_string(&item).unwrap();
        let back: NewsItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back.importance, NewsImportance::Playoff);
        assert_eq!(back.team, item.team);
    }

    #[test]
    fn test_prompt_message_serializes_for_provider() {
        let prompt = Prompt {
            system: "be helpful".to_string(),
            messages: vec![PromptMessage::new("user", "hi")],
        };
        let json = serde_json::to_value(&prompt.messages).unwrap();
        assert_eq!(json[0]["role"], "user");
        assert_eq!(json[0]["content"], "hi");
    }
}
