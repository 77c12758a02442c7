use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{CourtsideError, Result};

/// Top-level configuration for the Courtside application.
///
/// Loaded from `~/.courtside/config.toml` by default. Each section covers one
/// collaborator or cross-cutting concern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourtsideConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub news: NewsConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

impl CourtsideConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: CourtsideConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| CourtsideError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Address to bind the HTTP server to.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// Data directory for the SQLite conversation log.
    pub data_dir: String,
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            data_dir: "~/.courtside/data".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Generation provider (OpenRouter-compatible) settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// API key. The COURTSIDE_API_KEY environment variable overrides this.
    pub api_key: String,
    /// Model identifier passed to the provider.
    pub model: String,
    /// Base URL of the chat-completions API.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "google/gemini-2.0-flash-exp:free".to_string(),
            base_url: "https://openrouter.ai/api/v1".to_string(),
            timeout_secs: 60,
        }
    }
}

/// Sports news feed settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsConfig {
    /// Base URL of the sports API.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Articles examined per league feed.
    pub articles_per_league: usize,
    /// Maximum important items surfaced per turn.
    pub max_items: usize,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://site.api.espn.com/apis/site/v2/sports".to_string(),
            timeout_secs: 30,
            articles_per_league: 5,
            max_items: 5,
        }
    }
}

/// Conversation orchestration settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Recent turns included as prompt context.
    pub context_turns: usize,
    /// Default history page size for reads.
    pub history_limit: usize,
    /// Maximum clip references attached to a single turn.
    pub max_clips_per_turn: usize,
    /// Maximum message length in characters.
    pub max_message_length: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            context_turns: 8,
            history_limit: 50,
            max_clips_per_turn: 2,
            max_message_length: 2000,
        }
    }
}
