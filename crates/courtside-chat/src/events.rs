//! Streamed turn events and their wire shape.

use serde::Serialize;

use courtside_core::types::SportsClip;
use courtside_provider::ProviderError;

use crate::error::ErrorKind;

/// One event in a streamed conversation turn.
///
/// Serialized with a lowercase `type` tag; a turn is a finite sequence
/// `start, (clip|token)*, (done|error)`. The error kind is carried for
/// logging and HTTP mapping but never serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TurnEvent {
    Start,
    Token {
        content: String,
    },
    Clip {
        clip: SportsClip,
    },
    Done,
    Error {
        content: String,
        #[serde(skip)]
        kind: ErrorKind,
    },
}

impl TurnEvent {
    pub fn token(content: impl Into<String>) -> Self {
        TurnEvent::Token {
            content: content.into(),
        }
    }

    /// Terminal error event for a provider failure, with an actionable
    /// user-facing message per failure class.
    pub fn provider_error(error: &ProviderError) -> Self {
        let (kind, content) = match error {
            ProviderError::RateLimited => (
                ErrorKind::ProviderRateLimited,
                "Rate limit exceeded. The free tier has limited requests. \
                 Please wait a moment and try again.",
            ),
            ProviderError::AuthFailed => (
                ErrorKind::ProviderAuthError,
                "API authentication failed. Please check your API key.",
            ),
            ProviderError::Unavailable(_) | ProviderError::Malformed(_) => (
                ErrorKind::ProviderUnavailable,
                "Network error. Please check your connection and try again.",
            ),
        };
        TurnEvent::Error {
            content: content.to_string(),
            kind,
        }
    }
}
