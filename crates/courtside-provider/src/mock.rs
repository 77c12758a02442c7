//! Scripted provider for orchestrator and endpoint tests.

use std::sync::Mutex;

use async_trait::async_trait;
use tokio_stream::wrappers::ReceiverStream;

use courtside_core::types::Prompt;

use crate::{GenerationProvider, ProviderError, TokenStream};

/// A provider that replays a fixed token script.
///
/// Records the last prompt it was asked to complete so tests can assert on
/// prompt assembly. Can be configured to fail before the first token or
/// after a given number of tokens.
pub struct MockProvider {
    tokens: Vec<String>,
    fail_after: Option<(usize, ProviderError)>,
    startup_error: Option<ProviderError>,
    last_prompt: Mutex<Option<Prompt>>,
}

impl MockProvider {
    pub fn new(tokens: Vec<&str>) -> Self {
        Self {
            tokens: tokens.into_iter().map(str::to_string).collect(),
            fail_after: None,
            startup_error: None,
            last_prompt: Mutex::new(None),
        }
    }

    /// Emit the first `count` tokens, then an in-stream error.
    pub fn failing_after(tokens: Vec<&str>, count: usize) -> Self {
        Self::failing_after_with(
            tokens,
            count,
            ProviderError::Unavailable("mock dropped".to_string()),
        )
    }

    /// Emit the first `count` tokens, then the given in-stream error.
    pub fn failing_after_with(tokens: Vec<&str>, count: usize, error: ProviderError) -> Self {
        Self {
            fail_after: Some((count, error)),
            ..Self::new(tokens)
        }
    }

    /// Fail before emitting anything.
    pub fn unavailable() -> Self {
        Self {
            startup_error: Some(ProviderError::Unavailable("mock offline".to_string())),
            ..Self::new(Vec::new())
        }
    }

    /// The prompt from the most recent `stream_completion` call.
    pub fn last_prompt(&self) -> Option<Prompt> {
        self.last_prompt.lock().ok().and_then(|guard| guard.clone())
    }
}

#[async_trait]
impl GenerationProvider for MockProvider {
    async fn stream_completion(&self, prompt: &Prompt) -> Result<TokenStream, ProviderError> {
        if let Ok(mut guard) = self.last_prompt.lock() {
            *guard = Some(prompt.clone());
        }
        if let Some(error) = &self.startup_error {
            return Err(error.clone());
        }

        let tokens = self.tokens.clone();
        let fail_after = self.fail_after.clone();
        let (tx, rx) = tokio::sync::mpsc::channel(32);
        tokio::spawn(async move {
            for (index, token) in tokens.into_iter().enumerate() {
                if let Some((count, error)) = &fail_after {
                    if *count == index {
                        let _ = tx.send(Err(error.clone())).await;
                        return;
                    }
                }
                if tx.send(Ok(token)).await.is_err() {
                    return;
                }
            }
            if let Some((_, error)) = fail_after {
                let _ = tx.send(Err(error)).await;
            }
        });
        Ok(Box::pin(ReceiverStream::new(rx)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    fn prompt() -> Prompt {
        Prompt {
            system: "s".to_string(),
            messages: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_replays_tokens_in_order() {
        let provider = MockProvider::new(vec!["The ", "shot ", "bounced."]);
        let mut stream = provider.stream_completion(&prompt()).await.unwrap();

        let mut collected = String::new();
        while let Some(token) = stream.next().await {
            collected.push_str(&token.unwrap());
        }
        assert_eq!(collected, "The shot bounced.");
        assert!(provider.last_prompt().is_some());
    }

    #[tokio::test]
    async fn test_fails_after_count() {
        let provider = MockProvider::failing_after(vec!["a", "b", "c"], 2);
        let mut stream = provider.stream_completion(&prompt()).await.unwrap();

        assert_eq!(stream.next().await.unwrap().unwrap(), "a");
        assert_eq!(stream.next().await.unwrap().unwrap(), "b");
        assert!(stream.next().await.unwrap().is_err());
    }

    #[tokio::test]
    async fn test_unavailable_fails_before_streaming() {
        let provider = MockProvider::unavailable();
        let result = provider.stream_completion(&prompt()).await;
        assert!(matches!(result, Err(ProviderError::Unavailable(_))));
    }
}
