//! Generation provider: the trait seam for token streaming plus the
//! OpenRouter-compatible HTTP client and a scripted mock for tests.
//!
//! A provider turns an assembled prompt into an ordered stream of text
//! tokens. Failures before the first token surface as an error return;
//! failures mid-stream arrive as an `Err` item on the stream itself.

use std::pin::Pin;

use async_trait::async_trait;
use futures::Stream;

use courtside_core::types::Prompt;

pub mod mock;
pub mod openrouter;

pub use mock::MockProvider;
pub use openrouter::OpenRouterClient;

/// Ordered token stream from a generation provider.
pub type TokenStream = Pin<Box<dyn Stream<Item = Result<String, ProviderError>> + Send>>;

/// Errors from the generation provider collaborator.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    #[error("provider rate limited")]
    RateLimited,
    #[error("provider authentication failed")]
    AuthFailed,
    #[error("provider unavailable: {0}")]
    Unavailable(String),
    #[error("provider stream malformed: {0}")]
    Malformed(String),
}

/// Streaming text generation backend.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Start a completion for the prompt and return its token stream.
    async fn stream_completion(&self, prompt: &Prompt) -> Result<TokenStream, ProviderError>;
}
