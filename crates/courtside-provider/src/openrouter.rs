//! OpenRouter-compatible streaming chat-completions client.

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tracing::{debug, warn};

use courtside_core::config::ProviderConfig;
use courtside_core::types::Prompt;

use crate::{GenerationProvider, ProviderError, TokenStream};

/// HTTP client for an OpenRouter-style `/chat/completions` endpoint with
/// `stream: true` server-sent events.
pub struct OpenRouterClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenRouterClient {
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ProviderError::Unavailable(e.to_string()))?;
        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn request_body(&self, prompt: &Prompt) -> Value {
        let mut messages = vec![json!({"role": "system", "content": prompt.system})];
        for message in &prompt.messages {
            messages.push(json!({"role": message.role, "content": message.content}));
        }
        json!({
            "model": self.model,
            "messages": messages,
            "stream": true,
        })
    }
}

#[async_trait]
impl GenerationProvider for OpenRouterClient {
    async fn stream_completion(&self, prompt: &Prompt) -> Result<TokenStream, ProviderError> {
        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(prompt))
            .send()
            .await
            .map_err(|e| ProviderError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_to_error(status));
        }
        debug!(model = %self.model, "Completion stream opened");

        let mut bytes = response.bytes_stream();
        let (tx, rx) = mpsc::channel::<Result<String, ProviderError>>(32);

        // The receiver being dropped (client disconnect) makes sends fail,
        // which stops this task and the underlying HTTP stream.
        tokio::spawn(async move {
            let mut buffer = String::new();
            while let Some(chunk) = bytes.next().await {
                let chunk = match chunk {
                    Ok(chunk) => chunk,
                    Err(e) => {
                        warn!(error = %e, "Completion stream broke mid-response");
                        let _ = tx.send(Err(ProviderError::Unavailable(e.to_string()))).await;
                        return;
                    }
                };
                buffer.push_str(&String::from_utf8_lossy(&chunk));
                while let Some(newline) = buffer.find('\n') {
                    let line = buffer[..newline].trim_end_matches('\r').to_string();
                    buffer.drain(..=newline);
                    match parse_sse_line(&line) {
                        SseLine::Token(token) => {
                            if tx.send(Ok(token)).await.is_err() {
                                return;
                            }
                        }
                        SseLine::Done => return,
                        SseLine::Ignored => {}
                    }
                }
            }
        });

        Ok(Box::pin(ReceiverStream::new(rx)))
    }
}

/// Map a non-success completion response status to a provider error.
pub fn status_to_error(status: StatusCode) -> ProviderError {
    match status {
        StatusCode::TOO_MANY_REQUESTS => ProviderError::RateLimited,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ProviderError::AuthFailed,
        other => ProviderError::Unavailable(format!("status {}", other)),
    }
}

/// One parsed line of the event stream.
#[derive(Debug, PartialEq, Eq)]
pub enum SseLine {
    Token(String),
    Done,
    Ignored,
}

/// Parse one `data:` line of a streaming completions response.
///
/// Non-data lines, comments, heartbeats, and chunks without delta content
/// are ignored; the `[DONE]` sentinel terminates the stream.
pub fn parse_sse_line(line: &str) -> SseLine {
    let Some(data) = line.strip_prefix("data:") else {
        return SseLine::Ignored;
    };
    let data = data.trim();
    if data == "[DONE]" {
        return SseLine::Done;
    }
    let value: Value = match serde_json::from_str(data) {
        Ok(value) => value,
        Err(_) => return SseLine::Ignored,
    };
    match value
        .pointer("/choices/0/delta/content")
        .and_then(Value::as_str)
    {
        Some(token) if !token.is_empty() => SseLine::Token(token.to_string()),
        _ => SseLine::Ignored,
    }
}
