//! Completion client for OpenAI-compatible chat-completion endpoints.
//!
//! One client per provider, built once at startup and shared across all
//! requests. Each call opens exactly one outbound connection; there is no
//! retry or caching at this layer.

use futures::StreamExt;
use reqwest::Client as HttpClient;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::error::ProviderError;
use super::sse::SseDecoder;
use super::types::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ChatStreamChunk, GenerationParams,
};

/// Events emitted while a streamed completion is in flight.
#[derive(Debug, Clone)]
pub enum StreamEvent {
    /// Incremental text fragment, in provider emission order
    Delta(String),
    /// Stream finished cleanly
    Done,
    /// Transport or decode failure mid-stream
    Error(String),
}

/// Immutable handle on one chat-completion provider.
#[derive(Clone)]
pub struct CompletionClient {
    client: HttpClient,
    base_url: String,
    api_key: String,
}

impl CompletionClient {
    /// `timeout` bounds the whole request, headers through last body byte.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, timeout: Duration) -> Self {
        let client = HttpClient::builder()
            .timeout(timeout)
            .build()
            .expect("HTTP client construction failed");
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    fn build_messages(system_prompt: &str, user_prompt: &str) -> Vec<ChatMessage> {
        vec![
            ChatMessage {
                role: "system",
                content: system_prompt.to_string(),
            },
            ChatMessage {
                role: "user",
                content: user_prompt.to_string(),
            },
        ]
    }

    async fn send(
        &self,
        body: &ChatCompletionRequest,
    ) -> Result<reqwest::Response, ProviderError> {
        let response = self
            .client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("(failed to read body: {})", e));
            return Err(ProviderError::Status { status, body });
        }

        Ok(response)
    }

    /// Blocking (awaited) completion: returns the full answer text.
    pub async fn complete(
        &self,
        model: &str,
        system_prompt: &str,
        user_prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, ProviderError> {
        let body = ChatCompletionRequest {
            model: model.to_string(),
            messages: Self::build_messages(system_prompt, user_prompt),
            stream: false,
            params: params.clone(),
        };

        debug!(model, url = %self.completions_url(), "completion request");

        let response = self.send(&body).await?;
        let result: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

        let content = result
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .ok_or_else(|| ProviderError::MalformedResponse("no content in choices".into()))?;

        Ok(content)
    }

    /// Streaming completion: lazy, finite, non-restartable sequence of
    /// text fragments.
    ///
    /// Fails fast on connection/status errors (before any fragment); later
    /// transport failures arrive as a terminal [`StreamEvent::Error`].
    /// Dropping the receiver aborts the decode task and closes the upstream
    /// connection.
    pub async fn stream(
        &self,
        model: &str,
        system_prompt: &str,
        user_prompt: &str,
        params: &GenerationParams,
    ) -> Result<mpsc::Receiver<StreamEvent>, ProviderError> {
        let body = ChatCompletionRequest {
            model: model.to_string(),
            messages: Self::build_messages(system_prompt, user_prompt),
            stream: true,
            params: params.clone(),
        };

        debug!(model, url = %self.completions_url(), "streaming completion request");

        let response = self.send(&body).await?;

        let (tx, rx) = mpsc::channel(100);
        tokio::spawn(Self::process_sse_stream(response, tx));

        Ok(rx)
    }

    /// Decode the SSE body into stream events.
    ///
    /// A failed send means the receiver is gone (caller disconnected); the
    /// loop exits, dropping the response and with it the upstream socket.
    async fn process_sse_stream(response: reqwest::Response, tx: mpsc::Sender<StreamEvent>) {
        let mut stream = response.bytes_stream();
        let mut decoder = SseDecoder::new();
        let mut done = false;

        'outer: while let Some(chunk) = stream.next().await {
            let chunk = match chunk {
                Ok(c) => c,
                Err(e) => {
                    warn!("SSE transport error: {}", e);
                    let _ = tx.send(StreamEvent::Error(e.to_string())).await;
                    return;
                }
            };

            for frame in decoder.push(&chunk) {
                if frame.is_done() {
                    done = true;
                    break 'outer;
                }

                let chunk_data: ChatStreamChunk = match frame.try_parse() {
                    Some(c) => c,
                    None => continue,
                };

                for choice in chunk_data.choices {
                    if let Some(content) = choice.delta.content {
                        if !content.is_empty()
                            && tx.send(StreamEvent::Delta(content)).await.is_err()
                        {
                            debug!("stream receiver dropped, abandoning upstream read");
                            return;
                        }
                    }
                }
            }
        }

        if !done {
            debug!("stream ended without [DONE] sentinel");
        }
        let _ = tx.send(StreamEvent::Done).await;
    }
}
