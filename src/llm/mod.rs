// src/llm/mod.rs
// Completion client for OpenAI-compatible chat-completion providers.

mod client;
mod error;
mod sse;
mod types;

pub use client::{CompletionClient, StreamEvent};
pub use error::ProviderError;
pub use types::GenerationParams;
