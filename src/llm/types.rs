//! OpenAI-compatible Chat Completions wire types.
//!
//! Only the fields the agents actually touch; everything else the provider
//! sends is ignored by serde.

use serde::{Deserialize, Serialize};

/// Per-agent sampling parameters, fixed at deploy time.
///
/// Fields left unset are omitted from the request body so the provider
/// applies its own defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f32>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub stream: bool,
    #[serde(flatten)]
    pub params: GenerationParams,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatChoice {
    pub message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponseMessage {
    pub content: Option<String>,
}

// Streaming types

#[derive(Debug, Deserialize)]
pub(crate) struct ChatStreamChunk {
    pub choices: Vec<ChatStreamChoice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatStreamChoice {
    pub delta: ChatStreamDelta,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatStreamDelta {
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_params_are_omitted() {
        let body = ChatCompletionRequest {
            model: "meta-llama/llama-3.1-8b-instruct".into(),
            messages: vec![ChatMessage {
                role: "user",
                content: "hi".into(),
            }],
            stream: true,
            params: GenerationParams::default(),
        };

        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("temperature").is_none());
        assert!(json.get("max_tokens").is_none());
        assert_eq!(json["stream"], true);
    }

    #[test]
    fn test_set_params_are_flattened() {
        let body = ChatCompletionRequest {
            model: "m".into(),
            messages: vec![],
            stream: false,
            params: GenerationParams {
                temperature: Some(0.5),
                max_tokens: Some(2000),
                ..Default::default()
            },
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["temperature"], 0.5);
        assert_eq!(json["max_tokens"], 2000);
        assert!(json.get("params").is_none());
    }

    #[test]
    fn test_stream_chunk_parses_missing_content() {
        let chunk: ChatStreamChunk =
            serde_json::from_str(r#"{"choices":[{"delta":{"role":"assistant"}}]}"#).unwrap();
        assert!(chunk.choices[0].delta.content.is_none());
    }
}
