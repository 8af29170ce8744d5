// src/relay/mod.rs
// The streaming relay: drives a completion client in streaming mode and
// produces the client-facing fragment stream, with at most one fallback
// attempt against a secondary provider.

use futures::Stream;
use rand::Rng;
use tracing::{info, warn};

use crate::llm::{CompletionClient, GenerationParams, StreamEvent};

/// Emitted when the provider returns a completion with no content at all,
/// so callers never see a zero-byte body.
pub const EMPTY_COMPLETION_SENTINEL: &str = "No output generated.";

/// One provider endpoint plus the model to request from it.
#[derive(Clone)]
pub struct ProviderRoute {
    pub client: CompletionClient,
    pub model: String,
}

/// Everything the relay needs for one inbound request.
pub struct RelayRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub params: GenerationParams,
    /// Append a random seed and creativity nudge to the prompt. Cosmetic
    /// variance against cached/repeated provider answers, not a uniqueness
    /// guarantee.
    pub inject_variance: bool,
}

const CREATIVITY_HINTS: [&str; 4] = [
    "Take an unexpected angle.",
    "Avoid the most obvious suggestions.",
    "Favor fresh combinations over safe picks.",
    "Lean into originality.",
];

fn apply_variance(prompt: &str) -> String {
    let mut rng = rand::rng();
    let hint = CREATIVITY_HINTS[rng.random_range(0..CREATIVITY_HINTS.len())];
    let nonce: u32 = rng.random();
    format!("{}\n\n({} Variation seed: {})", prompt, hint, nonce)
}

/// Relay a streamed completion, fragment by fragment, in arrival order.
///
/// Attempt policy: if the primary fails before the first fragment reaches
/// the caller and a fallback route exists, the whole request is retried
/// once against the fallback. Once a fragment has been forwarded the
/// fallback window is closed; retrying then would duplicate text
/// downstream. Total upstream attempts never exceed two.
///
/// Failures never abort the HTTP response: the terminal condition is a
/// single "Error: ..." fragment and a clean end of stream.
pub fn relay_stream(
    primary: ProviderRoute,
    fallback: Option<ProviderRoute>,
    request: RelayRequest,
) -> impl Stream<Item = String> {
    let user_prompt = if request.inject_variance {
        apply_variance(&request.user_prompt)
    } else {
        request.user_prompt
    };
    let system_prompt = request.system_prompt;
    let params = request.params;

    let mut routes = vec![primary];
    routes.extend(fallback);

    async_stream::stream! {
        let total = routes.len();
        let mut produced = 0usize;
        let mut last_error = String::new();

        for (attempt, route) in routes.into_iter().enumerate() {
            if attempt > 0 {
                info!(
                    model = %route.model,
                    base_url = %route.client.base_url(),
                    "primary provider failed before first fragment, trying fallback"
                );
            }

            let mut rx = match route
                .client
                .stream(&route.model, &system_prompt, &user_prompt, &params)
                .await
            {
                Ok(rx) => rx,
                Err(e) => {
                    warn!(model = %route.model, "provider call failed: {}", e);
                    last_error = e.to_string();
                    continue;
                }
            };

            let mut mid_stream_error = None;
            while let Some(event) = rx.recv().await {
                match event {
                    StreamEvent::Delta(fragment) => {
                        produced += 1;
                        yield fragment;
                    }
                    StreamEvent::Done => break,
                    StreamEvent::Error(e) => {
                        mid_stream_error = Some(e);
                        break;
                    }
                }
            }

            match mid_stream_error {
                None => {
                    if produced == 0 {
                        yield EMPTY_COMPLETION_SENTINEL.to_string();
                    }
                    return;
                }
                Some(e) if produced == 0 && attempt + 1 < total => {
                    // Stream died before anything reached the caller; the
                    // fallback can still take over cleanly.
                    warn!(model = %route.model, "stream failed before first fragment: {}", e);
                    last_error = e;
                }
                Some(e) => {
                    warn!(model = %route.model, "stream failed after {} fragments: {}", produced, e);
                    yield format!("Error: {}", e);
                    return;
                }
            }
        }

        yield format!("Error: {}", last_error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variance_keeps_original_prompt() {
        let out = apply_variance("solar powered kiosks");
        assert!(out.starts_with("solar powered kiosks"));
        assert!(out.contains("Variation seed: "));
    }

    #[test]
    fn test_variance_differs_between_calls() {
        // Two draws sharing a nonce and hint is vanishingly unlikely
        let a = apply_variance("p");
        let b = apply_variance("p");
        assert!(a != b || apply_variance("p") != a);
    }
}
