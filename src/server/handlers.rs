//! Request handlers: health probe and the generate endpoint.

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use futures::StreamExt;
use serde::Deserialize;
use serde_json::{json, Value};
use std::convert::Infallible;
use tracing::info;

use super::AppState;
use crate::agent::ResponseMode;
use crate::persona::extract_persona;
use crate::relay::{relay_stream, ProviderRoute, RelayRequest};

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
}

/// Health check and status endpoint
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "agent": state.definition.name,
        "message": "Agent is running",
    }))
}

/// Terminate the request: resolve the system prompt (persona dispatch where
/// supported), then hand off to the relay or the blocking completion call.
///
/// Provider failures keep status 200 and surface in the body - streamed as
/// an "Error: ..." fragment, JSON as {"error": ...}. Existing board
/// frontends inspect body content, not status codes.
pub async fn generate_handler(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Response {
    if request.prompt.trim().is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"error": "prompt must not be empty"})),
        )
            .into_response();
    }

    let def = &state.definition;

    // Persona dispatch. An unrecognized or unterminated marker means the
    // whole original prompt is used as-is under the default system prompt.
    let (system_prompt, effective_prompt) = if def.personas {
        match extract_persona(&request.prompt) {
            (Some(persona), stripped) => {
                info!(persona = %persona, "persona marker matched");
                (persona.prompt(), stripped.to_string())
            }
            (None, _) => (def.system_prompt, request.prompt.clone()),
        }
    } else {
        (def.system_prompt, request.prompt.clone())
    };

    let user_prompt = def.render_user_prompt(&effective_prompt);

    match def.response_mode {
        ResponseMode::Json => {
            match state
                .primary
                .complete(def.model, system_prompt, &user_prompt, &def.params)
                .await
            {
                Ok(text) => Json(json!({"response": text})).into_response(),
                Err(e) => Json(json!({"error": e.to_string()})).into_response(),
            }
        }
        ResponseMode::Stream => {
            let primary = ProviderRoute {
                client: state.primary.clone(),
                model: def.model.to_string(),
            };
            let fallback = match (&state.fallback, def.fallback_model) {
                (Some(client), Some(model)) => Some(ProviderRoute {
                    client: client.clone(),
                    model: model.to_string(),
                }),
                _ => None,
            };
            let relay_request = RelayRequest {
                system_prompt: system_prompt.to_string(),
                user_prompt,
                params: def.params.clone(),
                inject_variance: def.inject_variance,
            };

            let body_stream = relay_stream(primary, fallback, relay_request)
                .map(|fragment| Ok::<Bytes, Infallible>(Bytes::from(fragment)));

            (
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                Body::from_stream(body_stream),
            )
                .into_response()
        }
    }
}
