// tests/test_helpers.rs
// In-process stub of an OpenAI-compatible chat-completion provider, plus
// AppState construction for router tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};

use canvas_agents::agent::AgentKind;
use canvas_agents::llm::CompletionClient;
use canvas_agents::server::AppState;

/// What the stub does when /chat/completions is hit.
#[derive(Clone)]
pub enum StubMode {
    /// SSE stream emitting these fragments, then [DONE]
    StreamFragments(Vec<&'static str>),
    /// SSE stream that ends immediately with [DONE]
    StreamEmpty,
    /// SSE stream emitting these fragments, then aborting the connection
    StreamThenAbort(Vec<&'static str>),
    /// Non-streaming JSON completion with this content
    JsonCompletion(&'static str),
    /// HTTP 500 with a plain error body
    Status500,
}

#[derive(Clone)]
struct StubState {
    mode: StubMode,
    hits: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<Value>>>,
}

/// Handle on a running stub provider.
pub struct StubProvider {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl StubProvider {
    /// Number of completion calls the stub received
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Request bodies the stub received, in order
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

fn sse_fragment(content: &str) -> String {
    format!(
        "data: {}\n\n",
        json!({"choices": [{"delta": {"content": content}}]})
    )
}

async fn completions_handler(State(state): State<StubState>, Json(body): Json<Value>) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    state.requests.lock().unwrap().push(body);

    match &state.mode {
        StubMode::StreamFragments(fragments) => {
            let mut sse = String::new();
            for fragment in fragments {
                sse.push_str(&sse_fragment(fragment));
            }
            sse.push_str("data: [DONE]\n\n");
            (
                [(header::CONTENT_TYPE, "text/event-stream")],
                Body::from(sse),
            )
                .into_response()
        }
        StubMode::StreamEmpty => (
            [(header::CONTENT_TYPE, "text/event-stream")],
            Body::from("data: [DONE]\n\n".to_string()),
        )
            .into_response(),
        StubMode::StreamThenAbort(fragments) => {
            // Pace the chunks so each fragment is flushed to the socket
            // before the abort tears the connection down; an all-ready
            // stream would let hyper drop the fragments with the error.
            let fragments = fragments.clone();
            let stream = async_stream::stream! {
                for fragment in fragments {
                    yield Ok::<String, std::io::Error>(sse_fragment(fragment));
                    tokio::time::sleep(Duration::from_millis(50)).await;
                }
                yield Err(std::io::Error::other("connection reset by stub"));
            };
            (
                [(header::CONTENT_TYPE, "text/event-stream")],
                Body::from_stream(stream),
            )
                .into_response()
        }
        StubMode::JsonCompletion(content) => Json(json!({
            "id": "stub-completion",
            "choices": [{"message": {"role": "assistant", "content": content}}],
        }))
        .into_response(),
        StubMode::Status500 => {
            (StatusCode::INTERNAL_SERVER_ERROR, "stub provider exploded").into_response()
        }
    }
}

/// Spawn a stub provider on an ephemeral port.
pub async fn spawn_stub(mode: StubMode) -> StubProvider {
    let hits = Arc::new(AtomicUsize::new(0));
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        mode,
        hits: hits.clone(),
        requests: requests.clone(),
    };

    let app = Router::new()
        .route("/chat/completions", post(completions_handler))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    StubProvider {
        base_url: format!("http://{}", addr),
        hits,
        requests,
    }
}

/// AppState for `kind` pointed at a stub primary (and optional stub fallback).
pub fn test_app_state(
    kind: AgentKind,
    primary: &StubProvider,
    fallback: Option<&StubProvider>,
) -> AppState {
    let timeout = Duration::from_secs(5);
    AppState {
        definition: Arc::new(kind.definition()),
        primary: CompletionClient::new(primary.base_url.clone(), "test-key", timeout),
        fallback: fallback
            .map(|f| CompletionClient::new(f.base_url.clone(), "test-key-2", timeout)),
    }
}
