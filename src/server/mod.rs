// src/server/mod.rs
// HTTP surface for one agent:
// - GET  /           - health probe
// - POST /generate   - generate a completion (streamed or JSON per agent)
// - POST <alias>     - agent-specific alias for /generate

mod handlers;

use anyhow::Result;
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::agent::AgentDefinition;
use crate::llm::CompletionClient;

/// Process-scoped immutable state shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub definition: Arc<AgentDefinition>,
    pub primary: CompletionClient,
    pub fallback: Option<CompletionClient>,
}

/// Create the router with all endpoints.
///
/// `cors_origin` of "*" keeps the prototype's allow-everything CORS;
/// anything else narrows to that single origin.
pub fn create_router(state: AppState, cors_origin: &str) -> Router {
    let cors = if cors_origin == "*" {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origin = cors_origin
            .parse::<HeaderValue>()
            .unwrap_or_else(|_| HeaderValue::from_static("http://localhost:3000"));
        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let alias = state.definition.alias_route;

    Router::new()
        .route("/", get(handlers::health_handler))
        .route("/generate", post(handlers::generate_handler))
        .route(alias, post(handlers::generate_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the HTTP server until shutdown.
pub async fn run(state: AppState, bind_address: &str, cors_origin: &str) -> Result<()> {
    let agent = state.definition.name;
    let app = create_router(state, cors_origin);

    let listener = tokio::net::TcpListener::bind(bind_address).await?;
    info!("{} listening on http://{}", agent, bind_address);

    axum::serve(listener, app).await?;
    Ok(())
}
