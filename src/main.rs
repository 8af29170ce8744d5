// src/main.rs

use std::sync::Arc;

use clap::Parser;
use tracing::info;

use canvas_agents::agent::AgentKind;
use canvas_agents::config::CONFIG;
use canvas_agents::llm::CompletionClient;
use canvas_agents::server::{self, AppState};

#[derive(Parser)]
#[command(name = "canvas-agent")]
#[command(about = "Run one Cognitive Canvas generation agent", long_about = None)]
struct Cli {
    /// Which agent to run
    #[arg(short, long, value_enum)]
    agent: AgentKind,

    /// Bind host (overrides AGENT_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides AGENT_PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt().init();
    }

    let definition = cli.agent.definition();
    info!("Starting {}", definition.name);
    info!("Model: {}", definition.model);

    anyhow::ensure!(
        !CONFIG.openrouter_api_key.is_empty(),
        "OPENROUTER_API_KEY not set"
    );

    let primary = CompletionClient::new(
        CONFIG.openrouter_base_url.clone(),
        CONFIG.openrouter_api_key.clone(),
        CONFIG.request_timeout(),
    );

    // The fallback client only exists where the agent can use it and a
    // credential is configured.
    let fallback = if definition.fallback_model.is_some() && CONFIG.has_fallback_provider() {
        info!("Fallback provider configured: {}", CONFIG.cerebras_base_url);
        Some(CompletionClient::new(
            CONFIG.cerebras_base_url.clone(),
            CONFIG.cerebras_api_key.clone(),
            CONFIG.request_timeout(),
        ))
    } else {
        None
    };

    let state = AppState {
        definition: Arc::new(definition),
        primary,
        fallback,
    };

    let bind_address = format!(
        "{}:{}",
        cli.host.as_deref().unwrap_or(&CONFIG.host),
        cli.port.unwrap_or(CONFIG.port)
    );

    server::run(state, &bind_address, &CONFIG.cors_origin).await
}
