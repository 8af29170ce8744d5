// src/agent/mod.rs
// The agent catalog. One binary serves any of the five Cognitive Canvas
// agents; everything that distinguishes them lives in this module as static
// configuration.

mod prompts;

use clap::ValueEnum;

use crate::llm::GenerationParams;
use crate::persona::DEFAULT_BRAINSTORM_PROMPT;

/// How an agent returns its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMode {
    /// Chunked text/plain body, fragment by fragment
    Stream,
    /// Single {"response": ...} or {"error": ...} JSON object
    Json,
}

/// Wrapper applied to the user prompt before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserTemplate {
    Plain,
    /// "Business Idea: {prompt}"
    BusinessIdea,
    /// "The business idea is: '{prompt}'"
    QuotedBusinessIdea,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AgentKind {
    Brainstormer,
    Critic,
    Roadmap,
    PitchDeck,
    TaskBreakdown,
}

/// Static description of one agent deployment.
pub struct AgentDefinition {
    /// Display name used by the health probe
    pub name: &'static str,
    /// Alias route served in addition to /generate
    pub alias_route: &'static str,
    pub model: &'static str,
    /// Model identifier to use on the fallback provider, where configured
    pub fallback_model: Option<&'static str>,
    pub system_prompt: &'static str,
    pub params: GenerationParams,
    pub response_mode: ResponseMode,
    pub template: UserTemplate,
    /// Whether "[PERSONA: tag]" markers are honored
    pub personas: bool,
    /// Whether the relay appends anti-repetition variance to the prompt
    pub inject_variance: bool,
}

impl AgentKind {
    pub fn definition(&self) -> AgentDefinition {
        match self {
            AgentKind::Brainstormer => AgentDefinition {
                name: "Brainstormer Agent",
                alias_route: "/brainstorm",
                model: "meta-llama/llama-3.1-8b-instruct",
                fallback_model: None,
                system_prompt: DEFAULT_BRAINSTORM_PROMPT,
                params: GenerationParams::default(),
                response_mode: ResponseMode::Stream,
                template: UserTemplate::Plain,
                personas: true,
                inject_variance: true,
            },
            AgentKind::Critic => AgentDefinition {
                name: "Critic Agent",
                alias_route: "/criticize",
                model: "openai/gpt-oss-120b",
                fallback_model: None,
                system_prompt: prompts::CRITIC_PROMPT,
                params: GenerationParams::default(),
                response_mode: ResponseMode::Json,
                template: UserTemplate::BusinessIdea,
                personas: false,
                inject_variance: false,
            },
            AgentKind::Roadmap => AgentDefinition {
                name: "Roadmap Agent",
                alias_route: "/roadmap",
                model: "openai/gpt-oss-120b",
                fallback_model: None,
                system_prompt: prompts::ROADMAP_PROMPT,
                params: GenerationParams::default(),
                response_mode: ResponseMode::Json,
                template: UserTemplate::QuotedBusinessIdea,
                personas: false,
                inject_variance: false,
            },
            AgentKind::PitchDeck => AgentDefinition {
                name: "Pitch Deck Agent",
                alias_route: "/pitchdeck",
                model: "meta-llama/llama-3.3-70b-instruct",
                fallback_model: None,
                system_prompt: prompts::PITCH_DECK_PROMPT,
                params: GenerationParams {
                    temperature: Some(0.8),
                    max_tokens: Some(2000),
                    ..Default::default()
                },
                response_mode: ResponseMode::Stream,
                template: UserTemplate::Plain,
                personas: false,
                inject_variance: false,
            },
            AgentKind::TaskBreakdown => AgentDefinition {
                name: "Task Agent",
                alias_route: "/tasks",
                model: "openai/gpt-oss-120b",
                // Cerebras serves the same open-weights model under its own id
                fallback_model: Some("gpt-oss-120b"),
                system_prompt: prompts::TASK_BREAKDOWN_PROMPT,
                params: GenerationParams::default(),
                response_mode: ResponseMode::Stream,
                template: UserTemplate::Plain,
                personas: false,
                inject_variance: false,
            },
        }
    }
}

impl AgentDefinition {
    /// Apply the agent's wrapper to the (persona-stripped) user prompt.
    pub fn render_user_prompt(&self, prompt: &str) -> String {
        match self.template {
            UserTemplate::Plain => prompt.to_string(),
            UserTemplate::BusinessIdea => format!("Business Idea: {}", prompt),
            UserTemplate::QuotedBusinessIdea => {
                format!("The business idea is: '{}'", prompt)
            }
        }
    }
}
