// src/config/mod.rs
// All runtime configuration comes from the environment (.env supported).

use once_cell::sync::Lazy;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AgentConfig {
    // ── Primary provider (OpenRouter)
    pub openrouter_base_url: String,
    pub openrouter_api_key: String,

    // ── Fallback provider (Cerebras; used by the task-breakdown agent)
    pub cerebras_base_url: String,
    pub cerebras_api_key: String,

    // ── Server Configuration
    pub host: String,
    pub port: u16,

    // ── CORS Settings ("*" keeps the prototype's allow-everything behavior)
    pub cors_origin: String,

    // ── Timeouts (in seconds)
    pub request_timeout: u64,

    // ── Logging Configuration
    pub log_level: String,
}

// Handles values with trailing comments and extra whitespace.
fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        Err(_) => default,
    }
}

impl AgentConfig {
    pub fn from_env() -> Self {
        if dotenvy::dotenv().is_err() {
            eprintln!("Warning: .env file not found. Using environment variables and defaults.");
        }

        Self {
            openrouter_base_url: env_var_or(
                "OPENROUTER_BASE_URL",
                "https://openrouter.ai/api/v1".to_string(),
            ),
            openrouter_api_key: env_var_or("OPENROUTER_API_KEY", String::new()),
            cerebras_base_url: env_var_or(
                "CEREBRAS_BASE_URL",
                "https://api.cerebras.ai/v1".to_string(),
            ),
            cerebras_api_key: env_var_or("CEREBRAS_API_KEY", String::new()),
            host: env_var_or("AGENT_HOST", "0.0.0.0".to_string()),
            port: env_var_or("AGENT_PORT", 8000),
            cors_origin: env_var_or("AGENT_CORS_ORIGIN", "*".to_string()),
            request_timeout: env_var_or("AGENT_REQUEST_TIMEOUT_SECS", 60),
            log_level: env_var_or("AGENT_LOG_LEVEL", "info".to_string()),
        }
    }

    /// Get server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Total upstream request timeout
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// Whether a fallback provider credential is configured
    pub fn has_fallback_provider(&self) -> bool {
        !self.cerebras_api_key.is_empty()
    }
}

// Global config instance - loaded once at startup
pub static CONFIG: Lazy<AgentConfig> = Lazy::new(AgentConfig::from_env);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = AgentConfig::from_env();

        assert!(config.openrouter_base_url.starts_with("https://"));
        assert_eq!(config.request_timeout().as_secs(), config.request_timeout);
        assert!(config.port > 0);
    }

    #[test]
    fn test_bind_address() {
        let config = AgentConfig::from_env();
        assert!(config.bind_address().contains(':'));
    }

    #[test]
    fn test_env_var_or_rejects_garbage() {
        // SAFETY: test-local env mutation, no concurrent readers of this key
        unsafe { std::env::set_var("CANVAS_TEST_PORT", "not-a-number") };
        let port: u16 = env_var_or("CANVAS_TEST_PORT", 1234);
        assert_eq!(port, 1234);

        unsafe { std::env::set_var("CANVAS_TEST_PORT", "8080 # board frontend") };
        let port: u16 = env_var_or("CANVAS_TEST_PORT", 1234);
        assert_eq!(port, 8080);
        unsafe { std::env::remove_var("CANVAS_TEST_PORT") };
    }
}
