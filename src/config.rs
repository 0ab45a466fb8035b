//! Configuration management for the research agent.
//!
//! Configuration can be set via environment variables:
//! - `OPENROUTER_API_KEY` - Required. API key for the chat-completions provider.
//! - `DEFAULT_MODEL` - Optional. Model identifier. Defaults to `google/gemini-2.0-flash-001`.
//! - `LLM_BASE_URL` - Optional. OpenAI-compatible base URL. Defaults to `https://openrouter.ai/api/v1`.
//! - `HOST` - Optional. Server host. Defaults to `127.0.0.1`.
//! - `PORT` - Optional. Server port. Defaults to `3000`.
//! - `RECURSION_LIMIT` - Optional. Maximum agent steps per run. Defaults to `25`.
//! - `TECH_TRENDS_API_URL` - Optional. Base URL of the research backend used by the tools.
//! - `TECH_TRENDS_API_KEY` - Optional. Bearer token for the research backend.

use thiserror::Error;

pub const DEFAULT_MODEL: &str = "google/gemini-2.0-flash-001";
pub const DEFAULT_LLM_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_RECURSION_LIMIT: usize = 25;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Research backend configuration (shared by both tools).
#[derive(Debug, Clone, Default)]
pub struct ToolsConfig {
    /// Base URL of the trends/sources backend
    pub api_url: Option<String>,

    /// Optional bearer token
    pub api_key: Option<String>,
}

impl ToolsConfig {
    /// Whether the research backend is configured.
    pub fn is_enabled(&self) -> bool {
        self.api_url.is_some()
    }
}

/// Agent configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Chat-completions API key
    pub api_key: String,

    /// LLM model identifier (OpenRouter format)
    pub default_model: String,

    /// OpenAI-compatible base URL
    pub llm_base_url: String,

    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Maximum agent steps per workflow run
    pub recursion_limit: usize,

    /// Research tools configuration
    pub tools: ToolsConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` if `OPENROUTER_API_KEY` is not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("OPENROUTER_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("OPENROUTER_API_KEY".to_string()))?;

        let default_model =
            std::env::var("DEFAULT_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let llm_base_url =
            std::env::var("LLM_BASE_URL").unwrap_or_else(|_| DEFAULT_LLM_BASE_URL.to_string());

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = parse_var("PORT", "3000")?;
        let recursion_limit = parse_var("RECURSION_LIMIT", "25")?;
        if recursion_limit == 0 {
            return Err(ConfigError::InvalidValue(
                "RECURSION_LIMIT".to_string(),
                "must be at least 1".to_string(),
            ));
        }

        let tools = ToolsConfig {
            api_url: non_empty_var("TECH_TRENDS_API_URL"),
            api_key: non_empty_var("TECH_TRENDS_API_KEY"),
        };

        Ok(Self {
            api_key,
            default_model,
            llm_base_url,
            host,
            port,
            recursion_limit,
            tools,
        })
    }

    /// Create a config with custom values (useful for testing).
    pub fn new(api_key: String, default_model: String) -> Self {
        Self {
            api_key,
            default_model,
            llm_base_url: DEFAULT_LLM_BASE_URL.to_string(),
            host: "127.0.0.1".to_string(),
            port: 3000,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            tools: ToolsConfig::default(),
        }
    }
}

fn parse_var<T>(name: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    std::env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidValue(name.to_string(), format!("{}", e)))
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
