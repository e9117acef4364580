//! Classifier configuration parsed from environment variables.

use std::env;

use crate::ClassifierError;

/// Default chat-completions endpoint for sensitivity classification.
pub const DEFAULT_CHAT_BASE_URL: &str = "https://api.openai.com/v1";
/// Default model for sensitivity classification.
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";
/// Default endpoint for the web-search-augmented research model.
pub const DEFAULT_RESEARCH_BASE_URL: &str = "https://api.perplexity.ai";
/// Default model for mitigation and heightened-risk assessment.
pub const DEFAULT_RESEARCH_MODEL: &str = "llama-3.1-sonar-small-128k-online";
/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// One chat-completions endpoint.
#[derive(Clone)]
pub struct ChatEndpoint {
    /// Base URL of the chat-completions API.
    pub base_url: String,
    /// Bearer token.
    pub api_key: String,
    /// Model identifier.
    pub model: String,
}

impl std::fmt::Debug for ChatEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatEndpoint")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .finish()
    }
}

/// Configuration for the AI-backed classifiers.
///
/// Sensitivity classification uses a plain chat model; mitigation and
/// heightened-risk assessment use a web-search-augmented model.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Endpoint for sensitivity classification.
    pub chat: ChatEndpoint,
    /// Endpoint for mitigation and heightened-risk assessment.
    pub research: ChatEndpoint,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl ClassifierConfig {
    /// Parse configuration from environment variables.
    ///
    /// Required: `DEPSHIELD_CHAT_API_KEY`, `DEPSHIELD_RESEARCH_API_KEY`.
    /// Optional overrides: `DEPSHIELD_CHAT_BASE_URL`, `DEPSHIELD_CHAT_MODEL`,
    /// `DEPSHIELD_RESEARCH_BASE_URL`, `DEPSHIELD_RESEARCH_MODEL`,
    /// `DEPSHIELD_CLASSIFIER_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ClassifierError> {
        let chat = ChatEndpoint {
            base_url: env_or("DEPSHIELD_CHAT_BASE_URL", DEFAULT_CHAT_BASE_URL),
            api_key: required_env("DEPSHIELD_CHAT_API_KEY")?,
            model: env_or("DEPSHIELD_CHAT_MODEL", DEFAULT_CHAT_MODEL),
        };
        let research = ChatEndpoint {
            base_url: env_or("DEPSHIELD_RESEARCH_BASE_URL", DEFAULT_RESEARCH_BASE_URL),
            api_key: required_env("DEPSHIELD_RESEARCH_API_KEY")?,
            model: env_or("DEPSHIELD_RESEARCH_MODEL", DEFAULT_RESEARCH_MODEL),
        };
        let timeout_secs = match env::var("DEPSHIELD_CLASSIFIER_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().map_err(|_| ClassifierError::Config {
                detail: format!(
                    "DEPSHIELD_CLASSIFIER_TIMEOUT_SECS must be a number of seconds, got '{raw}'"
                ),
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            chat,
            research,
            timeout_secs,
        })
    }
}

fn env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn required_env(name: &str) -> Result<String, ClassifierError> {
    env::var(name).map_err(|_| ClassifierError::Config {
        detail: format!("missing required environment variable {name}"),
    })
}
