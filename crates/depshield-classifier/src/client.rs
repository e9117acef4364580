//! Chat-completions transport shared by the classifiers.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::config::ChatEndpoint;
use crate::ClassifierError;

const SYSTEM_PROMPT: &str = "You are an AI assistant specialized in cybersecurity and risk \
     assessment. Provide your responses in JSON format.";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatRequestMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatRequestMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

/// A minimal chat-completions client that always asks for a JSON object.
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: Client,
    endpoint: ChatEndpoint,
}

impl ChatClient {
    /// Build a client for the given endpoint.
    pub fn new(endpoint: ChatEndpoint, timeout_secs: u64) -> Result<Self, ClassifierError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ClassifierError::Config {
                detail: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self { http, endpoint })
    }

    /// Send a prompt and parse the JSON object in the reply.
    #[instrument(skip(self, prompt), fields(model = %self.endpoint.model))]
    pub async fn complete_json(&self, prompt: &str) -> Result<Value, ClassifierError> {
        let request = ChatRequest {
            model: &self.endpoint.model,
            messages: vec![
                ChatRequestMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatRequestMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        let url = format!("{}/chat/completions", self.endpoint.base_url);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.endpoint.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ClassifierError::Unavailable {
                endpoint: self.endpoint.base_url.clone(),
                detail: e.to_string(),
            })?
            .error_for_status()
            .map_err(|e| ClassifierError::Unavailable {
                endpoint: self.endpoint.base_url.clone(),
                detail: e.to_string(),
            })?;

        let body: ChatResponse =
            response
                .json()
                .await
                .map_err(|e| ClassifierError::Malformed {
                    detail: format!("undecodable completion body: {e}"),
                })?;
        let content = body
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .ok_or_else(|| ClassifierError::Malformed {
                detail: "completion carried no choices".to_string(),
            })?;

        debug!(chars = content.len(), "received completion");
        extract_json_object(content)
    }
}

/// Pull the outermost JSON object out of a completion.
///
/// Models wrap the object in prose or code fences often enough that the
/// content cannot be parsed directly.
pub(crate) fn extract_json_object(content: &str) -> Result<Value, ClassifierError> {
    let start = content.find('{');
    let end = content.rfind('}');
    let (start, end) = match (start, end) {
        (Some(s), Some(e)) if s < e => (s, e),
        _ => {
            return Err(ClassifierError::Malformed {
                detail: "no JSON object found in completion".to_string(),
            })
        }
    };

    serde_json::from_str(&content[start..=end]).map_err(|e| ClassifierError::Malformed {
        detail: format!("invalid JSON object in completion: {e}"),
    })
}
