use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Prompt used by `AiService::tell_joke`.
pub const JOKE_PROMPT: &str = "Tell me a joke";

/// How long we wait on the completion endpoint before giving up.
pub const DEFAULT_AI_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiMessage {
    pub role: String,
    pub content: String,
}

impl AiMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body sent to the completion endpoint.
///
/// Serializes to `{"messages": [{"role": "user", "content": "..."}]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub messages: Vec<AiMessage>,
}

impl CompletionRequest {
    /// A request carrying exactly one user message.
    pub fn single(prompt: &str) -> Self {
        Self {
            messages: vec![AiMessage::user(prompt)],
        }
    }
}

// The subset of the completion response we care about:
// `{"choices": [{"message": {"content": "..."}}]}`. Anything else in the
// body is ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct CompletionResponse {
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CompletionChoice {
    pub message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CompletionMessage {
    pub content: String,
}

#[derive(Debug, Error)]
pub enum AiError {
    /// Transport failure, non-2xx status or timeout.
    #[error("AI service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The endpoint answered but the body had an unexpected shape.
    #[error("Malformed response from AI service")]
    MalformedResponse { raw_body: String },

    #[error("Prompt must not be empty")]
    EmptyPrompt,
}
