use crate::core::ai::{AiError, AiProvider, CompletionRequest};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_COMPLETION_URL: &str = "https://ai.hackclub.com/chat/completions";

/// Plain chat-completions client. No auth header; the endpoint is open.
pub struct CompletionClient {
    client: Client,
    endpoint: String,
}

impl CompletionClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl AiProvider for CompletionClient {
    async fn complete(
        &self,
        request: &CompletionRequest,
        timeout: Duration,
    ) -> Result<String, AiError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(request)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| AiError::ServiceUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AiError::ServiceUnavailable(format!(
                "completion endpoint returned {} - {}",
                status, text
            )));
        }

        response
            .text()
            .await
            .map_err(|e| AiError::ServiceUnavailable(e.to_string()))
    }
}
