use super::models::{AiError, CompletionRequest, CompletionResponse, JOKE_PROMPT};
use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
pub trait AiProvider: Send + Sync {
    /// Posts a completion request and returns the raw response body.
    ///
    /// Implementations must map transport errors, non-2xx statuses and
    /// timeouts to `AiError::ServiceUnavailable`. Parsing the body is left to
    /// `AiService` so every provider agrees on what "malformed" means.
    async fn complete(
        &self,
        request: &CompletionRequest,
        timeout: Duration,
    ) -> Result<String, AiError>;
}

// Blanket implementation for Box<dyn AiProvider> so the service can hold a
// trait object when the concrete client is chosen at runtime.
#[async_trait]
impl AiProvider for Box<dyn AiProvider> {
    async fn complete(
        &self,
        request: &CompletionRequest,
        timeout: Duration,
    ) -> Result<String, AiError> {
        (**self).complete(request, timeout).await
    }
}

pub struct AiService<P: AiProvider> {
    provider: P,
    timeout: Duration,
}

impl<P: AiProvider> AiService<P> {
    pub fn new(provider: P, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    /// Asks a single question using the configured timeout.
    pub async fn ask(&self, prompt: &str) -> Result<String, AiError> {
        self.ask_within(prompt, self.timeout).await
    }

    /// Asks a single question, waiting at most `timeout` for the endpoint.
    ///
    /// The reply text is returned verbatim. Failures are logged here and
    /// handed back to the caller as values; nothing in this path panics.
    pub async fn ask_within(&self, prompt: &str, timeout: Duration) -> Result<String, AiError> {
        if prompt.trim().is_empty() {
            return Err(AiError::EmptyPrompt);
        }

        let request = CompletionRequest::single(prompt);
        let body = match self.provider.complete(&request, timeout).await {
            Ok(body) => body,
            Err(err) => {
                tracing::warn!("AI request failed: {}", err);
                return Err(err);
            }
        };

        parse_completion(&body)
    }

    #[allow(dead_code)] // the joke command asks for a "funny" one directly
    pub async fn tell_joke(&self) -> Result<String, AiError> {
        self.ask(JOKE_PROMPT).await
    }

    #[cfg(test)]
    pub(crate) fn provider(&self) -> &P {
        &self.provider
    }
}

/// Pulls `choices[0].message.content` out of a completion response body.
pub fn parse_completion(body: &str) -> Result<String, AiError> {
    let malformed = || AiError::MalformedResponse {
        raw_body: body.to_string(),
    };

    let response: CompletionResponse = serde_json::from_str(body).map_err(|_| malformed())?;

    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or_else(malformed)
}
