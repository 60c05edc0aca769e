// Portfolio chat assistant.
// Answers visitor questions from a fixed biography via llm_client and never
// fails outright: missing credentials and API errors both degrade to fixed text.

pub mod fallback;
pub mod prompts;

use tracing::warn;

use crate::llm_client::{LlmClient, LlmError, LlmResponse};
use fallback::fallback_response;
use prompts::{EMPTY_COMPLETION_RESPONSE, SYSTEM_PROMPT, UNAVAILABLE_RESPONSE};

#[derive(Clone)]
pub struct Assistant {
    /// `None` when no credential is configured; no request is ever built then.
    llm: Option<LlmClient>,
}

impl Assistant {
    pub fn new(llm: Option<LlmClient>) -> Self {
        Self { llm }
    }

    /// Builds the assistant from an optional credential.
    pub fn from_credentials(api_key: Option<String>, api_base: &str) -> Self {
        Self::new(api_key.map(|key| LlmClient::new(key, api_base)))
    }

    pub fn is_available(&self) -> bool {
        self.llm.is_some()
    }

    /// Produces an answer for `message`.
    pub async fn generate_response(&self, message: &str) -> String {
        let Some(llm) = &self.llm else {
            return UNAVAILABLE_RESPONSE.to_string();
        };

        answer_from(llm.call(message, SYSTEM_PROMPT).await, message)
    }
}

/// Maps a completion outcome to the text shown to the visitor.
fn answer_from(outcome: Result<LlmResponse, LlmError>, message: &str) -> String {
    match outcome {
        Ok(response) => response
            .text()
            .unwrap_or(EMPTY_COMPLETION_RESPONSE)
            .to_string(),
        Err(e) => {
            warn!("Chat completion failed, using fallback answer: {e}");
            fallback_response(message).to_string()
        }
    }
}
