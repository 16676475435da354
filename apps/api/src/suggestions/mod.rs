// Suggestion proxy: forwards a resume to a text-generation backend and relays
// the reply unmodified.

pub mod handlers;

use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

use crate::llm_client::prompts::{build_suggestion_prompt, SUGGESTION_SYSTEM};
use crate::llm_client::{LlmClient, LlmError};

/// Relayed when the backend answers without any text.
pub const NO_SUGGESTIONS: &str = "No suggestions.";

#[async_trait]
pub trait TextSuggester: Send + Sync {
    async fn suggest(&self, payload: &Value) -> Result<String, LlmError>;
}

#[async_trait]
impl TextSuggester for LlmClient {
    async fn suggest(&self, payload: &Value) -> Result<String, LlmError> {
        let prompt = build_suggestion_prompt(payload)?;
        let response = self.call(&prompt, SUGGESTION_SYSTEM).await?;
        let text = response
            .text()
            .filter(|t| !t.is_empty())
            .unwrap_or(NO_SUGGESTIONS);
        info!("Relaying {} bytes of suggestions", text.len());
        Ok(text.to_string())
    }
}
