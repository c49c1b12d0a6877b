mod types;

pub use types::*;

use crate::{
    Error, Result,
    config::LlmConfig,
    llm::{ChatCompletionRequest, ChatMessage, LlmClient, OpenAiClient},
    report,
};
use tracing::{debug, error, info};

/// Sends checklists to the completion endpoint and interprets the verdict.
pub struct Validator {
    llm_client: Box<dyn LlmClient>,
    system_prompt: String,
    temperature: f32,
}

impl Validator {
    pub fn new(llm_config: &LlmConfig) -> Result<Self> {
        let llm_client = Box::new(OpenAiClient::new(llm_config)?);

        info!(
            "Validator initialized with model {} at {}",
            llm_config.model, llm_config.base_url
        );

        Ok(Self::with_client(
            llm_client,
            llm_config.system_prompt(),
            llm_config.temperature,
        ))
    }

    pub fn with_client(
        llm_client: Box<dyn LlmClient>,
        system_prompt: impl Into<String>,
        temperature: f32,
    ) -> Self {
        Self {
            llm_client,
            system_prompt: system_prompt.into(),
            temperature,
        }
    }

    pub fn build_request(&self, checklist_text: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            messages: vec![
                ChatMessage::system(self.system_prompt.clone()),
                ChatMessage::user(checklist_text),
            ],
            temperature: Some(self.temperature),
        }
    }

    /// One completion call; returns the first reply's text, trimmed.
    pub async fn request_reply(&self, checklist_text: &str) -> Result<String> {
        let request = self.build_request(checklist_text);

        debug!(
            "Requesting compliance verdict for {} chars of checklist text",
            checklist_text.chars().count()
        );

        let response = self.llm_client.create_chat_completion(request).await?;

        if let Some(usage) = &response.usage {
            debug!(
                "Completion {} used {} tokens",
                response.id, usage.total_tokens
            );
        }

        response
            .first_content()
            .map(|content| content.trim().to_string())
            .ok_or_else(|| Error::llm("Completion response contained no choices"))
    }

    pub async fn validate(&self, checklist_text: &str) -> ValidationOutcome {
        let reply = self.request_reply(checklist_text).await.map_err(|e| {
            error!("Completion request failed: {}", e);
            ValidationFailure::from(e)
        })?;

        report::parse_reply(&reply)
    }
}
