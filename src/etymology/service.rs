use super::{normalize::strip_code_fences, prompt::build_prompt};
use crate::{
    Error, Result,
    llm::{CompletionRequest, LlmClient},
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error};

/// Turns a word into the model's JSON breakdown. Holds no per-request state.
#[derive(Clone)]
pub struct EtymologyService {
    llm: Arc<dyn LlmClient>,
    temperature: Option<f32>,
}

impl EtymologyService {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self {
            llm,
            temperature: None,
        }
    }

    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    /// Asks the model about `word` and parses its reply. The parsed value is
    /// returned as-is; its shape is not checked beyond being JSON.
    pub async fn lookup(&self, word: &str) -> Result<Value> {
        let request = CompletionRequest::new(build_prompt(word)).with_temperature(self.temperature);

        let response = self.llm.create_completion(request).await?;
        debug!(
            "Model {} replied with {} chars (finish reason: {:?}, total tokens: {:?})",
            response.model,
            response.text.len(),
            response.finish_reason,
            response.usage.as_ref().map(|u| u.total_tokens)
        );

        parse_reply(&response.text)
    }
}

/// Parses a raw model reply, keeping the raw text on failure.
pub fn parse_reply(text: &str) -> Result<Value> {
    serde_json::from_str(strip_code_fences(text)).map_err(|source| {
        error!("Error parsing model response: {}", source);
        error!("Raw model response: {}", text);
        Error::UpstreamFormat {
            raw: text.to_string(),
            source,
        }
    })
}
