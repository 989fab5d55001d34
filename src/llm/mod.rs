mod client;
mod types;

pub use client::{LlmClient, OpenAiClient};
pub use types::{CompletionRequest, CompletionResponse, Usage};
