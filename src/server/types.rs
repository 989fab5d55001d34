use serde::{Deserialize, Serialize};

pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";
pub const WORD_REQUIRED: &str = "Word parameter is required";
pub const PARSE_FAILED: &str = "Failed to parse etymology data from AI.";
pub const UPSTREAM_FAILED: &str = "Failed to fetch etymology from AI.";

#[derive(Debug, Default, Deserialize)]
pub struct EtymologyQuery {
    #[serde(default)]
    pub word: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}
