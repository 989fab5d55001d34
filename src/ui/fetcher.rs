use crate::{etymology::EtymologyResponse, server::ETYMOLOGY_PATH};
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Failures as the user sees them. The display text goes straight into the
/// error message, so the server-side distinctions collapse here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("API Error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("{0}")]
    Transport(String),

    #[error("{0}")]
    Decode(String),
}

#[async_trait]
pub trait EtymologyFetcher: Send + Sync {
    async fn fetch(&self, word: &str) -> Result<EtymologyResponse, FetchError>;
}

/// Calls the proxy endpoint over HTTP.
pub struct HttpEtymologyFetcher {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpEtymologyFetcher {
    pub fn new(api_base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}{}", api_base_url.trim_end_matches('/'), ETYMOLOGY_PATH),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl EtymologyFetcher for HttpEtymologyFetcher {
    async fn fetch(&self, word: &str) -> Result<EtymologyResponse, FetchError> {
        debug!("Fetching etymology for {} from {}", word, self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("word", word)])
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<Value>().await {
                Ok(body) => body
                    .get("error")
                    .and_then(Value::as_str)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .unwrap_or_else(|| status.canonical_reason().unwrap_or_default().to_string()),
                Err(_) => "Unknown error occurred".to_string(),
            };
            return Err(FetchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<EtymologyResponse>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}
