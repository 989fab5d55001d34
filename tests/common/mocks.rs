use async_trait::async_trait;
use etymology_fx::{
    Error, Result,
    etymology::EtymologyResponse,
    llm::{CompletionRequest, CompletionResponse, LlmClient},
    ui::{EtymologyFetcher, FetchError},
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Mock LLM client for testing
#[derive(Debug)]
pub struct MockLlmClient {
    pub replies: Arc<Mutex<Vec<String>>>,
    pub requests: Arc<Mutex<Vec<CompletionRequest>>>,
    pub error: Option<String>,
    pub internal_error: Option<String>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
            internal_error: None,
        }
    }

    pub fn with_reply(self, text: impl Into<String>) -> Self {
        self.replies.lock().unwrap().push(text.into());
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Fails with an error that is not about reaching the model.
    pub fn with_internal_error(mut self, error: impl Into<String>) -> Self {
        self.internal_error = Some(error.into());
        self
    }

    pub fn get_requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn create_completion(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = self.error {
            return Err(Error::llm(error.clone()));
        }
        if let Some(ref error) = self.internal_error {
            return Err(Error::internal(error.clone()));
        }

        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            return Err(Error::llm("No more mock replies available"));
        }

        Ok(CompletionResponse {
            model: "mock-model".to_string(),
            text: replies.remove(0),
            finish_reason: Some("Stop".to_string()),
            usage: None,
        })
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Mock fetcher that records calls and can hold requests open until released.
pub struct MockFetcher {
    pub result: Mutex<std::result::Result<EtymologyResponse, FetchError>>,
    pub calls: AtomicUsize,
    pub words: Mutex<Vec<String>>,
    gate: Option<Arc<Notify>>,
    pub started: Arc<Notify>,
}

impl MockFetcher {
    pub fn returning(result: std::result::Result<EtymologyResponse, FetchError>) -> Self {
        Self {
            result: Mutex::new(result),
            calls: AtomicUsize::new(0),
            words: Mutex::new(Vec::new()),
            gate: None,
            started: Arc::new(Notify::new()),
        }
    }

    /// Requests block until `gate.notify_one()` is called.
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn set_result(&self, result: std::result::Result<EtymologyResponse, FetchError>) {
        *self.result.lock().unwrap() = result;
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn words(&self) -> Vec<String> {
        self.words.lock().unwrap().clone()
    }
}

#[async_trait]
impl EtymologyFetcher for MockFetcher {
    async fn fetch(&self, word: &str) -> std::result::Result<EtymologyResponse, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.words.lock().unwrap().push(word.to_string());
        self.started.notify_one();

        if let Some(ref gate) = self.gate {
            gate.notified().await;
        }

        self.result.lock().unwrap().clone()
    }
}
