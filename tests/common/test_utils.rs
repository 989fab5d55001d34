use axum::{Router, body::Body, http::Request, response::Response};
use etymology_fx::{
    config::{ClientConfig, Config, LlmConfig, LogsConfig, ServerConfig},
    etymology::{EtymologyResponse, MorphemeEntry},
    llm::LlmClient,
    server,
};
use serde_json::Value;
use std::sync::Arc;

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        llm: LlmConfig {
            base_url: "https://generativelanguage.googleapis.com/v1beta/openai".to_string(),
            api_key: "test-api-key".to_string(),
            model: "gemini-2.0-flash".to_string(),
            temperature: None,
        },
        client: ClientConfig::default(),
    }
}

/// Router wired to the given model client
pub fn create_test_app(llm: Arc<dyn LlmClient>) -> Router {
    let config = create_test_config();
    server::router(server::app_state(&config, llm))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn sample_response() -> EtymologyResponse {
    EtymologyResponse {
        word: "biology".to_string(),
        overall_etymology: Some("Coined from Greek bios 'life' and -logia 'study'.".to_string()),
        morphemes: vec![
            MorphemeEntry {
                morpheme: "bio".to_string(),
                kind: Some("root".to_string()),
                origin: Some("Greek".to_string()),
                meaning: Some("life".to_string()),
            },
            MorphemeEntry {
                morpheme: "-logy".to_string(),
                kind: Some("suffix".to_string()),
                origin: Some("Greek".to_string()),
                meaning: Some("study of".to_string()),
            },
        ],
    }
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 9090
  logs:
    level: "debug"
llm:
  base_url: "http://localhost:4010/v1"
  api_key: "yaml-key"
  model: "gemini-1.5-flash"
client:
  api_base_url: "http://127.0.0.1:9090"
"#;
