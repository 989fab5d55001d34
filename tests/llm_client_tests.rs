use etymology_fx::{
    config::LlmConfig,
    etymology::{EtymologyService, build_prompt},
    llm::{CompletionRequest, LlmClient, OpenAiClient},
};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, header, method, path},
};

fn create_test_config(base_url: String) -> LlmConfig {
    LlmConfig {
        base_url,
        api_key: "test-api-key".to_string(),
        model: "gemini-2.0-flash".to_string(),
        temperature: None,
    }
}

fn chat_completion(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "gemini-2.0-flash",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 120, "completion_tokens": 40, "total_tokens": 160}
    })
}

#[tokio::test]
async fn test_completion_returns_message_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-api-key"))
        .and(body_partial_json(json!({"model": "gemini-2.0-flash"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion("hello")))
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenAiClient::new(create_test_config(server.uri()));
    let response = client
        .create_completion(CompletionRequest::new("Say hello"))
        .await
        .unwrap();

    assert_eq!(response.text, "hello");
    assert_eq!(response.model, "gemini-2.0-flash");
    assert_eq!(response.usage.unwrap().total_tokens, 160);
}

#[tokio::test]
async fn test_prompt_is_sent_as_user_message() {
    let server = MockServer::start().await;
    let prompt = build_prompt("telephone");
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({
            "messages": [{"role": "user", "content": prompt}],
            "temperature": 0.2
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion("{}")))
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenAiClient::new(create_test_config(server.uri()));
    let request = CompletionRequest::new(prompt).with_temperature(Some(0.2));

    assert!(client.create_completion(request).await.is_ok());
}

#[tokio::test]
async fn test_auth_failure_is_an_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {
                "message": "API key not valid",
                "type": "invalid_request_error",
                "param": null,
                "code": "invalid_api_key"
            }
        })))
        .mount(&server)
        .await;

    let client = OpenAiClient::new(create_test_config(server.uri()));
    let err = client
        .create_completion(CompletionRequest::new("Say hello"))
        .await
        .unwrap_err();

    assert!(err.is_upstream_transport());
}

#[tokio::test]
async fn test_service_parses_fenced_model_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion(
            "```json\n{\"word\":\"cat\",\"overall_etymology\":\"x\",\"morphemes\":[]}\n```",
        )))
        .mount(&server)
        .await;

    let llm: Arc<dyn LlmClient> = Arc::new(OpenAiClient::new(create_test_config(server.uri())));
    let value = EtymologyService::new(llm).lookup("cat").await.unwrap();

    assert_eq!(
        value,
        json!({"word": "cat", "overall_etymology": "x", "morphemes": []})
    );
}
