// ABOUTME: Integration tests for the Gemini client against a mock server
// ABOUTME: Covers request shape, text assembly and error classification

use std::time::Duration;

use serde_json::json;
use shipui_ai::{extract_code, GenAIError, GenAIErrorKind, GenAIService};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

fn service(server: &MockServer, key: Option<&str>) -> GenAIService {
    GenAIService::new(
        format!("{}/v1beta", server.uri()),
        "gemini-2.5-flash",
        key.map(str::to_string),
        Duration::from_secs(5),
    )
    .unwrap()
}

#[tokio::test]
async fn test_generate_text_joins_parts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "AIzaTest"))
        .and(body_partial_json(json!({
            "contents": [{ "role": "user", "parts": [{ "text": "make a card" }] }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{ "text": "```html\n<div>" }, { "text": "card</div>\n```" }]
                },
                "finishReason": "STOP"
            }],
            "usageMetadata": { "promptTokenCount": 12, "candidatesTokenCount": 30, "totalTokenCount": 42 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = service(&server, Some("AIzaTest"))
        .generate_text("make a card")
        .await
        .unwrap();

    assert_eq!(response.usage.total_tokens(), 42);
    assert_eq!(extract_code(&response.data), "<div>card</div>");
}

#[tokio::test]
async fn test_missing_key_skips_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = service(&server, None).generate_text("x").await.unwrap_err();
    assert!(matches!(err, GenAIError::MissingCredential));

    let err = service(&server, Some("   ")).generate_text("x").await.unwrap_err();
    assert!(err.is_credential_error());
}

#[tokio::test]
async fn test_invalid_key_is_credential_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "status": "INVALID_ARGUMENT",
                "details": [{
                    "@type": "type.googleapis.com/google.rpc.ErrorInfo",
                    "reason": "API_KEY_INVALID"
                }]
            }
        })))
        .mount(&server)
        .await;

    let err = service(&server, Some("bad")).generate_text("x").await.unwrap_err();
    assert_eq!(err.kind(), GenAIErrorKind::Credential);
}

#[tokio::test]
async fn test_server_error_is_upstream() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": { "code": 500, "message": "Internal error", "status": "INTERNAL" }
        })))
        .mount(&server)
        .await;

    let err = service(&server, Some("AIzaTest")).generate_text("x").await.unwrap_err();
    assert_eq!(err.kind(), GenAIErrorKind::Upstream);
    assert!(!err.is_credential_error());
}

#[tokio::test]
async fn test_blocked_prompt() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        })))
        .mount(&server)
        .await;

    let err = service(&server, Some("AIzaTest")).generate_text("x").await.unwrap_err();
    assert_eq!(err.kind(), GenAIErrorKind::Blocked);
}

#[tokio::test]
async fn test_no_candidates_is_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let err = service(&server, Some("AIzaTest")).generate_text("x").await.unwrap_err();
    assert!(matches!(err, GenAIError::EmptyResponse));
}
