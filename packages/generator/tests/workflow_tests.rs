// ABOUTME: Integration tests for the generator workflow
// ABOUTME: Mocks both Gemini and the backend to check persistence and messages

use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use shipui_api::ApiClient;
use shipui_auth::SessionStore;
use shipui_config::AppConfig;
use shipui_core::{Framework, NotificationLevel, RecordingNotifier};
use shipui_generator::{GenerateError, GeneratorWorkflow, Persistence};
use shipui_settings::ApiKeySettings;
use shipui_storage::{GuestHistory, MemoryStore};
use tempfile::TempDir;
use wiremock::matchers::{body_partial_json, header, method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PRICING_CARD: &str = "<div class=\"rounded-xl p-6\">\n  <h2>Pro</h2>\n</div>";

struct Harness {
    workflow: GeneratorWorkflow,
    session: SessionStore,
    guest: GuestHistory,
    settings: ApiKeySettings,
    notifier: RecordingNotifier,
}

fn harness(ai: &MockServer, backend: &MockServer, default_key: Option<&str>) -> Harness {
    let config = AppConfig {
        api_url: format!("{}/api", backend.uri()),
        default_api_key: default_key.map(str::to_string),
        gemini_base_url: format!("{}/v1beta", ai.uri()),
        http_timeout: Duration::from_secs(5),
        ..AppConfig::default()
    };

    let api = ApiClient::from_config(&config).unwrap();
    let store = Arc::new(MemoryStore::new());
    let guest = GuestHistory::new(store.clone());
    let settings = ApiKeySettings::new(store);
    let notifier = RecordingNotifier::new();
    let shared = Arc::new(notifier.clone());
    let session = SessionStore::new(api, guest.clone(), shared.clone());
    let workflow = GeneratorWorkflow::new(
        config,
        session.clone(),
        guest.clone(),
        settings.clone(),
        shared,
    );

    Harness {
        workflow,
        session,
        guest,
        settings,
        notifier,
    }
}

async fn mount_gemini_reply(ai: &MockServer, key: &str, text: &str) {
    Mock::given(method("POST"))
        .and(path_regex(r"^/v1beta/models/[^/]+:generateContent$"))
        .and(header("x-goog-api-key", key))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": text }] },
                "finishReason": "STOP"
            }]
        })))
        .mount(ai)
        .await;
}

fn fenced(code: &str) -> String {
    format!("Here you go:\n```html\n{}\n```\nEnjoy!", code)
}

async fn sign_in(backend: &MockServer, session: &SessionStore) {
    Mock::given(method("POST"))
        .and(path("/api/auth/google"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "u-1", "name": "Ada", "email": "ada@example.com"
        })))
        .mount(backend)
        .await;
    session.login_with_google("google-token").await.unwrap();
}

#[tokio::test]
async fn test_guest_generation_appends_to_buffer() {
    let ai = MockServer::start().await;
    let backend = MockServer::start().await;
    mount_gemini_reply(&ai, "AIzaDefault", &fenced(PRICING_CARD)).await;
    Mock::given(method("POST"))
        .and(path("/api/history"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&backend)
        .await;

    let h = harness(&ai, &backend, Some("AIzaDefault"));
    let generation = h
        .workflow
        .generate("a pricing card", Framework::HtmlTailwind)
        .await
        .unwrap();

    assert_eq!(generation.code, PRICING_CARD);
    assert_eq!(generation.persisted, Persistence::Guest);

    let buffer = h.guest.peek().await;
    assert_eq!(buffer.len(), 1);
    assert_eq!(buffer[0].prompt, "a pricing card");
    assert_eq!(buffer[0].framework, Framework::HtmlTailwind);
    assert_eq!(buffer[0].code, PRICING_CARD);
    assert!(buffer[0].id.is_none());
}

#[tokio::test]
async fn test_signed_in_generation_posts_to_backend() {
    let ai = MockServer::start().await;
    let backend = MockServer::start().await;
    mount_gemini_reply(&ai, "AIzaDefault", &fenced(PRICING_CARD)).await;
    Mock::given(method("POST"))
        .and(path("/api/history"))
        .and(body_partial_json(json!({
            "prompt": "a pricing card",
            "framework": "html-tailwind",
            "code": PRICING_CARD
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "_id": "h-1",
            "prompt": "a pricing card",
            "framework": "html-tailwind",
            "code": PRICING_CARD,
            "createdAt": "2024-05-01T10:00:00Z"
        })))
        .expect(1)
        .mount(&backend)
        .await;

    let h = harness(&ai, &backend, Some("AIzaDefault"));
    sign_in(&backend, &h.session).await;

    let generation = h
        .workflow
        .generate("a pricing card", Framework::HtmlTailwind)
        .await
        .unwrap();

    assert_eq!(generation.persisted, Persistence::Backend);
    assert!(h.guest.is_empty().await);
}

#[tokio::test]
async fn test_failed_save_still_returns_code() {
    let ai = MockServer::start().await;
    let backend = MockServer::start().await;
    mount_gemini_reply(&ai, "AIzaDefault", &fenced(PRICING_CARD)).await;
    Mock::given(method("POST"))
        .and(path("/api/history"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&backend)
        .await;

    let h = harness(&ai, &backend, Some("AIzaDefault"));
    sign_in(&backend, &h.session).await;
    h.notifier.clear();

    let generation = h
        .workflow
        .generate("a pricing card", Framework::HtmlTailwind)
        .await
        .unwrap();

    assert_eq!(generation.code, PRICING_CARD);
    assert_eq!(generation.persisted, Persistence::NotSaved);

    let last = h.notifier.last().unwrap();
    assert_eq!(last.level, NotificationLevel::Warning);
    assert_eq!(last.message, "Generated code, but failed to save to history.");
}

#[tokio::test]
async fn test_empty_prompt_makes_no_ai_call() {
    let ai = MockServer::start().await;
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&ai)
        .await;

    let h = harness(&ai, &backend, Some("AIzaDefault"));
    let err = h.workflow.generate("   ", Framework::ReactTailwind).await.unwrap_err();

    assert!(matches!(err, GenerateError::EmptyPrompt));
    assert_eq!(h.notifier.messages(), vec!["Please describe your component first".to_string()]);
}

#[tokio::test]
async fn test_custom_key_overrides_default() {
    let ai = MockServer::start().await;
    let backend = MockServer::start().await;
    mount_gemini_reply(&ai, "AIzaPersonal", "<nav>menu</nav>").await;

    let h = harness(&ai, &backend, Some("AIzaDefault"));
    h.settings.save("AIzaPersonal").await.unwrap();

    let generation = h.workflow.generate("navbar", Framework::VueTailwind).await.unwrap();
    // No fence: whole reply is the code
    assert_eq!(generation.code, "<nav>menu</nav>");
}

#[tokio::test]
async fn test_invalid_key_message() {
    let ai = MockServer::start().await;
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
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
        .mount(&ai)
        .await;

    let h = harness(&ai, &backend, Some("AIzaWrong"));
    let err = h.workflow.generate("a pricing card", Framework::HtmlTailwind).await.unwrap_err();

    assert!(matches!(err, GenerateError::Ai(_)));
    assert_eq!(
        h.notifier.messages(),
        vec!["Invalid API Key! Please check your Settings.".to_string()]
    );
    assert!(h.guest.is_empty().await);
}

#[tokio::test]
async fn test_missing_key_is_reported_as_invalid_key() {
    let ai = MockServer::start().await;
    let backend = MockServer::start().await;

    let h = harness(&ai, &backend, None);
    h.workflow.generate("a pricing card", Framework::HtmlTailwind).await.unwrap_err();

    assert_eq!(
        h.notifier.messages(),
        vec!["Invalid API Key! Please check your Settings.".to_string()]
    );
}

#[tokio::test]
async fn test_upstream_failure_message() {
    let ai = MockServer::start().await;
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "error": { "code": 503, "message": "The model is overloaded.", "status": "UNAVAILABLE" }
        })))
        .mount(&ai)
        .await;

    let h = harness(&ai, &backend, Some("AIzaDefault"));
    h.workflow.generate("a pricing card", Framework::HtmlTailwind).await.unwrap_err();

    assert_eq!(
        h.notifier.messages(),
        vec!["Something went wrong while generating code".to_string()]
    );
}

#[tokio::test]
async fn test_export_code() {
    let ai = MockServer::start().await;
    let backend = MockServer::start().await;
    let h = harness(&ai, &backend, None);
    let temp = TempDir::new().unwrap();

    let file = h.workflow.export_code(PRICING_CARD, temp.path()).unwrap();
    assert_eq!(file.file_name().unwrap(), "GenUI-Code.html");
    assert_eq!(std::fs::read_to_string(&file).unwrap(), PRICING_CARD);
    assert_eq!(h.notifier.last().unwrap().message, "File downloaded");

    h.workflow.export_code("", temp.path()).unwrap_err();
    assert_eq!(h.notifier.last().unwrap().message, "No code to download");
}
