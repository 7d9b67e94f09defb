// ABOUTME: Integration tests for the session store and guest history sync
// ABOUTME: Runs sign-in, logout and sync flows against a mock backend

use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use shipui_api::ApiClient;
use shipui_auth::{AuthError, HistorySynchronizer, LogoutOutcome, SessionState, SessionStore, SyncOutcome};
use shipui_core::{Framework, GenerationRecord, NotificationLevel, RecordingNotifier, User};
use shipui_storage::{GuestHistory, KeyValueStore, MemoryStore};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct Harness {
    session: SessionStore,
    guest: GuestHistory,
    store: Arc<MemoryStore>,
    notifier: RecordingNotifier,
    api: ApiClient,
}

fn harness(server: &MockServer) -> Harness {
    let api = ApiClient::new(format!("{}/api", server.uri()), Duration::from_secs(5)).unwrap();
    let store = Arc::new(MemoryStore::new());
    let guest = GuestHistory::new(store.clone());
    let notifier = RecordingNotifier::new();
    let session = SessionStore::new(api.clone(), guest.clone(), Arc::new(notifier.clone()));
    Harness {
        session,
        guest,
        store,
        notifier,
        api,
    }
}

fn user_json() -> serde_json::Value {
    json!({ "_id": "u-1", "name": "Ada", "email": "ada@example.com" })
}

fn ada() -> User {
    User {
        id: "u-1".to_string(),
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        avatar: None,
    }
}

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/auth/google"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_initialize_restores_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server);
    assert!(h.session.state().await.is_loading());

    let state = h.session.initialize().await;
    assert_eq!(state, SessionState::Authenticated(ada()));

    // Second call does not probe again
    h.session.initialize().await;
    assert!(h.session.is_authenticated().await);
}

#[tokio::test]
async fn test_initialize_failure_is_anonymous() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "Not authorized" })))
        .mount(&server)
        .await;

    let h = harness(&server);
    assert_eq!(h.session.initialize().await, SessionState::Anonymous);
    assert_eq!(h.session.current_user().await, None);
    // Probing never notifies
    assert!(h.notifier.entries().is_empty());
}

#[tokio::test]
async fn test_login_syncs_guest_buffer_once_and_clears_it() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/history/sync"))
        .and(body_partial_json(json!({
            "guestHistories": [
                { "prompt": "pricing card", "framework": "html-tailwind" },
                { "prompt": "navbar", "framework": "vue-tailwind" }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "count": 2 })))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server);
    h.guest
        .append(GenerationRecord::guest("pricing card", Framework::HtmlTailwind, "<div/>"))
        .await
        .unwrap();
    h.guest
        .append(GenerationRecord::guest("navbar", Framework::VueTailwind, "<template/>"))
        .await
        .unwrap();

    let outcome = h.session.login_with_google("google-token").await.unwrap();

    assert_eq!(outcome.user, ada());
    assert_eq!(outcome.sync, SyncOutcome::Synced { count: 2 });
    assert!(h.guest.is_empty().await);
    assert_eq!(
        h.notifier.messages(),
        vec!["Welcome Ada! 2 saved guest generations synced.".to_string()]
    );
}

#[tokio::test]
async fn test_login_with_empty_buffer_makes_no_sync_request() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/history/sync"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "count": 0 })))
        .expect(0)
        .mount(&server)
        .await;

    let h = harness(&server);
    let outcome = h.session.login_with_google("google-token").await.unwrap();

    assert_eq!(outcome.sync, SyncOutcome::NothingToSync);
    assert_eq!(h.notifier.messages(), vec!["Welcome Ada!".to_string()]);
}

#[tokio::test]
async fn test_corrupt_buffer_is_discarded_on_login() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/history/sync"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "count": 0 })))
        .expect(0)
        .mount(&server)
        .await;

    let h = harness(&server);
    h.store
        .set(shipui_storage::keys::GUEST_HISTORY, "{not json")
        .await
        .unwrap();

    let outcome = h.session.login_with_google("google-token").await.unwrap();
    assert_eq!(outcome.sync, SyncOutcome::NothingToSync);
    assert_eq!(
        h.store.get(shipui_storage::keys::GUEST_HISTORY).await.unwrap(),
        None
    );
}

#[tokio::test]
async fn test_failed_sync_keeps_buffer_and_session() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/history/sync"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "message": "db down" })))
        .mount(&server)
        .await;

    let h = harness(&server);
    h.guest
        .append(GenerationRecord::guest("pricing card", Framework::HtmlTailwind, "<div/>"))
        .await
        .unwrap();

    let outcome = h.session.login_with_google("google-token").await.unwrap();

    assert!(matches!(outcome.sync, SyncOutcome::Failed(_)));
    assert!(!outcome.sync.is_success());
    assert_eq!(h.guest.len().await, 1);
    assert!(h.session.is_authenticated().await);

    let last = h.notifier.last().unwrap();
    assert_eq!(last.level, NotificationLevel::Error);
    assert_eq!(last.message, "Logged in, but failed to sync existing guest history");
}

#[tokio::test]
async fn test_concurrent_sync_runs_only_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/history/sync"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "count": 1 }))
                .set_delay(Duration::from_millis(300)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server);
    h.guest
        .append(GenerationRecord::guest("pricing card", Framework::HtmlTailwind, "<div/>"))
        .await
        .unwrap();

    let notifier = Arc::new(RecordingNotifier::new());
    let sync = HistorySynchronizer::new(h.api.clone(), h.guest.clone(), notifier);
    let user = ada();

    let (first, second) = tokio::join!(sync.run(&user), sync.run(&user));
    let mut outcomes = vec![first, second];
    outcomes.sort_by_key(|o| matches!(o, SyncOutcome::AlreadyRunning));

    assert_eq!(
        outcomes,
        vec![SyncOutcome::Synced { count: 1 }, SyncOutcome::AlreadyRunning]
    );
}

#[tokio::test]
async fn test_empty_credential_is_rejected_locally() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/google"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .expect(0)
        .mount(&server)
        .await;

    let h = harness(&server);
    let err = h.session.login_with_google("  ").await.unwrap_err();

    assert!(matches!(err, AuthError::EmptyCredential));
    assert_eq!(h.notifier.messages(), vec!["Login Failed".to_string()]);
}

#[tokio::test]
async fn test_rejected_login_leaves_state_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/google"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "message": "Invalid token" })))
        .mount(&server)
        .await;

    let h = harness(&server);
    h.session.initialize().await;

    let err = h.session.login_with_google("bad-token").await.unwrap_err();
    assert!(matches!(err, AuthError::LoginFailed(_)));
    assert_eq!(h.session.state().await, SessionState::Anonymous);
    assert_eq!(h.notifier.messages(), vec!["Failed to log in with Google".to_string()]);
}

#[tokio::test]
async fn test_logout_success() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server);
    h.session.login_with_google("google-token").await.unwrap();
    h.notifier.clear();

    assert_eq!(h.session.logout().await, LogoutOutcome::Confirmed);
    assert_eq!(h.session.state().await, SessionState::Anonymous);

    let last = h.notifier.last().unwrap();
    assert_eq!(last.level, NotificationLevel::Success);
    assert_eq!(last.message, "Logged out successfully");
}

#[tokio::test]
async fn test_failed_logout_keeps_session() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let h = harness(&server);
    h.session.login_with_google("google-token").await.unwrap();
    h.notifier.clear();

    let outcome = h.session.logout().await;
    assert!(matches!(outcome, LogoutOutcome::Failed(_)));
    assert_eq!(h.session.state().await, SessionState::Authenticated(ada()));
    assert!(h.session.is_authenticated().await);

    let last = h.notifier.last().unwrap();
    assert_eq!(last.level, NotificationLevel::Error);
    assert_eq!(last.message, "Failed to log out");
}
