// ABOUTME: Session store holding the signed-in user for the life of the process
// ABOUTME: Three-state machine (unknown, anonymous, authenticated) driven by the backend

use std::sync::Arc;

use shipui_api::ApiClient;
use shipui_core::{Notification, SharedNotifier, User};
use shipui_storage::GuestHistory;
use tokio::sync::{OnceCell, RwLock};
use tracing::{debug, error, info, warn};

use crate::error::{AuthError, AuthResult};
use crate::sync::{HistorySynchronizer, SyncOutcome};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Not probed yet
    #[default]
    Unknown,
    Anonymous,
    Authenticated(User),
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Unknown)
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub user: User,
    pub sync: SyncOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoutOutcome {
    /// Server session closed
    Confirmed,
    /// Server call failed; still signed in
    Failed(String),
}

struct Inner {
    api: ApiClient,
    state: RwLock<SessionState>,
    probed: OnceCell<()>,
    synchronizer: HistorySynchronizer,
    notifier: SharedNotifier,
}

/// Shared handle to the current session
///
/// Clones point at the same state; pass one to every component that needs
/// to know who is signed in.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

impl SessionStore {
    pub fn new(api: ApiClient, guest: GuestHistory, notifier: SharedNotifier) -> Self {
        let synchronizer = HistorySynchronizer::new(api.clone(), guest, notifier.clone());
        Self {
            inner: Arc::new(Inner {
                api,
                state: RwLock::new(SessionState::Unknown),
                probed: OnceCell::new(),
                synchronizer,
                notifier,
            }),
        }
    }

    /// Probe the backend for an existing session, once
    ///
    /// Any probe failure is treated as "no session".
    pub async fn initialize(&self) -> SessionState {
        self.inner
            .probed
            .get_or_init(|| async {
                let next = match self.inner.api.current_user().await {
                    Ok(user) => {
                        info!(user_id = %user.id, "restored existing session");
                        SessionState::Authenticated(user)
                    }
                    Err(e) => {
                        debug!(error = %e, "no active session");
                        SessionState::Anonymous
                    }
                };

                let mut state = self.inner.state.write().await;
                // A login that finished during the probe wins
                if state.is_loading() {
                    *state = next;
                }
            })
            .await;

        self.state().await
    }

    pub async fn state(&self) -> SessionState {
        self.inner.state.read().await.clone()
    }

    pub async fn current_user(&self) -> Option<User> {
        self.inner.state.read().await.user().cloned()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.inner.state.read().await.user().is_some()
    }

    /// Sign in with a Google ID token, then merge guest history
    pub async fn login_with_google(&self, credential: &str) -> AuthResult<LoginOutcome> {
        let credential = credential.trim();
        if credential.is_empty() {
            self.inner.notifier.notify(Notification::error("Login Failed"));
            return Err(AuthError::EmptyCredential);
        }

        let user = match self.inner.api.login_with_google(credential).await {
            Ok(user) => user,
            Err(e) => {
                error!(error = %e, "Google Login Error");
                self.inner
                    .notifier
                    .notify(Notification::error("Failed to log in with Google"));
                return Err(AuthError::LoginFailed(e));
            }
        };

        *self.inner.state.write().await = SessionState::Authenticated(user.clone());

        let sync = self.inner.synchronizer.run(&user).await;
        Ok(LoginOutcome { user, sync })
    }

    /// Sign out; the session only ends once the backend confirms
    pub async fn logout(&self) -> LogoutOutcome {
        match self.inner.api.logout().await {
            Ok(()) => {
                *self.inner.state.write().await = SessionState::Anonymous;
                info!("logged out");
                self.inner
                    .notifier
                    .notify(Notification::success("Logged out successfully"));
                LogoutOutcome::Confirmed
            }
            Err(e) => {
                warn!(error = %e, "Logout Error");
                self.inner
                    .notifier
                    .notify(Notification::error("Failed to log out"));
                LogoutOutcome::Failed(e.to_string())
            }
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.inner.api
    }
}
