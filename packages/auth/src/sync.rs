// ABOUTME: One-shot upload of the guest history buffer after sign-in
// ABOUTME: Single in-flight run; the buffer is cleared only when the backend accepts it

use std::sync::Arc;

use shipui_api::ApiClient;
use shipui_core::{Notification, SharedNotifier, User};
use shipui_storage::GuestHistory;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

/// Result of merging the guest buffer into backend history
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Buffer uploaded and cleared
    Synced { count: usize },
    /// Buffer was empty, absent or unreadable; no request made
    NothingToSync,
    /// Upload failed; buffer left intact for the next login
    Failed(String),
    /// Another sync was already running; this call did nothing
    AlreadyRunning,
}

impl SyncOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SyncOutcome::Synced { .. } | SyncOutcome::NothingToSync)
    }
}

/// Merges the guest buffer into backend history right after sign-in
///
/// At most one run is in flight at a time; a concurrent call returns
/// [`SyncOutcome::AlreadyRunning`] without touching the network.
#[derive(Clone)]
pub struct HistorySynchronizer {
    api: ApiClient,
    guest: GuestHistory,
    notifier: SharedNotifier,
    in_flight: Arc<Mutex<()>>,
}

impl HistorySynchronizer {
    pub fn new(api: ApiClient, guest: GuestHistory, notifier: SharedNotifier) -> Self {
        Self {
            api,
            guest,
            notifier,
            in_flight: Arc::new(Mutex::new(())),
        }
    }

    pub async fn run(&self, user: &User) -> SyncOutcome {
        let Ok(_guard) = self.in_flight.try_lock() else {
            debug!("guest history sync already in flight, skipping");
            return SyncOutcome::AlreadyRunning;
        };

        let records = self.guest.peek().await;
        if records.is_empty() {
            // Drop any empty or unreadable leftovers so they never resurface
            if let Err(e) = self.guest.clear().await {
                warn!(error = %e, "failed to reset empty guest history");
            }
            self.notifier
                .notify(Notification::success(format!("Welcome {}!", user.name)));
            return SyncOutcome::NothingToSync;
        }

        info!(records = records.len(), user_id = %user.id, "syncing guest history");
        match self.api.sync_history(&records).await {
            Ok(synced) => {
                if let Err(e) = self.guest.clear().await {
                    warn!(error = %e, "guest history synced but could not be cleared");
                }
                self.notifier.notify(Notification::success(format!(
                    "Welcome {}! {} saved guest generations synced.",
                    user.name, synced.count
                )));
                SyncOutcome::Synced { count: synced.count }
            }
            Err(e) => {
                error!(error = %e, "Error syncing history");
                self.notifier.notify(Notification::error(
                    "Logged in, but failed to sync existing guest history",
                ));
                SyncOutcome::Failed(e.to_string())
            }
        }
    }
}
