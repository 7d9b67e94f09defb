// ABOUTME: Application wiring for the terminal client
// ABOUTME: Builds storage, session and workflows once and hands out shared handles

use std::sync::Arc;

use anyhow::{Context, Result};
use shipui_api::ApiClient;
use shipui_auth::SessionStore;
use shipui_config::AppConfig;
use shipui_core::SharedNotifier;
use shipui_generator::GeneratorWorkflow;
use shipui_history::HistoryViewer;
use shipui_settings::ApiKeySettings;
use shipui_storage::{FileStore, GuestHistory, SharedStore, ThemePreference};
use tracing::debug;

use crate::notifier::TerminalNotifier;

/// Everything a command needs, created once per process
#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub guest: GuestHistory,
    pub settings: ApiKeySettings,
    pub theme: ThemePreference,
    pub session: SessionStore,
    pub notifier: SharedNotifier,
}

impl AppContext {
    pub fn new(config: AppConfig, store: SharedStore, notifier: SharedNotifier) -> Result<Self> {
        let api = ApiClient::from_config(&config).context("Failed to create backend client")?;
        let guest = GuestHistory::new(store.clone());
        let session = SessionStore::new(api, guest.clone(), notifier.clone());

        Ok(Self {
            settings: ApiKeySettings::new(store.clone()),
            theme: ThemePreference::new(store),
            guest,
            session,
            notifier,
            config,
        })
    }

    /// Context backed by the on-disk store and terminal output
    pub fn from_env() -> Result<Self> {
        let config = AppConfig::from_env().context("Invalid configuration")?;
        let store = FileStore::open_default();
        debug!(path = %store.path().display(), api_url = %config.api_url, "starting shipui");
        Self::new(config, Arc::new(store), Arc::new(TerminalNotifier::new()))
    }

    pub fn generator(&self) -> GeneratorWorkflow {
        GeneratorWorkflow::new(
            self.config.clone(),
            self.session.clone(),
            self.guest.clone(),
            self.settings.clone(),
            self.notifier.clone(),
        )
    }

    pub fn history_viewer(&self) -> HistoryViewer {
        HistoryViewer::new(self.session.clone(), self.notifier.clone())
    }
}
