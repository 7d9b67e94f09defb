// ABOUTME: User settings for Ship UI
// ABOUTME: Stores the personal Gemini key override and resolves the key used at generation time

pub mod types;
pub mod validation;

use shipui_storage::{keys::CUSTOM_GEMINI_KEY, SharedStore, StorageError};
use thiserror::Error;
use tracing::{info, warn};

pub use types::{mask_key, ApiKeyChange, KeySource, ResolvedKey};
pub use validation::{validate_api_key, ValidationError};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Invalid API key: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to persist settings: {0}")]
    Storage(#[from] StorageError),
}

/// Personal API key override persisted in local storage
#[derive(Clone)]
pub struct ApiKeySettings {
    store: SharedStore,
}

impl ApiKeySettings {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Save the settings form: blank input removes the override
    pub async fn save(&self, input: &str) -> Result<ApiKeyChange, SettingsError> {
        let key = input.trim();
        if key.is_empty() {
            self.store.remove(CUSTOM_GEMINI_KEY).await?;
            info!("custom API key removed");
            return Ok(ApiKeyChange::Removed);
        }

        validate_api_key(key)?;
        self.store.set(CUSTOM_GEMINI_KEY, key).await?;
        info!(key = %mask_key(key), "custom API key saved");
        Ok(ApiKeyChange::Saved)
    }

    pub async fn clear(&self) -> Result<(), SettingsError> {
        self.store.remove(CUSTOM_GEMINI_KEY).await?;
        Ok(())
    }

    /// Stored override, if any and not blank
    pub async fn custom_key(&self) -> Option<String> {
        match self.store.get(CUSTOM_GEMINI_KEY).await {
            Ok(value) => value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()),
            Err(e) => {
                warn!(error = %e, "failed to read custom API key");
                None
            }
        }
    }

    /// Pick the credential for a generation call: override first, then default
    pub async fn resolve(&self, default_key: Option<&str>) -> Option<ResolvedKey> {
        if let Some(key) = self.custom_key().await {
            return Some(ResolvedKey { key, source: KeySource::Custom });
        }

        default_key
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(|k| ResolvedKey { key: k.to_string(), source: KeySource::Default })
    }

    pub async fn masked(&self) -> Option<String> {
        self.custom_key().await.map(|k| mask_key(&k))
    }
}
