// ABOUTME: History viewer state: saved items, the open item and the user they belong to
// ABOUTME: Deletes only after backend confirmation and exports the open item to disk

use std::path::{Path, PathBuf};

use shipui_auth::SessionStore;
use shipui_core::{
    write_code_file, ExportError, GenerationRecord, Notification, SharedNotifier,
    HISTORY_EXPORT_STEM,
};
use tracing::{debug, error, info};

use crate::HistoryError;

/// Backend history for the signed-in user plus the open item, if any
///
/// The list follows the session: it is fetched when a user appears or
/// changes, and emptied when nobody is signed in.
pub struct HistoryViewer {
    session: SessionStore,
    notifier: SharedNotifier,
    items: Vec<GenerationRecord>,
    selected: Option<String>,
    loaded_for: Option<String>,
}

impl HistoryViewer {
    pub fn new(session: SessionStore, notifier: SharedNotifier) -> Self {
        Self {
            session,
            notifier,
            items: Vec::new(),
            selected: None,
            loaded_for: None,
        }
    }

    pub fn items(&self) -> &[GenerationRecord] {
        &self.items
    }

    /// Bring the list in line with the current session
    pub async fn refresh(&mut self) -> Result<(), HistoryError> {
        match self.session.current_user().await {
            None => {
                self.items.clear();
                self.selected = None;
                self.loaded_for = None;
                Ok(())
            }
            Some(user) if self.loaded_for.as_deref() != Some(user.id.as_str()) => {
                debug!(user_id = %user.id, "user changed, fetching history");
                self.load().await
            }
            Some(_) => Ok(()),
        }
    }

    /// Fetch the list from the backend
    ///
    /// On failure the previous list is kept.
    pub async fn load(&mut self) -> Result<(), HistoryError> {
        let Some(user) = self.session.current_user().await else {
            return Err(HistoryError::NotSignedIn);
        };

        match self.session.api().list_history().await {
            Ok(items) => {
                info!(count = items.len(), "history loaded");
                self.items = items;
                self.loaded_for = Some(user.id);
                if let Some(id) = &self.selected {
                    if !self.items.iter().any(|r| r.id.as_deref() == Some(id.as_str())) {
                        self.selected = None;
                    }
                }
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Failed to fetch history");
                self.notifier
                    .notify(Notification::error("Failed to load history"));
                Err(HistoryError::Load(e))
            }
        }
    }

    /// Delete on the backend, then drop the item locally
    pub async fn delete(&mut self, id: &str) -> Result<(), HistoryError> {
        if let Err(e) = self.session.api().delete_history(id).await {
            error!(error = %e, id, "Failed to delete");
            self.notifier
                .notify(Notification::error("Failed to delete component"));
            return Err(HistoryError::Delete(e));
        }

        self.items.retain(|r| r.id.as_deref() != Some(id));
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        self.notifier.notify(Notification::success("Component deleted"));
        Ok(())
    }

    /// Open one item in the read-only viewer
    pub fn select(&mut self, id: &str) -> Result<&GenerationRecord, HistoryError> {
        let record = self
            .items
            .iter()
            .find(|r| r.id.as_deref() == Some(id))
            .ok_or_else(|| HistoryError::UnknownItem(id.to_string()))?;
        self.selected = Some(id.to_string());
        Ok(record)
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&GenerationRecord> {
        let id = self.selected.as_deref()?;
        self.items.iter().find(|r| r.id.as_deref() == Some(id))
    }

    /// Write the open item to `Generated-Component{ext}` inside `dir`
    pub fn export_selected(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        let result = match self.selected() {
            Some(record) => {
                let file_name =
                    format!("{}{}", HISTORY_EXPORT_STEM, record.framework.file_extension());
                write_code_file(dir, &file_name, &record.code)
            }
            None => Err(ExportError::NothingToExport),
        };

        match &result {
            Ok(_) => self.notifier.notify(Notification::success("File downloaded successfully!")),
            Err(e) => self.notifier.notify(Notification::error(e.to_string())),
        }
        result
    }
}
