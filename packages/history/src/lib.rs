// ABOUTME: History viewer for signed-in users
// ABOUTME: Lists, deletes, opens and exports components saved on the backend

pub mod viewer;

use shipui_api::ApiError;
use thiserror::Error;

pub use viewer::HistoryViewer;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("Sign in to see your history")]
    NotSignedIn,

    #[error("Failed to load history: {0}")]
    Load(#[source] ApiError),

    #[error("Failed to delete component: {0}")]
    Delete(#[source] ApiError),

    #[error("No saved component with id {0}")]
    UnknownItem(String),
}
