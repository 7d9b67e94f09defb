// ABOUTME: Durable local storage for Ship UI
// ABOUTME: Key/value stores, the guest history buffer and the theme preference

pub mod guest_history;
pub mod keys;
pub mod store;
pub mod theme;

use thiserror::Error;

pub use guest_history::GuestHistory;
pub use store::{FileStore, KeyValueStore, MemoryStore, SharedStore};
pub use theme::{Theme, ThemePreference};

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage key cannot be empty")]
    InvalidKey,
}
