// ABOUTME: Core types, notifications, and paths for Ship UI
// ABOUTME: Foundational package providing shared functionality across all Ship UI packages

pub mod constants;
pub mod export;
pub mod notify;
pub mod types;

// Re-export main types
pub use types::{Framework, GenerationRecord, ParseFrameworkError, User};

// Re-export notifications
pub use notify::{Notification, NotificationLevel, Notifier, RecordingNotifier, SharedNotifier};

// Re-export constants
pub use constants::{shipui_dir, storage_file};

// Re-export file export helpers
pub use export::{write_code_file, ExportError, GENERATOR_EXPORT_NAME, HISTORY_EXPORT_STEM};
