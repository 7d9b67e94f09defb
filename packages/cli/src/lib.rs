// ABOUTME: Shared pieces of the shipui terminal client
// ABOUTME: Wiring of session, storage and workflows, terminal output and logging setup

pub mod clipboard;
pub mod context;
pub mod format;
pub mod logging;
pub mod notifier;

pub use clipboard::{copy_code, Clipboard, SystemClipboard};
pub use context::AppContext;
pub use notifier::TerminalNotifier;
