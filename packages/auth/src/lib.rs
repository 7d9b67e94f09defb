// ABOUTME: Session management for Ship UI
// ABOUTME: Google sign-in, logout, session probing and the one-shot guest history sync

pub mod error;
pub mod session;
pub mod sync;

// Re-export main types
pub use error::{AuthError, AuthResult};
pub use session::{LoginOutcome, LogoutOutcome, SessionState, SessionStore};
pub use sync::{HistorySynchronizer, SyncOutcome};
