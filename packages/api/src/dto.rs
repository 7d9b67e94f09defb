//! Request and response bodies for the Ship UI backend

use serde::{Deserialize, Serialize};
use shipui_core::{Framework, GenerationRecord};

/// Google sign-in exchange
#[derive(Debug, Serialize)]
pub struct GoogleLoginRequest<'a> {
    pub token: &'a str,
}

/// New backend history entry; the server stamps id and creation time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewHistoryRecord {
    pub prompt: String,
    pub framework: Framework,
    pub code: String,
}

impl From<&GenerationRecord> for NewHistoryRecord {
    fn from(record: &GenerationRecord) -> Self {
        Self {
            prompt: record.prompt.clone(),
            framework: record.framework,
            code: record.code.clone(),
        }
    }
}

/// Bulk upload of the guest buffer
#[derive(Debug, Serialize)]
pub struct SyncRequest<'a> {
    #[serde(rename = "guestHistories")]
    pub guest_histories: &'a [GenerationRecord],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SyncResponse {
    /// Records the backend accepted
    pub count: usize,
}
