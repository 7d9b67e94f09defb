// ABOUTME: Typed guest-history buffer kept in local storage
// ABOUTME: Append-only log of anonymous generations, drained by the login sync

use serde_json::Value;
use shipui_core::GenerationRecord;
use tracing::{debug, warn};

use crate::keys::GUEST_HISTORY;
use crate::store::SharedStore;
use crate::StorageResult;

/// Guest history buffer over a key/value store
///
/// Reads never fail: a missing key, malformed JSON, or a value that is not an
/// array all read as an empty buffer. Array entries that do not decode as
/// records are skipped.
#[derive(Clone)]
pub struct GuestHistory {
    store: SharedStore,
}

impl GuestHistory {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Current buffer contents in insertion order
    pub async fn peek(&self) -> Vec<GenerationRecord> {
        let raw = match self.store.get(GUEST_HISTORY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(error = %e, "failed to read guest history, treating as empty");
                return Vec::new();
            }
        };
        decode_buffer(&raw)
    }

    pub async fn append(&self, record: GenerationRecord) -> StorageResult<()> {
        let mut records = self.peek().await;
        records.push(record);
        let encoded = serde_json::to_string(&records)?;
        self.store.set(GUEST_HISTORY, &encoded).await?;
        debug!(len = records.len(), "appended guest generation");
        Ok(())
    }

    /// Take every record out of the buffer
    pub async fn drain(&self) -> StorageResult<Vec<GenerationRecord>> {
        let records = self.peek().await;
        self.clear().await?;
        Ok(records)
    }

    pub async fn clear(&self) -> StorageResult<()> {
        self.store.remove(GUEST_HISTORY).await
    }

    pub async fn len(&self) -> usize {
        self.peek().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.peek().await.is_empty()
    }
}

fn decode_buffer(raw: &str) -> Vec<GenerationRecord> {
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "guest history is not valid JSON, treating as empty");
            return Vec::new();
        }
    };

    let Value::Array(items) = value else {
        warn!("guest history is not an array, treating as empty");
        return Vec::new();
    };

    let total = items.len();
    let records: Vec<GenerationRecord> = items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect();

    if records.len() != total {
        warn!(
            skipped = total - records.len(),
            "skipped malformed guest history entries"
        );
    }
    records
}
