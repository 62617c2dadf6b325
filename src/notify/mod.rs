//! Best-effort notification store
//!
//! An append-only, in-memory log of notification records keyed by owner.
//! Producers (post/community/message events elsewhere in the platform)
//! append; a polling consumer pulls by owner key. Records are immutable
//! once created and survive only for the process lifetime.

use std::collections::VecDeque;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{HubError, HubResult};
use crate::utils::time::now_rfc3339;

/// One stored notification. The empty owner key denotes a broadcast
/// notification with no specific owner.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub id: String,
    #[serde(rename = "user_id")]
    pub owner: String,
    pub message: String,
    pub timestamp: String,
}

/// Append-only mapping from owner keys to a time-ordered notification log.
///
/// Appends and reads exclude each other only at the granularity of a
/// single record; there are no multi-record transactions. An optional
/// capacity turns the log into a ring that evicts oldest-first.
pub struct NotificationStore {
    records: RwLock<VecDeque<NotificationRecord>>,
    capacity: Option<usize>,
}

impl NotificationStore {
    /// Unbounded store (the reference retention behavior).
    pub fn new() -> Self {
        Self::with_capacity(None)
    }

    /// Store that retains at most `capacity` records, evicting the oldest
    /// when full. `None` means unbounded.
    pub fn with_capacity(capacity: Option<usize>) -> Self {
        Self {
            records: RwLock::new(VecDeque::new()),
            capacity,
        }
    }

    /// Create and store a new immutable record. Rejects an empty message;
    /// on rejection the store is left untouched.
    pub fn append(
        &self,
        owner: impl Into<String>,
        message: impl Into<String>,
    ) -> HubResult<NotificationRecord> {
        let message = message.into();
        if message.is_empty() {
            return Err(HubError::invalid_argument("message cannot be empty"));
        }

        let record = NotificationRecord {
            id: Uuid::new_v4().to_string(),
            owner: owner.into(),
            message,
            timestamp: now_rfc3339(),
        };

        let mut records = self.records.write();
        if let Some(capacity) = self.capacity {
            while records.len() >= capacity.max(1) {
                records.pop_front();
            }
        }
        records.push_back(record.clone());
        debug!(id = %record.id, owner = %record.owner, total = records.len(), "notification appended");

        Ok(record)
    }

    /// All records whose owner key equals `owner`, in creation order.
    pub fn list_for(&self, owner: &str) -> Vec<NotificationRecord> {
        self.records
            .read()
            .iter()
            .filter(|r| r.owner == owner)
            .cloned()
            .collect()
    }

    /// The full log in creation order.
    pub fn list_all(&self) -> Vec<NotificationRecord> {
        self.records.read().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new()
    }
}
