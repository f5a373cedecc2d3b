//! Admin activity log.
//!
//! An append-only list of human-readable actions, newest first, capped at
//! [`ACTIVITY_LOG_LIMIT`] entries and written through to local storage on
//! every append. It is never sent to the content store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::PortfolioResult;
use crate::persist::{KeyValueStore, ACTIVITY_LOG_KEY};

pub const ACTIVITY_LOG_LIMIT: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub at: DateTime<Utc>,
    pub message: String,
}

pub struct ActivityLog<K: KeyValueStore> {
    kv: K,
    entries: Vec<ActivityEntry>,
}

impl<K: KeyValueStore> ActivityLog<K> {
    /// Load the persisted log. A missing or corrupt value starts empty.
    pub fn load(kv: K) -> Self {
        let entries = match kv.get(ACTIVITY_LOG_KEY) {
            Ok(Some(json)) => serde_json::from_str::<Vec<ActivityEntry>>(&json).unwrap_or_else(|e| {
                warn!("Discarding unreadable activity log: {}", e);
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read activity log: {}", e);
                Vec::new()
            }
        };
        let mut log = Self { kv, entries };
        log.entries.truncate(ACTIVITY_LOG_LIMIT);
        log
    }

    pub fn entries(&self) -> &[ActivityEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record an action now.
    pub fn append(&mut self, message: impl Into<String>) -> PortfolioResult<()> {
        self.append_at(Utc::now(), message)
    }

    pub fn append_at(&mut self, at: DateTime<Utc>, message: impl Into<String>) -> PortfolioResult<()> {
        self.entries.insert(
            0,
            ActivityEntry {
                at,
                message: message.into(),
            },
        );
        self.entries.truncate(ACTIVITY_LOG_LIMIT);
        self.persist()
    }

    pub fn clear(&mut self) -> PortfolioResult<()> {
        self.entries.clear();
        self.persist()
    }

    fn persist(&self) -> PortfolioResult<()> {
        let json = serde_json::to_string(&self.entries)?;
        self.kv.set(ACTIVITY_LOG_KEY, &json)
    }
}
