//! Local key-value persistence.
//!
//! The admin session flag and the activity log survive restarts through a
//! [`KeyValueStore`]. Production uses [`RedbKv`]; tests inject [`MemoryKv`].

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, TableDefinition};

use crate::error::PortfolioResult;

/// Persisted admin session flag.
pub const AUTH_KEY: &str = "admin_authenticated";
/// Persisted activity log (JSON array).
pub const ACTIVITY_LOG_KEY: &str = "admin_activity_log";

const PREFERENCES_TABLE: TableDefinition<&str, &str> = TableDefinition::new("preferences");

/// Read/write strings by key.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> PortfolioResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> PortfolioResult<()>;
    fn remove(&self, key: &str) -> PortfolioResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> PortfolioResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> PortfolioResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> PortfolioResult<()> {
        (**self).remove(key)
    }
}

/// Volatile store, for tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryKv {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKv {
    fn get(&self, key: &str) -> PortfolioResult<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> PortfolioResult<()> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> PortfolioResult<()> {
        self.entries.write().remove(key);
        Ok(())
    }
}

/// Durable store in a single redb file.
#[derive(Clone)]
pub struct RedbKv {
    db: Arc<RwLock<Database>>,
}

impl RedbKv {
    /// Open or create the database at `path`.
    ///
    /// Creates the parent directory and the preferences table if needed.
    pub fn open(path: impl AsRef<Path>) -> PortfolioResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(PREFERENCES_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }
}

impl KeyValueStore for RedbKv {
    fn get(&self, key: &str) -> PortfolioResult<Option<String>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(PREFERENCES_TABLE)?;
        let value = table.get(key)?.map(|v| v.value().to_string());
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> PortfolioResult<()> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(PREFERENCES_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn remove(&self, key: &str) -> PortfolioResult<()> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(PREFERENCES_TABLE)?;
            table.remove(key)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_kv() {
        let kv = MemoryKv::new();
        assert_eq!(kv.get("k").unwrap(), None);
        kv.set("k", "v").unwrap();
        assert_eq!(kv.get("k").unwrap().as_deref(), Some("v"));
        kv.remove("k").unwrap();
        assert_eq!(kv.get("k").unwrap(), None);
    }

    #[test]
    fn test_redb_kv_persists_across_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("prefs.redb");

        {
            let kv = RedbKv::open(&path).unwrap();
            kv.set(AUTH_KEY, "true").unwrap();
        }

        let kv = RedbKv::open(&path).unwrap();
        assert_eq!(kv.get(AUTH_KEY).unwrap().as_deref(), Some("true"));
        kv.remove(AUTH_KEY).unwrap();
        assert_eq!(kv.get(AUTH_KEY).unwrap(), None);
    }

    #[test]
    fn test_redb_kv_overwrite() {
        let dir = TempDir::new().unwrap();
        let kv = RedbKv::open(dir.path().join("prefs.redb")).unwrap();
        kv.set("k", "one").unwrap();
        kv.set("k", "two").unwrap();
        assert_eq!(kv.get("k").unwrap().as_deref(), Some("two"));
    }
}
