//! Key-value slot storage.
//!
//! Models browser `localStorage`: string keys map to string values, a set
//! overwrites, and values survive the process.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use roster_core::error::{Result, RosterError};

use super::atomic_json::AtomicJsonFile;

/// A persistent string-to-string store.
pub trait SlotStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Deletes `key`. Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;

    /// All keys currently present, in ascending order.
    fn keys(&self) -> Result<Vec<String>>;
}

type Slots = BTreeMap<String, String>;

/// Slot store backed by one JSON object file.
///
/// Every call goes to disk so separate processes see each other's writes.
pub struct FileSlotStore {
    file: AtomicJsonFile<Slots>,
}

impl FileSlotStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicJsonFile::new(path),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        self.file.path()
    }

    fn read_all(&self) -> Result<Slots> {
        Ok(self.file.load()?.unwrap_or_default())
    }
}

impl SlotStore for FileSlotStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.file.update(Slots::new(), |slots| {
            slots.insert(key.to_string(), value.to_string());
            Ok(())
        })?;
        tracing::debug!(key, bytes = value.len(), path = %self.path().display(), "Slot written");
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.file.update(Slots::new(), |slots| {
            slots.remove(key);
            Ok(())
        })?;
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.read_all()?.into_keys().collect())
    }
}

/// In-process slot store, used by tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemorySlotStore {
    slots: RwLock<Slots>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with `key` already holding `value`.
    pub fn with_item(key: &str, value: &str) -> Self {
        let mut slots = Slots::new();
        slots.insert(key.to_string(), value.to_string());
        Self {
            slots: RwLock::new(slots),
        }
    }
}

fn poisoned<E: std::fmt::Display>(err: E) -> RosterError {
    RosterError::storage(format!("Slot store lock poisoned: {}", err))
}

impl SlotStore for MemorySlotStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let slots = self.slots.read().map_err(poisoned)?;
        Ok(slots.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut slots = self.slots.write().map_err(poisoned)?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut slots = self.slots.write().map_err(poisoned)?;
        slots.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        let slots = self.slots.read().map_err(poisoned)?;
        Ok(slots.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn exercise(store: &dyn SlotStore) {
        assert_eq!(store.get_item("employees").unwrap(), None);

        store.set_item("employees", "[]").unwrap();
        store.set_item("theme", "dark").unwrap();
        assert_eq!(store.get_item("employees").unwrap().as_deref(), Some("[]"));

        store.set_item("employees", "[1]").unwrap();
        assert_eq!(store.get_item("employees").unwrap().as_deref(), Some("[1]"));
        assert_eq!(store.keys().unwrap(), vec!["employees", "theme"]);

        store.remove_item("theme").unwrap();
        store.remove_item("never-set").unwrap();
        assert_eq!(store.keys().unwrap(), vec!["employees"]);
    }

    #[test]
    fn test_memory_store_semantics() {
        exercise(&MemorySlotStore::new());
    }

    #[test]
    fn test_file_store_semantics() {
        let temp_dir = TempDir::new().unwrap();
        exercise(&FileSlotStore::new(temp_dir.path().join("local_storage.json")));
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("local_storage.json");

        FileSlotStore::new(path.clone()).set_item("employees", "[]").unwrap();

        let reopened = FileSlotStore::new(path);
        assert_eq!(reopened.get_item("employees").unwrap().as_deref(), Some("[]"));
    }
}
