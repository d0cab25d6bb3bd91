//! In-process store, used by tests and by callers embedding awsenv.

use std::cell::RefCell;
use std::collections::BTreeMap;

use super::SecretStore;
use crate::error::Result;

/// [`SecretStore`] holding entries in a map for the life of the value.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every key currently stored, in sorted order.
    pub fn keys(&self) -> Vec<String> {
        self.entries.borrow().keys().cloned().collect()
    }

    /// Raw value of a key, bypassing the trait.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl SecretStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_is_distinct_from_empty() {
        let store = MemoryStore::new();
        assert_eq!(store.get("dev").unwrap(), None);

        store.set("dev", "").unwrap();
        assert_eq!(store.get("dev").unwrap(), Some(String::new()));
    }

    #[test]
    fn test_delete_absent_is_ok() {
        let store = MemoryStore::new();
        store.delete("nope").unwrap();
        store.set("dev", "{}").unwrap();
        store.delete("dev").unwrap();
        assert!(store.keys().is_empty());
    }
}
