//! Backing store — the root, unscoped key-value mapping.
//!
//! The engine talks to the store through the `BackingStore` trait so a
//! future persistent backend can slot in without touching engine logic.
//! `MemoryStore` is the canonical implementation: a flat hashbrown map
//! that never fails beyond `KeyNotFound`.

use hashbrown::HashMap;

use crate::error::{ScopeError, ScopeResult};

/// Capability the engine requires from the root store.
///
/// Implementations report absence as `KeyNotFound`; the remaining error
/// kinds (`Insertion`, `Retrieval`, `Deletion`, `Operation`) are reserved
/// for backends that can genuinely fail.
pub trait BackingStore {
    /// Insert or overwrite a key-value pair, returning the stored value.
    fn save(&mut self, key: &str, value: &str) -> ScopeResult<String>;

    /// Look up the value for `key`.
    fn retrieve(&self, key: &str) -> ScopeResult<String>;

    /// Remove `key`, returning the value it held.
    fn delete(&mut self, key: &str) -> ScopeResult<String>;

    /// Number of entries whose value equals `value` exactly.
    fn count_by_value(&self, value: &str) -> ScopeResult<usize>;

    /// Number of entries in the store.
    fn len(&self) -> usize;

    /// True when the store holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory backing store over a hashbrown hash table.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    /// Create an empty store with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: HashMap::with_capacity(capacity) }
    }
}

impl BackingStore for MemoryStore {
    fn save(&mut self, key: &str, value: &str) -> ScopeResult<String> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(value.to_string())
    }

    fn retrieve(&self, key: &str) -> ScopeResult<String> {
        self.entries
            .get(key)
            .cloned()
            .ok_or_else(|| ScopeError::key_not_found(key))
    }

    fn delete(&mut self, key: &str) -> ScopeResult<String> {
        self.entries
            .remove(key)
            .ok_or_else(|| ScopeError::key_not_found(key))
    }

    fn count_by_value(&self, value: &str) -> ScopeResult<usize> {
        Ok(self.entries.values().filter(|v| v.as_str() == value).count())
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_retrieve() {
        let mut store = MemoryStore::new();
        assert_eq!(store.save("k", "v").unwrap(), "v");
        assert_eq!(store.retrieve("k").unwrap(), "v");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_save_overwrites() {
        let mut store = MemoryStore::new();
        store.save("k", "v1").unwrap();
        store.save("k", "v2").unwrap();
        assert_eq!(store.retrieve("k").unwrap(), "v2");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_retrieve_missing() {
        let store = MemoryStore::new();
        let err = store.retrieve("ghost").unwrap_err();
        assert_eq!(err, ScopeError::key_not_found("ghost"));
    }

    #[test]
    fn test_delete_returns_previous_value() {
        let mut store = MemoryStore::new();
        store.save("k", "v").unwrap();
        assert_eq!(store.delete("k").unwrap(), "v");
        assert!(store.is_empty());
        assert!(store.delete("k").unwrap_err().is_not_found());
    }

    #[test]
    fn test_count_by_value() {
        let mut store = MemoryStore::new();
        assert_eq!(store.count_by_value("100").unwrap(), 0);

        store.save("a", "100").unwrap();
        store.save("b", "100").unwrap();
        store.save("c", "200").unwrap();

        assert_eq!(store.count_by_value("100").unwrap(), 2);
        assert_eq!(store.count_by_value("200").unwrap(), 1);
        assert_eq!(store.count_by_value("300").unwrap(), 0);
    }

    #[test]
    fn test_count_exact_equality() {
        let mut store = MemoryStore::new();
        store.save("a", "100").unwrap();
        assert_eq!(store.count_by_value("10").unwrap(), 0);
        assert_eq!(store.count_by_value("1000").unwrap(), 0);
    }
}
