//! Transaction frame — one nested scope's pending mutations.
//!
//! A frame holds an overlay map of pending writes plus a tombstone set of
//! keys marked for deletion. The two are deliberately independent: a key
//! can be tombstoned without ever appearing in the overlay (delete before
//! set in the scope), and a later `put` on a tombstoned key does NOT clear
//! the tombstone. Commit applies overlay writes before tombstone deletes,
//! so a tombstone recorded in the same frame wins.

use hashbrown::{HashMap, HashSet};

/// Pending mutations for one open transaction scope.
#[derive(Debug, Default, Clone)]
pub struct Frame {
    overlay: HashMap<String, String>,
    tombstones: HashSet<String>,
}

impl Frame {
    /// Create an empty frame.
    pub fn new() -> Self {
        Self {
            overlay: HashMap::new(),
            tombstones: HashSet::new(),
        }
    }

    /// Create an empty frame with room for `capacity` overlay entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            overlay: HashMap::with_capacity(capacity),
            tombstones: HashSet::new(),
        }
    }

    /// Record a pending write. Leaves any existing tombstone in place.
    pub fn put(&mut self, key: &str, value: &str) {
        self.overlay.insert(key.to_string(), value.to_string());
    }

    /// Mark `key` for deletion.
    ///
    /// Removes the key from the overlay if present, returning the removed
    /// value. The tombstone is recorded unconditionally so the deletion
    /// propagates on commit even when this scope never held the key.
    pub fn mark_deleted(&mut self, key: &str) -> Option<String> {
        let removed = self.overlay.remove(key);
        self.tombstones.insert(key.to_string());
        removed
    }

    /// Pending value for `key` in this scope, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.overlay.get(key).map(String::as_str)
    }

    /// True when `key` is marked for deletion in this scope.
    pub fn is_tombstoned(&self, key: &str) -> bool {
        self.tombstones.contains(key)
    }

    /// Number of pending writes whose value equals `value` exactly.
    pub fn count_by_value(&self, value: &str) -> usize {
        self.overlay.values().filter(|v| v.as_str() == value).count()
    }

    /// Pending writes, in no particular order.
    pub fn overlay_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.overlay.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Keys marked for deletion, in no particular order.
    pub fn tombstoned_keys(&self) -> impl Iterator<Item = &str> {
        self.tombstones.iter().map(String::as_str)
    }

    /// Number of pending writes in this scope.
    pub fn overlay_len(&self) -> usize {
        self.overlay.len()
    }

    /// Number of keys marked for deletion in this scope.
    pub fn tombstone_len(&self) -> usize {
        self.tombstones.len()
    }
}
