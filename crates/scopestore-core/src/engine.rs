//! Transaction engine — the heart of ScopeStore.
//!
//! ScopeStoreEngine combines a backing store with an ordered stack of
//! transaction frames and routes every operation by stack depth:
//!
//! **Depth 0**: operations go straight to the backing store.
//! **Depth > 0**: writes land in the top frame's overlay, reads see
//! through the open frames down to the store, and commit flattens the
//! top frame directly into the store regardless of nesting depth.
//!
//! All public methods take `&self`; one exclusive Mutex covers the stack
//! and the store together, so multi-step traversals never interleave with
//! a concurrent mutation.

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{ScopeError, ScopeResult};
use crate::frame::Frame;
use crate::stack::FrameStack;
use crate::store::{BackingStore, MemoryStore};

/// Core transaction engine: frame stack + backing store behind one lock.
pub struct ScopeStoreEngine<S: BackingStore = MemoryStore> {
    /// Stack and store move together — every operation, including the
    /// multi-frame scan in `get`/`count`, runs under this single lock.
    inner: Mutex<Inner<S>>,
    config: Config,
}

struct Inner<S> {
    stack: FrameStack,
    store: S,
}

impl ScopeStoreEngine<MemoryStore> {
    /// Create an engine over a fresh in-memory store.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create an engine over a fresh in-memory store with `config`.
    pub fn with_config(config: Config) -> Self {
        let store = MemoryStore::with_capacity(config.store_capacity);
        Self::with_store(store, config)
    }
}

impl Default for ScopeStoreEngine<MemoryStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BackingStore> ScopeStoreEngine<S> {
    /// Create an engine over an explicitly owned backing store.
    ///
    /// The engine takes sole ownership; nothing else may mutate the store
    /// while the engine is alive.
    pub fn with_store(store: S, config: Config) -> Self {
        Self {
            inner: Mutex::new(Inner {
                stack: FrameStack::new(),
                store,
            }),
            config,
        }
    }

    /// Open a new transaction scope. Always succeeds.
    pub fn begin(&self) {
        let mut inner = self.inner.lock();
        inner.stack.push(Frame::with_capacity(self.config.frame_capacity));
        let depth = inner.stack.depth();
        debug!(depth, "transaction opened");
        if depth > self.config.depth_warn_threshold {
            warn!(
                depth,
                threshold = self.config.depth_warn_threshold,
                "transaction nesting unusually deep"
            );
        }
    }

    /// Write `key = value` into the active scope, or straight into the
    /// backing store at depth 0. Returns the written value.
    ///
    /// Inside a transaction this never touches an existing tombstone for
    /// the key: if the key was deleted earlier in the same scope, the
    /// tombstone stays recorded and wins at commit time.
    pub fn set(&self, key: &str, value: &str) -> ScopeResult<String> {
        let mut inner = self.inner.lock();
        match inner.stack.top_mut() {
            Some(frame) => {
                frame.put(key, value);
                Ok(value.to_string())
            }
            None => inner.store.save(key, value),
        }
    }

    /// Read `key` through the open scopes down to the backing store.
    ///
    /// Visibility rules, in order:
    /// 1. A tombstone in the top frame shadows everything below it.
    /// 2. The top frame's overlay.
    /// 3. Each lower frame's overlay, scanned top-down. Tombstones of
    ///    those frames are NOT consulted — a key deleted in a parent
    ///    scope can resurface from an older ancestor or the store.
    /// 4. The backing store.
    pub fn get(&self, key: &str) -> ScopeResult<String> {
        let inner = self.inner.lock();
        let top = match inner.stack.top() {
            Some(top) => top,
            None => return inner.store.retrieve(key),
        };

        if top.is_tombstoned(key) {
            // Pending in-scope deletion: report absent even though the key
            // may still exist in a parent frame or the store.
            return Err(ScopeError::key_not_found(key));
        }

        if let Some(value) = top.get(key) {
            return Ok(value.to_string());
        }

        for frame in inner.stack.iter_parents_top_down() {
            if let Some(value) = frame.get(key) {
                return Ok(value.to_string());
            }
        }

        inner.store.retrieve(key)
    }

    /// Delete `key` in the active scope, or from the backing store at
    /// depth 0. Returns the value removed from the consulted scope.
    ///
    /// Inside a transaction the tombstone is recorded whether or not the
    /// top frame held the key, so the deletion propagates at commit; the
    /// returned result reports only whether *this scope* held a value.
    pub fn delete(&self, key: &str) -> ScopeResult<String> {
        let mut inner = self.inner.lock();
        match inner.stack.top_mut() {
            Some(frame) => match frame.mark_deleted(key) {
                Some(removed) => Ok(removed),
                None => Err(ScopeError::key_not_found(key)),
            },
            None => inner.store.delete(key),
        }
    }

    /// Count occurrences of `value` across every open frame's overlay plus
    /// the backing store.
    ///
    /// Tombstoned keys are not excluded: a key pending deletion whose
    /// stored value equals `value` still contributes to the sum.
    pub fn count(&self, value: &str) -> ScopeResult<usize> {
        let inner = self.inner.lock();
        let mut total = 0;
        for frame in inner.stack.iter_top_down() {
            total += frame.count_by_value(value);
        }

        let store_count = inner.store.count_by_value(value).map_err(|err| {
            ScopeError::Operation { message: err.to_string() }
        })?;

        Ok(total + store_count)
    }

    /// Close the active scope and flatten it straight into the backing
    /// store, bypassing any parent frames.
    ///
    /// All overlay entries are saved first, then all tombstoned keys are
    /// deleted, so a tombstone recorded in the committed frame wins over a
    /// same-frame write. Per-key propagation is best-effort: the commit
    /// succeeds once the frame is popped, whatever each write reported.
    pub fn commit(&self) -> ScopeResult<()> {
        let mut inner = self.inner.lock();
        let frame = inner
            .stack
            .pop()
            .ok_or(ScopeError::NoActiveTransaction { operation: "commit" })?;

        for (key, value) in frame.overlay_entries() {
            if let Err(err) = inner.store.save(key, value) {
                debug!(key, %err, "commit write not propagated");
            }
        }

        for key in frame.tombstoned_keys() {
            // Absence is expected when the key only ever lived in frames.
            if let Err(err) = inner.store.delete(key) {
                if !err.is_not_found() {
                    debug!(key, %err, "commit delete not propagated");
                }
            }
        }

        debug!(
            depth = inner.stack.depth(),
            writes = frame.overlay_len(),
            deletes = frame.tombstone_len(),
            "transaction committed"
        );
        Ok(())
    }

    /// Close the active scope and discard its pending mutations.
    pub fn rollback(&self) -> ScopeResult<()> {
        let mut inner = self.inner.lock();
        let frame = inner
            .stack
            .pop()
            .ok_or(ScopeError::NoActiveTransaction { operation: "rollback" })?;

        debug!(
            depth = inner.stack.depth(),
            discarded_writes = frame.overlay_len(),
            discarded_deletes = frame.tombstone_len(),
            "transaction rolled back"
        );
        Ok(())
    }

    /// Number of currently open transaction scopes.
    pub fn transactions_count(&self) -> usize {
        self.inner.lock().stack.depth()
    }

    /// True when at least one transaction scope is open.
    pub fn has_active_transaction(&self) -> bool {
        !self.inner.lock().stack.is_empty()
    }
}
