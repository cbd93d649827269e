//! ScopeStore Core — In-Memory Transactional Key-Value Engine
//!
//! A key-value store with nested, stack-scoped transactions: open
//! successive scopes with `begin`, mutate keys inside each, then either
//! flatten the pending mutations into the backing store (`commit`) or
//! discard them (`rollback`). Reads see through open scopes down to the
//! backing store.
//!
//! # Architecture
//!
//! - **Backing store**: the root key-value mapping, behind the
//!   [`BackingStore`] trait so a persistent backend can slot in later
//! - **Frame**: one scope's pending writes (overlay) and pending
//!   deletions (tombstones)
//! - **Frame stack**: ordered open scopes, most recent on top
//! - **Engine**: routes every operation by stack depth and implements
//!   the cross-frame visibility rules
//!
//! # Single-owner model
//!
//! The engine holds its stack and store behind one exclusive lock, so it
//! is safe to share between threads; operations observe a total order.

pub mod config;
pub mod engine;
pub mod error;
pub mod frame;
pub mod stack;
pub mod store;

// Re-export key types for convenience
pub use config::Config;
pub use engine::ScopeStoreEngine;
pub use error::{ScopeError, ScopeResult};
pub use frame::Frame;
pub use stack::FrameStack;
pub use store::{BackingStore, MemoryStore};
