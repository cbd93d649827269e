//! Error types for ScopeStore operations
//!
//! All ScopeStore errors are represented by the ScopeError enum. The
//! in-memory backing store only ever produces `KeyNotFound`, but the
//! taxonomy reserves backend-failure kinds so a future persistent store
//! can report real I/O problems through the same surface.

use std::error::Error;
use std::fmt;

/// ScopeStore error types with context for the failing operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeError {
    /// The key was absent in every scope consulted by the operation
    KeyNotFound {
        /// The key that was requested
        key: String,
    },

    /// `commit` or `rollback` was invoked with no open transaction
    NoActiveTransaction {
        /// The operation that required an open transaction
        operation: &'static str,
    },

    /// The backing store failed to persist a key-value pair
    Insertion {
        /// The key being written
        key: String,
        /// Backend-supplied description
        message: String,
    },

    /// The backing store failed while looking up a key
    Retrieval {
        /// The key being read
        key: String,
        /// Backend-supplied description
        message: String,
    },

    /// The backing store failed while removing a key
    Deletion {
        /// The key being removed
        key: String,
        /// Backend-supplied description
        message: String,
    },

    /// The backing store failed during an aggregate operation
    Operation {
        /// Backend-supplied description
        message: String,
    },
}

impl fmt::Display for ScopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopeError::KeyNotFound { key } => {
                write!(f, "Key not found: {:?}", key)
            }

            ScopeError::NoActiveTransaction { operation } => {
                write!(f, "No active transaction for {}", operation)
            }

            ScopeError::Insertion { key, message } => {
                write!(f, "Insertion failed for key {:?}: {}", key, message)
            }

            ScopeError::Retrieval { key, message } => {
                write!(f, "Retrieval failed for key {:?}: {}", key, message)
            }

            ScopeError::Deletion { key, message } => {
                write!(f, "Deletion failed for key {:?}: {}", key, message)
            }

            ScopeError::Operation { message } => {
                write!(f, "Store operation failed: {}", message)
            }
        }
    }
}

impl Error for ScopeError {}

impl ScopeError {
    /// True when the error only means the key was absent, as opposed to
    /// a real backend failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ScopeError::KeyNotFound { .. })
    }

    /// Construct `KeyNotFound` without spelling out the struct variant.
    pub fn key_not_found(key: impl Into<String>) -> Self {
        ScopeError::KeyNotFound { key: key.into() }
    }
}

/// Result type alias for ScopeStore operations
pub type ScopeResult<T> = Result<T, ScopeError>;
