//! ScopeStore Shell — line-oriented command layer over the engine.
//!
//! Translates `SET/GET/DELETE/COUNT/BEGIN/COMMIT/ROLLBACK` text lines
//! into engine calls and renders results as human-readable output. All
//! transactional logic lives in `scopestore-core`; this crate is a thin
//! parse-execute-render loop.

pub mod command;
pub mod session;

pub use command::{Command, ParseError};
pub use session::Session;
