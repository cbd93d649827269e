//! Shell session: executes commands against an engine and renders the
//! results as the human-readable lines the shell prints.
//!
//! The renderings are deliberately plain ("key not set", "no transaction")
//! and double as the stable output contract tested by the integration
//! suite.

use scopestore_core::{BackingStore, MemoryStore, ScopeStoreEngine};

use crate::command::{Command, ParseError};

/// One interactive session: an engine plus the rolling output log.
pub struct Session<S: BackingStore = MemoryStore> {
    engine: ScopeStoreEngine<S>,
    output: Vec<String>,
}

impl Session<MemoryStore> {
    /// Start a session over a fresh in-memory engine.
    pub fn new() -> Self {
        Self::with_engine(ScopeStoreEngine::new())
    }
}

impl Default for Session<MemoryStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BackingStore> Session<S> {
    /// Start a session over an existing engine.
    pub fn with_engine(engine: ScopeStoreEngine<S>) -> Self {
        Self { engine, output: Vec::new() }
    }

    /// Parse and execute one input line, returning the lines it produced.
    pub fn execute_line(&mut self, line: &str) -> Vec<String> {
        match Command::parse(line) {
            Ok(command) => self.execute(command),
            Err(ParseError::Empty) => Vec::new(),
            Err(err) => {
                let rendered = vec![err.to_string()];
                self.output.extend(rendered.iter().cloned());
                rendered
            }
        }
    }

    /// Execute a parsed command, returning the lines it produced.
    pub fn execute(&mut self, command: Command) -> Vec<String> {
        let lines = match command {
            Command::Set { key, value } => self.handle_set(&key, &value),
            Command::Get { key } => self.handle_get(&key),
            Command::Delete { key } => self.handle_delete(&key),
            Command::Count { value } => self.handle_count(&value),
            Command::Begin => {
                self.engine.begin();
                Vec::new()
            }
            Command::Commit => match self.engine.commit() {
                Ok(()) => vec!["Commit successful".to_string()],
                Err(_) => vec!["no transaction".to_string()],
            },
            Command::Rollback => match self.engine.rollback() {
                Ok(()) => vec!["Rollback successful".to_string()],
                Err(_) => vec!["no transaction".to_string()],
            },
        };

        self.output.extend(lines.iter().cloned());
        lines
    }

    fn handle_set(&self, key: &str, value: &str) -> Vec<String> {
        match self.engine.set(key, value) {
            Ok(inserted) => vec![format!("> SET {} {}", key, inserted)],
            Err(_) => vec!["Insertion error".to_string()],
        }
    }

    fn handle_get(&self, key: &str) -> Vec<String> {
        match self.engine.get(key) {
            Ok(value) => vec![format!("> GET {}", key), value],
            Err(err) if err.is_not_found() => vec!["key not set".to_string()],
            Err(_) => vec!["Retrieval error".to_string()],
        }
    }

    fn handle_delete(&self, key: &str) -> Vec<String> {
        match self.engine.delete(key) {
            Ok(deleted) => vec![format!("Deleted value: {}", deleted)],
            Err(err) if err.is_not_found() => vec!["key not set".to_string()],
            Err(_) => vec!["Deletion error".to_string()],
        }
    }

    fn handle_count(&self, value: &str) -> Vec<String> {
        match self.engine.count(value) {
            Ok(total) => vec![format!("> COUNT {}", value), total.to_string()],
            Err(_) => vec!["Error in operation".to_string()],
        }
    }

    /// Every line produced so far, oldest first.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// True when the engine has at least one open transaction.
    pub fn has_active_transaction(&self) -> bool {
        self.engine.has_active_transaction()
    }

    /// Current transaction depth.
    pub fn transaction_depth(&self) -> usize {
        self.engine.transactions_count()
    }

    /// The underlying engine, for callers that outgrow the line protocol.
    pub fn engine(&self) -> &ScopeStoreEngine<S> {
        &self.engine
    }
}
