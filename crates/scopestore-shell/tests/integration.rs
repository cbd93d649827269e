//! Integration tests: the full parse -> engine -> render pipeline.
//!
//! These tests drive a Session with the same text lines a user would
//! type and assert on the rendered output, covering the transactional
//! visibility rules end to end.

use scopestore_shell::Session;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Run a script line by line and collect every rendered output line.
fn run_script(session: &mut Session, script: &[&str]) -> Vec<String> {
    let mut all = Vec::new();
    for line in script {
        all.extend(session.execute_line(line));
    }
    all
}

// ---------------------------------------------------------------------------
// Basic operations, no transaction
// ---------------------------------------------------------------------------

#[test]
fn test_set_get_roundtrip() {
    let mut session = Session::new();
    let out = run_script(&mut session, &["SET name alice", "GET name"]);
    assert_eq!(out, vec!["> SET name alice", "> GET name", "alice"]);
}

#[test]
fn test_get_before_any_set() {
    let mut session = Session::new();
    assert_eq!(session.execute_line("GET nothing"), vec!["key not set"]);
}

#[test]
fn test_delete_roundtrip() {
    let mut session = Session::new();
    let out = run_script(
        &mut session,
        &["SET k v", "DELETE k", "GET k", "DELETE k"],
    );
    assert_eq!(
        out,
        vec!["> SET k v", "Deleted value: v", "key not set", "key not set"]
    );
}

#[test]
fn test_count_on_flat_store() {
    let mut session = Session::new();
    let out = run_script(
        &mut session,
        &["SET a 100", "SET b 100", "SET c 200", "COUNT 100", "COUNT 999"],
    );
    assert_eq!(out[3..], ["> COUNT 100", "2", "> COUNT 999", "0"]);
}

// ---------------------------------------------------------------------------
// Transaction lifecycle
// ---------------------------------------------------------------------------

#[test]
fn test_commit_flattens_nested_transactions() {
    let mut session = Session::new();
    run_script(&mut session, &["BEGIN", "BEGIN", "SET k v"]);
    assert_eq!(session.transaction_depth(), 2);

    assert_eq!(session.execute_line("COMMIT"), vec!["Commit successful"]);
    assert_eq!(session.execute_line("COMMIT"), vec!["Commit successful"]);
    assert_eq!(session.transaction_depth(), 0);

    // k=v landed in the backing store.
    assert_eq!(session.execute_line("GET k"), vec!["> GET k", "v"]);
}

#[test]
fn test_rollback_discards_scope() {
    let mut session = Session::new();
    run_script(&mut session, &["SET k before", "BEGIN", "SET k during"]);
    assert_eq!(session.execute_line("GET k"), vec!["> GET k", "during"]);

    assert_eq!(session.execute_line("ROLLBACK"), vec!["Rollback successful"]);
    assert_eq!(session.execute_line("GET k"), vec!["> GET k", "before"]);
}

#[test]
fn test_commit_and_rollback_without_transaction() {
    let mut session = Session::new();
    assert_eq!(session.execute_line("COMMIT"), vec!["no transaction"]);
    assert_eq!(session.execute_line("ROLLBACK"), vec!["no transaction"]);
    assert!(!session.has_active_transaction());
}

#[test]
fn test_active_transaction_flag_follows_depth() {
    let mut session = Session::new();
    assert!(!session.has_active_transaction());
    session.execute_line("BEGIN");
    session.execute_line("BEGIN");
    assert!(session.has_active_transaction());
    session.execute_line("COMMIT");
    assert!(session.has_active_transaction());
    session.execute_line("ROLLBACK");
    assert!(!session.has_active_transaction());
}

// ---------------------------------------------------------------------------
// Cross-frame visibility
// ---------------------------------------------------------------------------

#[test]
fn test_pending_delete_shadows_store_value() {
    let mut session = Session::new();
    run_script(&mut session, &["SET k v", "BEGIN", "DELETE k"]);

    // The scope never held k, so DELETE reports a miss, but the tombstone
    // shadows the store value for reads until the scope resolves.
    assert_eq!(session.execute_line("GET k"), vec!["key not set"]);

    session.execute_line("ROLLBACK");
    assert_eq!(session.execute_line("GET k"), vec!["> GET k", "v"]);
}

#[test]
fn test_nested_lookup_example() {
    // Values found by frame traversal and by fallthrough to the backing
    // store, with the stack left intact afterwards.
    let mut session = Session::new();
    run_script(
        &mut session,
        &[
            "SET a 1", "BEGIN", "BEGIN", "SET b 2", "BEGIN", "SET c 3",
        ],
    );
    assert_eq!(session.transaction_depth(), 3);

    assert_eq!(session.execute_line("GET b"), vec!["> GET b", "2"]);
    assert_eq!(session.execute_line("GET a"), vec!["> GET a", "1"]);
    assert_eq!(session.transaction_depth(), 3);
}

#[test]
fn test_count_aggregates_frames_and_store() {
    let mut session = Session::new();
    run_script(
        &mut session,
        &["SET a 100", "BEGIN", "SET b 100", "BEGIN", "SET c 100"],
    );
    assert_eq!(session.execute_line("COUNT 100"), vec!["> COUNT 100", "3"]);
}

#[test]
fn test_deleted_parent_key_resurfaces_in_child_scope() {
    // Documented quirk: only the top frame's tombstones are consulted, so
    // a deletion pending in a parent scope is invisible one scope deeper.
    let mut session = Session::new();
    run_script(&mut session, &["SET k v", "BEGIN", "DELETE k"]);
    assert_eq!(session.execute_line("GET k"), vec!["key not set"]);

    session.execute_line("BEGIN");
    assert_eq!(session.execute_line("GET k"), vec!["> GET k", "v"]);
}

#[test]
fn test_tombstone_survives_set_through_commit() {
    // Documented quirk: DELETE then SET in the same scope leaves the
    // tombstone recorded, and commit applies deletes last.
    let mut session = Session::new();
    run_script(
        &mut session,
        &["SET k old", "BEGIN", "DELETE k", "SET k new", "COMMIT"],
    );
    assert_eq!(session.execute_line("GET k"), vec!["key not set"]);
}

// ---------------------------------------------------------------------------
// Input handling
// ---------------------------------------------------------------------------

#[test]
fn test_blank_and_malformed_lines() {
    let mut session = Session::new();
    assert!(session.execute_line("").is_empty());
    assert!(session.execute_line("   \t ").is_empty());
    assert_eq!(
        session.execute_line("SET onlykey"),
        vec!["usage: SET <key> <value>"]
    );
    assert_eq!(session.execute_line("PURGE"), vec!["unknown command: PURGE"]);
}

#[test]
fn test_verbs_are_case_insensitive() {
    let mut session = Session::new();
    session.execute_line("set k v");
    assert_eq!(session.execute_line("get k"), vec!["> GET k", "v"]);
}

#[test]
fn test_full_session_transcript() {
    let mut session = Session::new();
    run_script(
        &mut session,
        &[
            "SET acct 100",
            "BEGIN",
            "SET acct 50",
            "GET acct",
            "ROLLBACK",
            "GET acct",
            "BEGIN",
            "DELETE acct",
            "COMMIT",
            "GET acct",
        ],
    );
    assert_eq!(
        session.output(),
        &[
            "> SET acct 100",
            "> SET acct 50",
            "> GET acct",
            "50",
            "Rollback successful",
            "> GET acct",
            "100",
            // DELETE inside the fresh scope: the scope itself holds no
            // value, so the command reports a miss while still recording
            // the tombstone that the commit then propagates.
            "key not set",
            "Commit successful",
            "key not set",
        ]
    );
}
