use std::fs;

use tape_core::ledger::{CommitOutcome, Key, KeyOutcome, Mode, Replacement, Theme};
use tape_core::storage::{JsonFileStore, SnapshotStore};
use tape_core::Ledger;
use tempfile::TempDir;

fn open(dir: &TempDir) -> Ledger<JsonFileStore> {
    Ledger::open(JsonFileStore::new(dir.path().join("tape.json")))
}

#[test]
fn test_entries_survive_reopen() {
    let dir = TempDir::new().expect("temp dir should be created");

    let id = {
        let mut ledger = open(&dir);
        ledger.set_theme(Theme::Light);
        ledger.set_expr("19,99*3");
        let id = match ledger.commit(Some("socks")).expect("commit should succeed") {
            CommitOutcome::Added(id) => id,
            other => panic!("unexpected outcome {:?}", other),
        };
        ledger.set_expr("100-");
        id
    };

    let ledger = open(&dir);
    assert_eq!(ledger.theme(), Theme::Light);
    assert_eq!(ledger.current_expr(), "100-");
    let entry = ledger.find_entry(id).expect("entry should be restored");
    assert_eq!(entry.label, "socks");
    assert!((entry.value - 59.97).abs() < 1e-9);
    assert!((ledger.total() - 59.97).abs() < 1e-9);
}

#[test]
fn test_pending_label_is_not_persisted() {
    let dir = TempDir::new().expect("temp dir should be created");

    {
        let mut ledger = open(&dir);
        ledger.set_expr("8");
        assert_eq!(
            ledger.commit(None).expect("commit should succeed"),
            CommitOutcome::AwaitingLabel
        );
    }

    let ledger = open(&dir);
    assert_eq!(ledger.mode(), Mode::Idle);
    assert!(ledger.entries().is_empty());
    assert_eq!(ledger.current_expr(), "8");
}

#[test]
fn test_edit_delete_and_reset_persist() {
    let dir = TempDir::new().expect("temp dir should be created");
    let mut ledger = open(&dir);

    ledger.set_expr("1");
    ledger.commit(Some("one")).expect("commit should succeed");
    ledger.set_expr("2");
    ledger.commit(Some("two")).expect("commit should succeed");

    let newest = ledger.entries()[0].id;
    let oldest = ledger.entries()[1].id;
    ledger
        .edit_entry(oldest, Replacement::Value(10.0), "ten")
        .expect("edit should succeed");
    assert!(ledger.delete_entry(newest));

    let reopened = open(&dir);
    assert_eq!(reopened.entries().len(), 1);
    assert_eq!(reopened.entries()[0].label, "ten");
    assert_eq!(reopened.entries()[0].expr, "10,00");
    assert_eq!(reopened.total(), 10.0);

    ledger.reset();
    let reopened = open(&dir);
    assert!(reopened.entries().is_empty());
    assert_eq!(reopened.total(), 0.0);
}

#[test]
fn test_keypad_session_persists_expression() {
    let dir = TempDir::new().expect("temp dir should be created");

    {
        let mut ledger = open(&dir);
        for key in tape_core::ledger::parse_keys("7 × 6 =").expect("keys should parse") {
            ledger.append_key(key);
        }
        assert_eq!(ledger.current_expr(), "42");
        assert!(matches!(ledger.append_key(Key::Backspace), KeyOutcome::Changed));
    }

    assert_eq!(open(&dir).current_expr(), "4");
}

#[test]
fn test_malformed_file_opens_empty() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = dir.path().join("tape.json");
    fs::write(&path, "{ this is not json").expect("write should succeed");

    let mut ledger = Ledger::open(JsonFileStore::new(&path));
    assert!(ledger.entries().is_empty());
    assert_eq!(ledger.total(), 0.0);

    // The next change overwrites the damaged file
    ledger.set_expr("1+1");
    let store = JsonFileStore::new(&path);
    let snapshot = store
        .load()
        .expect("load should succeed")
        .expect("snapshot should exist");
    assert_eq!(snapshot.expr, "1+1");
}

#[test]
fn test_partly_damaged_file_keeps_good_entries() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = dir.path().join("tape.json");
    fs::write(
        &path,
        r#"{
            "theme": "sepia",
            "expr": ["not", "a", "string"],
            "entries": [
                {"id": "7a2e3c0b-1234-4678-9abc-def012345678", "expr": "2+2", "value": 4.0, "label": "ok"},
                {"id": "8b2e3c0b-1234-4678-9abc-def012345678", "expr": "1/0", "value": "Infinity"},
                "garbage",
                {"expr": "no id", "value": 1.0}
            ]
        }"#,
    )
    .expect("write should succeed");

    let ledger = Ledger::open(JsonFileStore::new(&path));
    assert_eq!(ledger.theme(), Theme::Dark);
    assert_eq!(ledger.current_expr(), "");
    assert_eq!(ledger.entries().len(), 1);
    assert_eq!(ledger.entries()[0].label, "ok");
    assert_eq!(ledger.total(), 4.0);
}

#[test]
fn test_export_text_from_disk() {
    let dir = TempDir::new().expect("temp dir should be created");

    {
        let mut ledger = open(&dir);
        ledger.set_expr("1200");
        ledger.commit(Some("rent")).expect("commit should succeed");
        ledger.set_expr("-0,5");
        ledger.commit(None).expect("commit should succeed");
        ledger.resolve_label(true, "").expect("resolve should succeed");
    }

    assert_eq!(
        open(&dir).export_text(),
        "1\u{2009}200 | 1200 — rent\n-0,5 | -0,5\n= 1\u{2009}199,5"
    );
}
