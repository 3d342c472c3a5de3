// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use pocketledger::models::Transaction;
use pocketledger::store::{SqliteStore, STORAGE_KEY};
use rusqlite::Connection;
use tempfile::tempdir;

fn tx(id: &str, r#type: &str, amount: f64, category: &str, date: &str) -> Transaction {
    Transaction {
        id: id.into(),
        r#type: r#type.into(),
        amount,
        category: category.into(),
        note: String::new(),
        date: date.parse::<DateTime<Utc>>().unwrap(),
    }
}

#[test]
fn open_in_memory_starts_empty() {
    let store = SqliteStore::open_in_memory().unwrap();
    assert!(store.load().is_empty());
    assert!(store.raw_document().unwrap().is_none());
}

#[test]
fn save_then_load_round_trips() {
    let store = SqliteStore::open_in_memory().unwrap();
    let entries = vec![
        tx("a", "expense", 12.5, "food", "2025-03-02T08:00:00Z"),
        tx("b", "income", 1000.0, "salary", "2025-03-01T09:30:00Z"),
    ];
    store.save(&entries);
    assert_eq!(store.load(), entries);
}

#[test]
fn save_replaces_whole_document() {
    let store = SqliteStore::open_in_memory().unwrap();
    store.save(&[tx("a", "expense", 1.0, "food", "2025-03-02T08:00:00Z")]);
    store.save(&[tx("b", "income", 2.0, "salary", "2025-03-03T08:00:00Z")]);
    let loaded = store.load();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, "b");
}

#[test]
fn corrupt_document_loads_empty_and_is_replaced_on_save() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ledger.sqlite");

    {
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch("CREATE TABLE kv(key TEXT PRIMARY KEY, value TEXT NOT NULL);")
            .unwrap();
        conn.execute(
            "INSERT INTO kv(key, value) VALUES(?1, ?2)",
            rusqlite::params![STORAGE_KEY, "{not json"],
        )
        .unwrap();
    }

    let store = SqliteStore::open(&path).unwrap();
    assert!(store.load().is_empty());

    store.save(&[tx("a", "income", 5.0, "salary", "2025-03-01T00:00:00Z")]);
    let raw = store.raw_document().unwrap().unwrap();
    let parsed: Vec<Transaction> = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].id, "a");
}

#[test]
fn entry_without_date_poisons_document() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ledger.sqlite");

    {
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch("CREATE TABLE kv(key TEXT PRIMARY KEY, value TEXT NOT NULL);")
            .unwrap();
        conn.execute(
            "INSERT INTO kv(key, value) VALUES(?1, ?2)",
            rusqlite::params![
                STORAGE_KEY,
                r#"[{"id":"a","type":"income","amount":5,"category":"salary","note":"","date":"2025-03-01T00:00:00Z"},
                    {"id":"b","type":"expense","amount":3,"category":"food","note":""}]"#
            ],
        )
        .unwrap();
    }

    let store = SqliteStore::open(&path).unwrap();
    assert!(store.load().is_empty());
}

#[test]
fn lenient_fields_are_coerced_at_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ledger.sqlite");

    {
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch("CREATE TABLE kv(key TEXT PRIMARY KEY, value TEXT NOT NULL);")
            .unwrap();
        conn.execute(
            "INSERT INTO kv(key, value) VALUES(?1, ?2)",
            rusqlite::params![
                STORAGE_KEY,
                r#"[{"id":"a","type":"expense","amount":"12.5","category":"food","date":"2025-03-01T00:00:00Z"},
                    {"id":"b","type":"expense","amount":null,"category":"food","date":"2025-03-01T00:00:00Z"},
                    {"type":"expense","category":"food","date":"2025-03-01T00:00:00Z"}]"#
            ],
        )
        .unwrap();
    }

    let store = SqliteStore::open(&path).unwrap();
    let loaded = store.load();
    assert_eq!(loaded.len(), 3);
    assert_eq!(loaded[0].amount, 12.5);
    assert_eq!(loaded[1].amount, 0.0);
    assert_eq!(loaded[2].amount, 0.0);
    assert_eq!(loaded[2].id, "");
    assert_eq!(loaded[2].note, "");
}
