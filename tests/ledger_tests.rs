// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use pocketledger::ledger::Ledger;
use pocketledger::models::NewTransaction;
use pocketledger::store::SqliteStore;
use tempfile::tempdir;

fn memory_ledger() -> Ledger {
    Ledger::open(SqliteStore::open_in_memory().unwrap())
}

fn add(ledger: &mut Ledger, r#type: &str, amount: f64, category: &str, date: &str) -> String {
    ledger
        .add_transaction(NewTransaction {
            r#type: r#type.into(),
            amount,
            category: category.into(),
            note: None,
            date: Some(date.parse().unwrap()),
        })
        .id
        .clone()
}

#[test]
fn add_prepends_and_fills_defaults() {
    let mut ledger = memory_ledger();
    let first = add(&mut ledger, "income", 1000.0, "salary", "2025-03-01T09:00:00Z");
    let second = add(&mut ledger, "expense", 200.0, "food", "2025-03-02T12:00:00Z");

    let txs = ledger.transactions();
    assert_eq!(txs.len(), 2);
    assert_eq!(txs[0].id, second);
    assert_eq!(txs[1].id, first);
    assert_ne!(first, second);
    assert!(!first.is_empty());
    assert_eq!(txs[0].note, "");
}

#[test]
fn add_defaults_date_to_now() {
    let mut ledger = memory_ledger();
    let before = chrono::Utc::now();
    let tx = ledger.add_transaction(NewTransaction {
        r#type: "expense".into(),
        amount: 3.5,
        category: "transport".into(),
        note: Some("bus".into()),
        date: None,
    });
    assert!(tx.date >= before);
    assert_eq!(tx.note, "bus");
}

#[test]
fn balance_reflects_income_minus_expense() {
    let mut ledger = memory_ledger();
    add(&mut ledger, "income", 1000.0, "salary", "2025-03-01T09:00:00Z");
    add(&mut ledger, "expense", 200.0, "food", "2025-03-02T12:00:00Z");

    let stats = ledger.statistics();
    assert_eq!(stats.income, 1000.0);
    assert_eq!(stats.expense, 200.0);
    assert_eq!(stats.balance, 800.0);
    assert_eq!(ledger.transactions()[0].amount, 200.0);
}

#[test]
fn statistics_count_unrecognized_types_as_expense() {
    let mut ledger = memory_ledger();
    add(&mut ledger, "income", 100.0, "salary", "2025-03-01T09:00:00Z");
    add(&mut ledger, "transfer", 40.0, "misc", "2025-03-01T10:00:00Z");

    let stats = ledger.statistics();
    assert_eq!(stats.income, 100.0);
    assert_eq!(stats.expense, 40.0);
    assert_eq!(stats.balance, 60.0);
}

#[test]
fn statistics_of_empty_ledger_are_zero() {
    let ledger = memory_ledger();
    let stats = ledger.statistics();
    assert_eq!(stats.income, 0.0);
    assert_eq!(stats.expense, 0.0);
    assert_eq!(stats.balance, 0.0);
}

#[test]
fn delete_removes_only_the_matching_id() {
    let mut ledger = memory_ledger();
    let first = add(&mut ledger, "income", 10.0, "salary", "2025-03-01T09:00:00Z");
    let second = add(&mut ledger, "expense", 5.0, "food", "2025-03-02T09:00:00Z");

    assert!(ledger.delete_transaction(&first));
    assert_eq!(ledger.transactions().len(), 1);
    assert_eq!(ledger.transactions()[0].id, second);

    assert!(!ledger.delete_transaction("no-such-id"));
    assert_eq!(ledger.transactions().len(), 1);
}

#[test]
fn mutations_survive_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ledger.sqlite");

    let kept;
    {
        let mut ledger = Ledger::open(SqliteStore::open(&path).unwrap());
        let doomed = add(&mut ledger, "expense", 9.0, "food", "2025-03-02T09:00:00Z");
        kept = add(&mut ledger, "income", 42.0, "bonus", "2025-03-03T09:00:00Z");
        ledger.delete_transaction(&doomed);
    }

    let reopened = Ledger::open(SqliteStore::open(&path).unwrap());
    assert_eq!(reopened.transactions().len(), 1);
    assert_eq!(reopened.transactions()[0].id, kept);
    assert_eq!(reopened.transactions()[0].amount, 42.0);
}
