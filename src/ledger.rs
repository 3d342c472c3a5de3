// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeMap;
use tracing::debug;

use crate::models::{
    CategoryShare, DailyTotal, MonthTotal, NewTransaction, Statistics, Transaction, TYPE_EXPENSE,
    TYPE_INCOME,
};
use crate::store::SqliteStore;

/// In-memory ledger with write-through persistence. Holds every transaction
/// newest-first; each mutation saves the whole list back to the store before
/// returning. All operations are infallible: a broken store degrades to an
/// empty ledger on open and to unsaved (but logged) writes after that.
pub struct Ledger {
    store: SqliteStore,
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn open(store: SqliteStore) -> Self {
        let transactions = store.load();
        Self {
            store,
            transactions,
        }
    }

    /// All entries, newest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn store(&self) -> &SqliteStore {
        &self.store
    }

    /// Normalizes the input (fresh id, defaulted note and date), prepends it
    /// and persists. Returns the stored entry.
    pub fn add_transaction(&mut self, input: NewTransaction) -> &Transaction {
        let tx = input.into_transaction();
        debug!(id = %tx.id, amount = tx.amount, "recorded transaction");
        self.transactions.insert(0, tx);
        self.store.save(&self.transactions);
        &self.transactions[0]
    }

    /// Removes the entry with `id`, if present, and persists either way.
    /// Returns whether anything was removed; an unknown id is not an error.
    pub fn delete_transaction(&mut self, id: &str) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        self.store.save(&self.transactions);
        let removed = self.transactions.len() != before;
        debug!(id, removed, "delete transaction");
        removed
    }

    /// Whole-ledger totals. Every entry participates: `income` sums entries
    /// typed exactly `income`, `expense` sums everything else.
    pub fn statistics(&self) -> Statistics {
        let mut income = 0.0;
        let mut expense = 0.0;
        for t in &self.transactions {
            if t.is_income() {
                income += t.amount;
            } else {
                expense += t.amount;
            }
        }
        Statistics {
            income,
            expense,
            balance: income - expense,
        }
    }

    /// Totals for one `YYYY-MM` month. Unlike [`Ledger::statistics`], only
    /// entries typed exactly `income` or `expense` participate; anything
    /// else is left out of both buckets.
    pub fn month_statistics(&self, month: &str) -> Statistics {
        let mut income = 0.0;
        let mut expense = 0.0;
        for t in self.in_month(month) {
            match t.r#type.as_str() {
                TYPE_INCOME => income += t.amount,
                TYPE_EXPENSE => expense += t.amount,
                _ => {}
            }
        }
        Statistics {
            income,
            expense,
            balance: income - expense,
        }
    }

    /// Per-day totals within one `YYYY-MM` month, ascending by date. Days
    /// with no typed entries are absent. Strict type buckets, as in
    /// [`Ledger::month_statistics`].
    pub fn daily_totals(&self, month: &str) -> Vec<DailyTotal> {
        let mut days: BTreeMap<NaiveDate, (f64, f64)> = BTreeMap::new();
        for t in self.in_month(month) {
            match t.r#type.as_str() {
                TYPE_INCOME => days.entry(t.date.date_naive()).or_default().0 += t.amount,
                TYPE_EXPENSE => days.entry(t.date.date_naive()).or_default().1 += t.amount,
                _ => {}
            }
        }
        days.into_iter()
            .map(|(date, (income, expense))| DailyTotal {
                date,
                income,
                expense,
            })
            .collect()
    }

    /// Totals for the most recent `months` calendar months that contain
    /// typed entries, newest first. Empty months are skipped, not zero-filled.
    pub fn monthly_totals(&self, months: usize) -> Vec<MonthTotal> {
        let mut buckets: BTreeMap<String, (f64, f64)> = BTreeMap::new();
        for t in &self.transactions {
            match t.r#type.as_str() {
                TYPE_INCOME => buckets.entry(month_key(&t.date)).or_default().0 += t.amount,
                TYPE_EXPENSE => buckets.entry(month_key(&t.date)).or_default().1 += t.amount,
                _ => {}
            }
        }
        buckets
            .into_iter()
            .rev()
            .take(months)
            .map(|(month, (income, expense))| MonthTotal {
                month,
                income,
                expense,
            })
            .collect()
    }

    /// Expense share per main category for one `YYYY-MM` month, largest
    /// first. Compound `main-sub` ids group under `main`. Empty whenever the
    /// month's expense total is not positive.
    pub fn category_breakdown(&self, month: &str) -> Vec<CategoryShare> {
        let mut totals: BTreeMap<String, f64> = BTreeMap::new();
        let mut total = 0.0;
        for t in self.in_month(month) {
            if t.r#type != TYPE_EXPENSE {
                continue;
            }
            *totals.entry(t.main_category().to_string()).or_default() += t.amount;
            total += t.amount;
        }
        if total <= 0.0 {
            return Vec::new();
        }
        let mut shares: Vec<CategoryShare> = totals
            .into_iter()
            .map(|(category, amount)| CategoryShare {
                category,
                amount,
                percent: amount / total * 100.0,
            })
            .collect();
        shares.sort_by(|a, b| b.amount.total_cmp(&a.amount));
        shares
    }

    /// Entries dated within `month` (`YYYY-MM`), ledger order.
    pub fn transactions_in_month(&self, month: &str) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| month_key(&t.date) == month)
            .collect()
    }

    /// Entries dated on `date` (UTC), ledger order.
    pub fn transactions_on(&self, date: NaiveDate) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| t.date.date_naive() == date)
            .collect()
    }

    fn in_month<'a>(&'a self, month: &'a str) -> impl Iterator<Item = &'a Transaction> {
        self.transactions
            .iter()
            .filter(move |t| month_key(&t.date) == month)
    }
}

fn month_key(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m").to_string()
}
