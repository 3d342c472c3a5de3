// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories::is_known;
use crate::ledger::Ledger;
use crate::models::{Transaction, TYPE_EXPENSE, TYPE_INCOME};
use crate::utils::pretty_table;
use anyhow::Result;
use std::collections::HashSet;

pub fn handle(ledger: &Ledger) -> Result<()> {
    let rows = inspect(ledger);
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

/// Anomaly scan over the stored ledger. Everything reported here is
/// tolerated by the core (which never validates); doctor only surfaces it.
pub fn inspect(ledger: &Ledger) -> Vec<Vec<String>> {
    let mut rows = Vec::new();

    // 1) Raw document state: present but unparseable means the ledger opened
    //    empty and the next write will replace the stored data.
    match ledger.store().raw_document() {
        Ok(Some(raw)) => {
            if serde_json::from_str::<Vec<Transaction>>(&raw).is_err() {
                rows.push(vec![
                    "corrupt_document".into(),
                    "stored ledger does not parse and will be replaced on next write".into(),
                ]);
            }
        }
        Ok(None) => {}
        Err(err) => rows.push(vec!["storage_unreadable".into(), err.to_string()]),
    }

    // 2) Per-entry anomalies
    let mut seen = HashSet::new();
    for t in ledger.transactions() {
        if !seen.insert(t.id.as_str()) {
            rows.push(vec!["duplicate_id".into(), t.id.clone()]);
        }
        if t.r#type != TYPE_INCOME && t.r#type != TYPE_EXPENSE {
            rows.push(vec![
                "unknown_type".into(),
                format!("{} ({})", t.r#type, t.id),
            ]);
        } else if !is_known(&t.r#type, &t.category) {
            rows.push(vec![
                "unknown_category".into(),
                format!("{} ({})", t.category, t.id),
            ]);
        }
        if t.amount < 0.0 {
            rows.push(vec![
                "negative_amount".into(),
                format!("{} ({})", t.amount, t.id),
            ]);
        }
    }
    rows
}
