// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use crate::models::{NewTransaction, TYPE_EXPENSE, TYPE_INCOME};
use crate::utils::parse_timestamp;
use anyhow::{Context, Result};
use csv::ReaderBuilder;

pub fn handle(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => import_transactions(ledger, sub),
        _ => Ok(()),
    }
}

fn import_transactions(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    let (imported, skipped) = read_transactions(ledger, path)?;
    println!(
        "Imported {} entries from {} ({} skipped)",
        imported, path, skipped
    );
    Ok(())
}

/// Reads a CSV backup with columns `type,category,amount,date,note`. Each
/// valid row goes through the normal add path and gets a fresh id. A row is
/// skipped (and counted) when its type is not `income`/`expense`, its amount
/// does not parse to a non-negative number, or its date does not parse;
/// nothing short of an unreadable file aborts the import.
pub fn read_transactions(ledger: &mut Ledger, path: &str) -> Result<(usize, usize)> {
    // Flexible: the note column is optional in hand-edited backups.
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path))?;

    let mut imported = 0usize;
    let mut skipped = 0usize;
    for result in rdr.records() {
        let rec = match result {
            Ok(rec) => rec,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };

        let r#type = rec.get(0).unwrap_or("").trim().to_string();
        if r#type != TYPE_INCOME && r#type != TYPE_EXPENSE {
            skipped += 1;
            continue;
        }
        let category = rec.get(1).unwrap_or("").trim().to_string();
        let amount = match rec.get(2).map(str::trim).and_then(|s| s.parse::<f64>().ok()) {
            Some(v) if v.is_finite() && v >= 0.0 => v,
            _ => {
                skipped += 1;
                continue;
            }
        };
        let date = match rec.get(3).map(str::trim).and_then(|s| parse_timestamp(s).ok()) {
            Some(d) => d,
            None => {
                skipped += 1;
                continue;
            }
        };
        let note = rec
            .get(4)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        ledger.add_transaction(NewTransaction {
            r#type,
            amount,
            category,
            note,
            date: Some(date),
        });
        imported += 1;
    }
    Ok((imported, skipped))
}
