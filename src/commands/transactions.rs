// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories::label_for;
use crate::ledger::Ledger;
use crate::models::{NewTransaction, Transaction};
use crate::utils::{
    fmt_amount, maybe_print_json, parse_amount, parse_date, parse_month, parse_timestamp,
    pretty_table,
};
use anyhow::{bail, Result};
use serde::Serialize;

pub fn handle(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(ledger, sub)?,
        Some(("list", sub)) => list(ledger, sub)?,
        Some(("rm", sub)) => rm(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let r#type = sub.get_one::<String>("type").unwrap().clone();
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    if amount <= 0.0 {
        bail!("Amount must be positive, got {}", amount);
    }
    let category = sub.get_one::<String>("category").unwrap().clone();
    let note = sub.get_one::<String>("note").map(|s| s.to_string());
    let date = match sub.get_one::<String>("date") {
        Some(s) => Some(parse_timestamp(s)?),
        None => None,
    };

    let tx = ledger.add_transaction(NewTransaction {
        r#type,
        amount,
        category,
        note,
        date,
    });
    println!(
        "Recorded {} {} ({}) on {} [{}]",
        tx.r#type,
        fmt_amount(tx.amount),
        label_for(&tx.r#type, &tx.category),
        tx.date.format("%Y-%m-%d"),
        tx.id
    );
    Ok(())
}

fn list(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(ledger, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.r#type.clone(),
                    r.category.clone(),
                    r.amount.clone(),
                    r.note.clone(),
                    r.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Type", "Category", "Amount", "Note", "Id"], rows)
        );
    }
    Ok(())
}

fn rm(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    if ledger.delete_transaction(id) {
        println!("Removed {}", id);
    } else {
        println!("No entry with id {}", id);
    }
    Ok(())
}

/// Display row: dates collapse to the calendar day and amounts are fixed to
/// two decimals; `category` carries the display label, not the stored id.
#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub r#type: String,
    pub category: String,
    pub amount: String,
    pub note: String,
}

pub fn query_rows(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let selected: Vec<&Transaction> = if let Some(month) = sub.get_one::<String>("month") {
        ledger.transactions_in_month(&parse_month(month)?)
    } else if let Some(date) = sub.get_one::<String>("date") {
        ledger.transactions_on(parse_date(date)?)
    } else {
        ledger.transactions().iter().collect()
    };

    let limit = sub.get_one::<usize>("limit").copied().unwrap_or(usize::MAX);
    Ok(selected.into_iter().take(limit).map(row_of).collect())
}

fn row_of(t: &Transaction) -> TransactionRow {
    TransactionRow {
        id: t.id.clone(),
        date: t.date.format("%Y-%m-%d").to_string(),
        r#type: t.r#type.clone(),
        category: label_for(&t.r#type, &t.category).to_string(),
        amount: fmt_amount(t.amount),
        note: t.note.clone(),
    }
}
