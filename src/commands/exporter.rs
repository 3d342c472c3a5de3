// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use anyhow::{bail, Result};

pub fn handle(ledger: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(ledger, sub),
        _ => Ok(()),
    }
}

fn export_transactions(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    write_transactions(ledger, &fmt, out)?;
    println!("Exported transactions to {}", out);
    Ok(())
}

/// `csv` writes the backup column set `type,category,amount,date,note` with
/// RFC 3339 dates; `json` writes the stored array verbatim. Any other format
/// is an error and writes nothing.
pub fn write_transactions(ledger: &Ledger, fmt: &str, out: &str) -> Result<()> {
    match fmt {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["type", "category", "amount", "date", "note"])?;
            for t in ledger.transactions() {
                wtr.write_record([
                    t.r#type.clone(),
                    t.category.clone(),
                    t.amount.to_string(),
                    t.date.to_rfc3339(),
                    t.note.clone(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(ledger.transactions())?)?;
        }
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    }
    Ok(())
}
