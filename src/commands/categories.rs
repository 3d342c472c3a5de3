// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories::categories_for;
use crate::models::{TYPE_EXPENSE, TYPE_INCOME};
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let rows = match m.get_one::<String>("type") {
        Some(t) => rows_for(t),
        None => {
            let mut rows = rows_for(TYPE_INCOME);
            rows.extend(rows_for(TYPE_EXPENSE));
            rows
        }
    };
    println!("{}", pretty_table(&["Type", "Id", "Label"], rows));
    Ok(())
}

fn rows_for(r#type: &str) -> Vec<Vec<String>> {
    categories_for(r#type)
        .iter()
        .map(|c| vec![r#type.to_string(), c.id.to_string(), c.label.to_string()])
        .collect()
}
