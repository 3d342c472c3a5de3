// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

pub const TYPE_INCOME: &str = "income";
pub const TYPE_EXPENSE: &str = "expense";

/// One recorded income or expense event. Immutable once created; removed only
/// by id. The serialized shape is the storage contract and must stay readable
/// by older data: every field except `date` tolerates being absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub r#type: String,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub amount: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub note: String,
    pub date: DateTime<Utc>,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.r#type == TYPE_INCOME
    }

    /// Grouping key for category reports: the segment before the first `-` of
    /// a compound `main-sub` id, or the whole id when there is no dash.
    pub fn main_category(&self) -> &str {
        self.category.split('-').next().unwrap_or(self.category.as_str())
    }
}

/// Input for the add operation: `type`, `amount` and `category` are required
/// by shape, `note` and `date` are optional. Fields are not validated here;
/// normalization only fills defaults and keeps amounts finite.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub r#type: String,
    pub amount: f64,
    pub category: String,
    pub note: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

impl NewTransaction {
    pub(crate) fn into_transaction(self) -> Transaction {
        Transaction {
            id: Uuid::new_v4().to_string(),
            r#type: self.r#type,
            amount: if self.amount.is_finite() { self.amount } else { 0.0 },
            category: self.category,
            note: self.note.unwrap_or_default(),
            date: self.date.unwrap_or_else(Utc::now),
        }
    }
}

/// Aggregate over the whole ledger; `balance` is always derived from the
/// other two, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Statistics {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub income: f64,
    pub expense: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthTotal {
    pub month: String, // YYYY-MM
    pub income: f64,
    pub expense: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub amount: f64,
    pub percent: f64,
}

/// Stored amounts may come from older clients: a JSON number, a numeric
/// string, `null`, or missing entirely. Anything that does not parse to a
/// finite number contributes zero instead of failing the whole document.
fn amount_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let parsed = match &value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(parsed.filter(|v| v.is_finite()).unwrap_or(0.0))
}
