// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{TYPE_EXPENSE, TYPE_INCOME};

/// One entry of the built-in vocabulary. Ids are what gets stored; labels are
/// display-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDef {
    pub id: &'static str,
    pub label: &'static str,
}

pub const INCOME_CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        id: "salary",
        label: "Salary",
    },
    CategoryDef {
        id: "bonus",
        label: "Bonus",
    },
    CategoryDef {
        id: "investment",
        label: "Investment",
    },
    CategoryDef {
        id: "other_in",
        label: "Other",
    },
];

pub const EXPENSE_CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        id: "food",
        label: "Food",
    },
    CategoryDef {
        id: "transport",
        label: "Transport",
    },
    CategoryDef {
        id: "shopping",
        label: "Shopping",
    },
    CategoryDef {
        id: "entertainment",
        label: "Entertainment",
    },
    CategoryDef {
        id: "housing",
        label: "Housing",
    },
    CategoryDef {
        id: "medical",
        label: "Medical",
    },
    CategoryDef {
        id: "other_out",
        label: "Other",
    },
];

/// Vocabulary for a transaction type; empty for unknown types.
pub fn categories_for(r#type: &str) -> &'static [CategoryDef] {
    match r#type {
        TYPE_INCOME => INCOME_CATEGORIES,
        TYPE_EXPENSE => EXPENSE_CATEGORIES,
        _ => &[],
    }
}

/// Display label for a stored category id: the exact match when the type's
/// vocabulary has one, otherwise the type's catch-all `other_*` entry,
/// otherwise `Unknown`. Stored ids are never rewritten to fit the vocabulary.
pub fn label_for(r#type: &str, category: &str) -> &'static str {
    let list = categories_for(r#type);
    list.iter()
        .find(|c| c.id == category)
        .or_else(|| list.iter().find(|c| c.id.starts_with("other")))
        .map(|c| c.label)
        .unwrap_or("Unknown")
}

/// Whether `category` is a known id for `type`.
pub fn is_known(r#type: &str, category: &str) -> bool {
    categories_for(r#type).iter().any(|c| c.id == category)
}
