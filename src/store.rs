// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{params, Connection, OptionalExtension};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

use crate::models::Transaction;

/// Fixed key the ledger document is stored under. Changing it orphans
/// existing data.
pub const STORAGE_KEY: &str = "pocket_ledger_data";

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.pocketledger", "PocketLedger", "pocketledger"));

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(#[from] rusqlite::Error),
    #[error("corrupt ledger document: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Key-value document store backed by SQLite. The whole ledger lives as one
/// JSON array under [`STORAGE_KEY`]; every read and write replaces the
/// document wholesale.
pub struct SqliteStore {
    conn: Connection,
    path: Option<PathBuf>,
}

pub fn default_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("pocketledger.sqlite"))
}

impl SqliteStore {
    pub fn open_default() -> Result<Self> {
        Self::open(default_path()?)
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn =
            Connection::open(path).with_context(|| format!("Open store at {}", path.display()))?;
        init_schema(&conn)?;
        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("Open in-memory store")?;
        init_schema(&conn)?;
        Ok(Self { conn, path: None })
    }

    /// Backing file, if any. `None` for in-memory stores.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Reads the stored ledger. Unreadable storage or an unparseable document
    /// yields an empty ledger; the failure is logged, never returned.
    pub fn load(&self) -> Vec<Transaction> {
        match self.try_load() {
            Ok(Some(transactions)) => transactions,
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(key = STORAGE_KEY, error = %err, "failed to read ledger, starting empty");
                Vec::new()
            }
        }
    }

    /// Writes the whole ledger back under [`STORAGE_KEY`]. Failures are
    /// logged and swallowed; the in-memory ledger stays authoritative.
    pub fn save(&self, transactions: &[Transaction]) {
        if let Err(err) = self.try_save(transactions) {
            warn!(key = STORAGE_KEY, error = %err, "failed to persist ledger");
        }
    }

    /// Raw stored document, untouched by transaction parsing. Used by health
    /// checks to tell "no data yet" from "data present but corrupt".
    pub fn raw_document(&self) -> Result<Option<String>, StoreError> {
        let raw = self
            .conn
            .query_row("SELECT value FROM kv WHERE key=?1", [STORAGE_KEY], |r| {
                r.get(0)
            })
            .optional()?;
        Ok(raw)
    }

    fn try_load(&self) -> Result<Option<Vec<Transaction>>, StoreError> {
        match self.raw_document()? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn try_save(&self, transactions: &[Transaction]) -> Result<(), StoreError> {
        let payload = serde_json::to_string(transactions)?;
        self.conn.execute(
            "INSERT INTO kv(key, value) VALUES(?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value",
            params![STORAGE_KEY, payload],
        )?;
        Ok(())
    }
}

fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS kv(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );
    "#,
    )?;
    Ok(())
}
