//! Upstream memo sources for the importer.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use memo_core::{Error, ImportRecord, Memo, MemoSource, Result, SourceEntry};

use crate::record::entry_from_value;

/// A JSON export of the client-side memo store.
///
/// The file holds either a bare array of memos or an object with a `memos`
/// array. Fields other than id, title, content, category and tags are
/// ignored on read. A missing file is an empty store.
#[derive(Debug, Clone)]
pub struct LocalStoreFile {
    path: PathBuf,
}

impl LocalStoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all entries in file order.
    ///
    /// An unreadable file, malformed JSON, or a top level that is not a memos
    /// array is an error. Entries that are not valid memos come back as
    /// [`SourceEntry::Rejected`].
    pub async fn read_entries(&self) -> Result<Vec<SourceEntry>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(
                    subsystem = "import",
                    component = "local_store",
                    path = %self.path.display(),
                    "Store file missing, treating as empty"
                );
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        let items = match serde_json::from_str::<Value>(&raw)? {
            Value::Array(items) => items,
            Value::Object(mut obj) => match obj.remove("memos") {
                Some(Value::Array(items)) => items,
                _ => return Err(not_a_memo_list()),
            },
            _ => return Err(not_a_memo_list()),
        };

        let entries: Vec<SourceEntry> = items
            .iter()
            .enumerate()
            .map(|(i, item)| entry_from_value(i, item))
            .collect();

        let rejected = entries
            .iter()
            .filter(|e| matches!(e, SourceEntry::Rejected(_)))
            .count();
        if rejected > 0 {
            debug!(
                subsystem = "import",
                component = "local_store",
                path = %self.path.display(),
                rejected,
                total = entries.len(),
                "Store file has malformed entries"
            );
        }

        Ok(entries)
    }

    /// Overwrite the file with these memos as a bare JSON array.
    pub async fn save_memos(&self, memos: &[Memo]) -> Result<()> {
        let json = serde_json::to_string_pretty(memos)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }

    /// Write `memos` only when the store holds none. Returns whether it wrote.
    pub async fn seed_if_empty(&self, memos: &[Memo]) -> Result<bool> {
        if !self.read_entries().await?.is_empty() {
            return Ok(false);
        }
        self.save_memos(memos).await?;
        Ok(true)
    }
}

fn not_a_memo_list() -> Error {
    Error::Serialization("Local store must hold a memos array".to_string())
}

#[async_trait]
impl MemoSource for LocalStoreFile {
    async fn fetch_entries(&self) -> Result<Vec<SourceEntry>> {
        self.read_entries().await
    }

    fn describe(&self) -> String {
        format!("local store {}", self.path.display())
    }
}

/// Records already held in memory, such as a validated request body.
#[derive(Debug, Clone, Default)]
pub struct RecordSource {
    records: Vec<ImportRecord>,
}

impl RecordSource {
    pub fn new(records: Vec<ImportRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl MemoSource for RecordSource {
    async fn fetch_entries(&self) -> Result<Vec<SourceEntry>> {
        Ok(self.records.iter().cloned().map(SourceEntry::from).collect())
    }

    fn describe(&self) -> String {
        format!("{} in-memory records", self.records.len())
    }
}
