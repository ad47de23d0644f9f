//! Batch memo importer.
//!
//! Pushes a collection of memo records into the remote store one at a time.
//! A record that fails is reported and skipped; the rest of the batch still
//! runs. Nothing is rolled back.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};

use memo_core::{Error, ImportRecord, ImportResult, MemoRepository, MemoSource, SourceEntry};

/// Advisory returned when there is nothing to import.
pub const NO_MEMOS_MESSAGE: &str = "No memos to import.";

/// How records are matched against the remote store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMode {
    /// Every record is created with a store-assigned ID.
    CreateOnly,
    /// Records whose ID already exists remotely are updated in place; the
    /// rest are created.
    Reconcile,
}

/// Imports memo records into a [`MemoRepository`].
#[derive(Clone)]
pub struct MemoImporter {
    store: Arc<dyn MemoRepository>,
}

impl MemoImporter {
    pub fn new(store: Arc<dyn MemoRepository>) -> Self {
        Self { store }
    }

    /// Import `records` in order.
    ///
    /// Records whose ID is in `existing_ids` are updated; all others are
    /// created. With no `existing_ids` every record is created.
    pub async fn import_records(
        &self,
        records: &[ImportRecord],
        existing_ids: Option<&HashSet<String>>,
    ) -> ImportResult {
        if records.is_empty() {
            return nothing_to_import();
        }

        let start = Instant::now();
        let mut imported_count = 0;
        let mut errors = Vec::new();

        for record in records {
            match self.import_one(record, existing_ids).await {
                Ok(()) => imported_count += 1,
                Err(msg) => errors.push(msg),
            }
        }

        finish(records.len(), imported_count, errors, start)
    }

    /// Enumerate `source` and import it.
    ///
    /// Entries the source could not read as memos are reported in place,
    /// in source order, alongside store failures. Failing to enumerate the
    /// source, or in [`ImportMode::Reconcile`] to list the remote store,
    /// aborts the batch with a single error entry.
    pub async fn import_from(&self, source: &dyn MemoSource, mode: ImportMode) -> ImportResult {
        let entries = match source.fetch_entries().await {
            Ok(entries) => entries,
            Err(e) => return batch_failure(&source.describe(), &e),
        };

        info!(
            subsystem = "import",
            component = "importer",
            source = %source.describe(),
            mode = ?mode,
            entries = entries.len(),
            "Starting import"
        );

        if entries.is_empty() {
            return nothing_to_import();
        }

        let existing_ids: Option<HashSet<String>> = match mode {
            ImportMode::CreateOnly => None,
            ImportMode::Reconcile => match self.store.list().await {
                Ok(memos) => Some(memos.into_iter().map(|m| m.id).collect()),
                Err(e) => return batch_failure(&source.describe(), &e),
            },
        };

        let start = Instant::now();
        let mut imported_count = 0;
        let mut errors = Vec::new();

        for entry in &entries {
            let outcome = match entry {
                SourceEntry::Record(record) => {
                    self.import_one(record, existing_ids.as_ref()).await
                }
                SourceEntry::Rejected(msg) => {
                    warn!(
                        subsystem = "import",
                        component = "importer",
                        reason = %msg,
                        "Skipping malformed memo"
                    );
                    Err(msg.clone())
                }
            };
            match outcome {
                Ok(()) => imported_count += 1,
                Err(msg) => errors.push(msg),
            }
        }

        finish(entries.len(), imported_count, errors, start)
    }

    /// Create or update one record, returning the reported message on failure.
    async fn import_one(
        &self,
        record: &ImportRecord,
        existing_ids: Option<&HashSet<String>>,
    ) -> Result<(), String> {
        let existing = match (&record.id, existing_ids) {
            (Some(id), Some(ids)) if ids.contains(id) => Some(id.as_str()),
            _ => None,
        };

        let outcome = match existing {
            Some(id) => self.store.update(id, record.fields()).await.map(|_| ()),
            None => self.store.create(record.fields()).await.map(|_| ()),
        };

        outcome.map_err(|e| {
            let op = if existing.is_some() { "update" } else { "create" };
            warn!(
                subsystem = "import",
                component = "importer",
                memo_id = record.id.as_deref().unwrap_or(""),
                op,
                error = %e,
                "Failed to import memo"
            );
            record_failure_message(&e, &record.title)
        })
    }
}

fn nothing_to_import() -> ImportResult {
    ImportResult {
        success: true,
        imported_count: 0,
        errors: vec![NO_MEMOS_MESSAGE.to_string()],
    }
}

fn finish(total: usize, imported_count: usize, errors: Vec<String>, start: Instant) -> ImportResult {
    info!(
        subsystem = "import",
        component = "importer",
        total,
        imported = imported_count,
        failed = errors.len(),
        duration_ms = start.elapsed().as_millis() as u64,
        "Import batch complete"
    );

    ImportResult {
        success: errors.is_empty(),
        imported_count,
        errors,
    }
}

fn record_failure_message(err: &Error, title: &str) -> String {
    let detail = err.detail();
    if detail.trim().is_empty() {
        format!("Failed to import memo \"{}\"", title)
    } else {
        detail
    }
}

fn batch_failure(source: &str, err: &Error) -> ImportResult {
    warn!(
        subsystem = "import",
        component = "importer",
        source = %source,
        error = %err,
        "Import aborted"
    );
    ImportResult {
        success: false,
        imported_count: 0,
        errors: vec![format!("Failed to import memos: {}", err.detail())],
    }
}
