//! # memo-import
//!
//! Batch import of memos into the remote store.
//!
//! This crate provides:
//! - [`MemoImporter`], which creates or updates each record and keeps going
//!   past per-record failures
//! - Upstream sources: a client-side store export file and in-memory records
//! - [`parse_record`], the shared rule for reading untyped memo JSON
//! - Built-in sample memos for seeding an empty local store
//! - The `memo-migrate` command-line tool
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use memo_db::Database;
//! use memo_import::{ImportMode, LocalStoreFile, MemoImporter};
//!
//! let db = Database::connect("postgres://...").await?;
//! let importer = MemoImporter::new(Arc::new(db.memos.clone()));
//!
//! let source = LocalStoreFile::new("memos.json");
//! let result = importer.import_from(&source, ImportMode::Reconcile).await;
//! println!("imported {} memos", result.imported_count);
//! ```

pub mod importer;
pub mod record;
pub mod samples;
pub mod source;

// Re-export core types
pub use memo_core::*;

pub use importer::{ImportMode, MemoImporter, NO_MEMOS_MESSAGE};
pub use record::{entry_from_value, parse_record};
pub use samples::sample_memos;
pub use source::{LocalStoreFile, RecordSource};
