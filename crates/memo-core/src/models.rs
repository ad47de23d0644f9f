//! Core data models for memo-keeper.
//!
//! These types are shared across all memo-keeper crates. Their JSON form is
//! camelCase so that exports from the browser-side store deserialize
//! without any reshaping.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Category filter value that matches every memo.
pub const CATEGORY_ALL: &str = "all";

// =============================================================================
// MEMO TYPES
// =============================================================================

/// A user-authored memo as held by the remote store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Memo {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Free-form label; not restricted to a fixed set.
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_summary: Option<String>,
}

impl Memo {
    /// The writable subset of this memo.
    pub fn fields(&self) -> MemoFields {
        MemoFields {
            title: self.title.clone(),
            content: self.content.clone(),
            category: self.category.clone(),
            tags: self.tags.clone(),
        }
    }
}

/// Fields a client may write on create or update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MemoFields {
    pub title: String,
    pub content: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl MemoFields {
    /// Reject blank title, content, or category.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("title", &self.title),
            ("content", &self.content),
            ("category", &self.category),
        ] {
            if value.trim().is_empty() {
                return Err(Error::InvalidInput(format!("{} is required", name)));
            }
        }
        Ok(())
    }
}

// =============================================================================
// IMPORT TYPES
// =============================================================================

/// A memo-shaped record offered for import.
///
/// `id` is what the record was known by in its source store. Timestamps and
/// any other source fields are ignored: the remote store assigns its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub content: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ImportRecord {
    pub fn fields(&self) -> MemoFields {
        MemoFields {
            title: self.title.clone(),
            content: self.content.clone(),
            category: self.category.clone(),
            tags: self.tags.clone(),
        }
    }
}

impl From<Memo> for ImportRecord {
    fn from(memo: Memo) -> Self {
        Self {
            id: Some(memo.id),
            title: memo.title,
            content: memo.content,
            category: memo.category,
            tags: memo.tags,
        }
    }
}

/// One entry enumerated from an import source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceEntry {
    /// A well-formed record.
    Record(ImportRecord),
    /// An entry that could not be read as a record; carries the failure
    /// message reported for it.
    Rejected(String),
}

impl From<ImportRecord> for SourceEntry {
    fn from(record: ImportRecord) -> Self {
        SourceEntry::Record(record)
    }
}

/// Outcome of a batch import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    /// True iff no record failed.
    pub success: bool,
    /// Records created or updated.
    pub imported_count: usize,
    /// One message per failed record, in processing order.
    pub errors: Vec<String>,
}

// =============================================================================
// STATISTICS
// =============================================================================

/// Memo counts, overall and per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemoStats {
    pub total: i64,
    pub by_category: BTreeMap<String, i64>,
}
