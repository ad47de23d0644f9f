//! Core traits for memo-keeper abstractions.
//!
//! These traits define the interfaces that concrete implementations
//! must satisfy, enabling pluggable backends and testability.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::*;

// =============================================================================
// MEMO REPOSITORY TRAITS
// =============================================================================

/// Repository for memo CRUD operations against the remote store.
#[async_trait]
pub trait MemoRepository: Send + Sync {
    /// List every memo, newest first.
    async fn list(&self) -> Result<Vec<Memo>>;

    /// Fetch a memo by ID. Returns `None` when no such memo exists.
    async fn fetch(&self, id: &str) -> Result<Option<Memo>>;

    /// Insert a new memo. The store assigns the ID and timestamps.
    async fn create(&self, fields: MemoFields) -> Result<Memo>;

    /// Overwrite the writable fields of an existing memo.
    async fn update(&self, id: &str, fields: MemoFields) -> Result<Memo>;

    /// Delete a memo.
    async fn delete(&self, id: &str) -> Result<()>;

    /// Delete every memo. Returns how many were removed.
    async fn delete_all(&self) -> Result<u64>;

    /// Case-insensitive substring search over title, content and tags.
    async fn search(&self, query: &str) -> Result<Vec<Memo>>;

    /// List memos in a category; [`CATEGORY_ALL`] lists everything.
    async fn list_by_category(&self, category: &str) -> Result<Vec<Memo>>;

    /// Store an AI-generated summary on a memo.
    async fn update_ai_summary(&self, id: &str, summary: &str) -> Result<()>;

    /// Count memos overall and per category.
    async fn stats(&self) -> Result<MemoStats>;
}

// =============================================================================
// IMPORT SOURCE TRAITS
// =============================================================================

/// An upstream collection of memo records to import.
#[async_trait]
pub trait MemoSource: Send + Sync {
    /// Enumerate all entries, in source order. Malformed entries are
    /// returned as [`SourceEntry::Rejected`] rather than failing the call.
    async fn fetch_entries(&self) -> Result<Vec<SourceEntry>>;

    /// Short human-readable name for logs.
    fn describe(&self) -> String;
}

// =============================================================================
// INFERENCE TRAITS
// =============================================================================

/// Backend for text generation (LLM).
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Generate text given a prompt.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Get the model name being used.
    fn model_name(&self) -> &str;
}
