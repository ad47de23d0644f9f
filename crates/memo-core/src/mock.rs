//! In-memory memo repository for deterministic testing.
//!
//! Behaves like the PostgreSQL store (newest-first listing, store-assigned
//! UUIDv7 IDs, `NotFound` on missing IDs) and lets tests inject failures for
//! specific calls and inspect the calls that were made.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use memo_core::mock::{MockCall, MockMemoRepository};
//!
//! let repo = MockMemoRepository::new().fail_update_for("1", "conflict");
//! repo.seed("1", fields);
//! assert_eq!(repo.list().await.unwrap().len(), 1);
//! assert_eq!(repo.calls(), vec![MockCall::List]);
//! ```

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use crate::error::{Error, Result};
use crate::ids::new_v7;
use crate::models::{Memo, MemoFields, MemoStats, CATEGORY_ALL};
use crate::traits::MemoRepository;

/// A call made against the mock repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    List,
    Fetch(String),
    Create(MemoFields),
    Update(String, MemoFields),
    Delete(String),
    DeleteAll,
    Search(String),
    ListByCategory(String),
    UpdateAiSummary(String, String),
    Stats,
}

#[derive(Debug, Default)]
struct MockState {
    /// Insertion order; listings return newest first.
    memos: Vec<Memo>,
    list_failure: Option<String>,
    create_failures: HashMap<String, String>,
    update_failures: HashMap<String, String>,
    summary_failures: HashMap<String, String>,
    calls: Vec<MockCall>,
}

/// Mock memo repository for testing.
#[derive(Clone, Default)]
pub struct MockMemoRepository {
    state: Arc<Mutex<MockState>>,
}

impl MockMemoRepository {
    /// Create an empty mock repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `list` fail with the given message.
    pub fn fail_list(self, message: impl Into<String>) -> Self {
        self.state.lock().unwrap().list_failure = Some(message.into());
        self
    }

    /// Make `create` fail for fields with this title.
    pub fn fail_create_for_title(self, title: impl Into<String>, message: impl Into<String>) -> Self {
        self.state
            .lock()
            .unwrap()
            .create_failures
            .insert(title.into(), message.into());
        self
    }

    /// Make `update` fail for this ID.
    pub fn fail_update_for(self, id: impl Into<String>, message: impl Into<String>) -> Self {
        self.state
            .lock()
            .unwrap()
            .update_failures
            .insert(id.into(), message.into());
        self
    }

    /// Make `update_ai_summary` fail for this ID.
    pub fn fail_summary_for(self, id: impl Into<String>, message: impl Into<String>) -> Self {
        self.state
            .lock()
            .unwrap()
            .summary_failures
            .insert(id.into(), message.into());
        self
    }

    /// Insert a memo with a caller-chosen ID, bypassing failure injection
    /// and the call log.
    pub fn seed(&self, id: impl Into<String>, fields: MemoFields) -> Memo {
        let memo = build_memo(id.into(), fields);
        self.state.lock().unwrap().memos.push(memo.clone());
        memo
    }

    /// All calls made so far, in order.
    pub fn calls(&self) -> Vec<MockCall> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Clear the call log.
    pub fn clear_calls(&self) {
        self.state.lock().unwrap().calls.clear()
    }

    /// Snapshot of stored memos, newest first.
    pub fn memos(&self) -> Vec<Memo> {
        newest_first(&self.state.lock().unwrap().memos)
    }

    fn record(&self, call: MockCall) {
        self.state.lock().unwrap().calls.push(call);
    }
}

fn build_memo(id: String, fields: MemoFields) -> Memo {
    let now = Utc::now();
    Memo {
        id,
        title: fields.title,
        content: fields.content,
        category: fields.category,
        tags: fields.tags,
        created_at: now,
        updated_at: now,
        ai_summary: None,
    }
}

fn newest_first(memos: &[Memo]) -> Vec<Memo> {
    memos.iter().rev().cloned().collect()
}

fn not_found(id: &str) -> Error {
    Error::NotFound(format!("Memo {} not found", id))
}

#[async_trait]
impl MemoRepository for MockMemoRepository {
    async fn list(&self) -> Result<Vec<Memo>> {
        self.record(MockCall::List);
        let state = self.state.lock().unwrap();
        if let Some(msg) = &state.list_failure {
            return Err(Error::Request(msg.clone()));
        }
        Ok(newest_first(&state.memos))
    }

    async fn fetch(&self, id: &str) -> Result<Option<Memo>> {
        self.record(MockCall::Fetch(id.to_string()));
        let state = self.state.lock().unwrap();
        Ok(state.memos.iter().find(|m| m.id == id).cloned())
    }

    async fn create(&self, fields: MemoFields) -> Result<Memo> {
        self.record(MockCall::Create(fields.clone()));
        let mut state = self.state.lock().unwrap();
        if let Some(msg) = state.create_failures.get(&fields.title) {
            return Err(Error::Conflict(msg.clone()));
        }
        let memo = build_memo(new_v7().to_string(), fields);
        state.memos.push(memo.clone());
        Ok(memo)
    }

    async fn update(&self, id: &str, fields: MemoFields) -> Result<Memo> {
        self.record(MockCall::Update(id.to_string(), fields.clone()));
        let mut state = self.state.lock().unwrap();
        if let Some(msg) = state.update_failures.get(id) {
            return Err(Error::Conflict(msg.clone()));
        }
        let memo = state
            .memos
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| not_found(id))?;
        memo.title = fields.title;
        memo.content = fields.content;
        memo.category = fields.category;
        memo.tags = fields.tags;
        memo.updated_at = Utc::now();
        Ok(memo.clone())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.record(MockCall::Delete(id.to_string()));
        let mut state = self.state.lock().unwrap();
        let before = state.memos.len();
        state.memos.retain(|m| m.id != id);
        if state.memos.len() == before {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn delete_all(&self) -> Result<u64> {
        self.record(MockCall::DeleteAll);
        let mut state = self.state.lock().unwrap();
        let removed = state.memos.len() as u64;
        state.memos.clear();
        Ok(removed)
    }

    async fn search(&self, query: &str) -> Result<Vec<Memo>> {
        self.record(MockCall::Search(query.to_string()));
        let needle = query.to_lowercase();
        let state = self.state.lock().unwrap();
        Ok(newest_first(&state.memos)
            .into_iter()
            .filter(|m| {
                m.title.to_lowercase().contains(&needle)
                    || m.content.to_lowercase().contains(&needle)
                    || m.tags.iter().any(|t| t.to_lowercase().contains(&needle))
            })
            .collect())
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Memo>> {
        self.record(MockCall::ListByCategory(category.to_string()));
        let state = self.state.lock().unwrap();
        Ok(newest_first(&state.memos)
            .into_iter()
            .filter(|m| category == CATEGORY_ALL || m.category == category)
            .collect())
    }

    async fn update_ai_summary(&self, id: &str, summary: &str) -> Result<()> {
        self.record(MockCall::UpdateAiSummary(id.to_string(), summary.to_string()));
        let mut state = self.state.lock().unwrap();
        if let Some(msg) = state.summary_failures.get(id) {
            return Err(Error::Conflict(msg.clone()));
        }
        let memo = state
            .memos
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| not_found(id))?;
        memo.ai_summary = Some(summary.to_string());
        Ok(())
    }

    async fn stats(&self) -> Result<MemoStats> {
        self.record(MockCall::Stats);
        let state = self.state.lock().unwrap();
        let mut by_category = BTreeMap::new();
        for memo in &state.memos {
            *by_category.entry(memo.category.clone()).or_insert(0) += 1;
        }
        Ok(MemoStats {
            total: state.memos.len() as i64,
            by_category,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(title: &str, category: &str, tags: &[&str]) -> MemoFields {
        MemoFields {
            title: title.to_string(),
            content: format!("{} body", title),
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_new_id() {
        let repo = MockMemoRepository::new();
        let memo = repo.create(fields("A", "work", &[])).await.unwrap();
        assert_eq!(uuid::Uuid::parse_str(&memo.id).unwrap().get_version_num(), 7);
        assert_eq!(repo.memos().len(), 1);
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let repo = MockMemoRepository::new();
        repo.seed("1", fields("old", "work", &[]));
        repo.seed("2", fields("new", "work", &[]));
        let ids: Vec<String> = repo.list().await.unwrap().into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = MockMemoRepository::new();
        let err = repo.update("nope", fields("A", "work", &[])).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn test_injected_update_failure() {
        let repo = MockMemoRepository::new().fail_update_for("1", "conflict");
        repo.seed("1", fields("A", "work", &[]));
        let err = repo.update("1", fields("A2", "work", &[])).await.unwrap_err();
        assert_eq!(err.detail(), "conflict");
        assert_eq!(repo.memos()[0].title, "A");
    }

    #[tokio::test]
    async fn test_search_matches_tags_case_insensitively() {
        let repo = MockMemoRepository::new();
        repo.seed("1", fields("Groceries", "personal", &["Shopping"]));
        repo.seed("2", fields("Standup", "work", &["meeting"]));
        let hits = repo.search("shop").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");
    }

    #[tokio::test]
    async fn test_stats_counts_per_category() {
        let repo = MockMemoRepository::new();
        repo.seed("1", fields("a", "work", &[]));
        repo.seed("2", fields("b", "work", &[]));
        repo.seed("3", fields("c", "idea", &[]));
        let stats = repo.stats().await.unwrap();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.by_category.get("work"), Some(&2));
        assert_eq!(stats.by_category.get("idea"), Some(&1));
    }

    #[tokio::test]
    async fn test_calls_are_logged_in_order() {
        let repo = MockMemoRepository::new();
        repo.list().await.unwrap();
        repo.list_by_category("all").await.unwrap();
        assert_eq!(
            repo.calls(),
            vec![MockCall::List, MockCall::ListByCategory("all".to_string())]
        );
    }
}
