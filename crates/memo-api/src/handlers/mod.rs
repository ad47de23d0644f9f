//! HTTP handlers for memo-api.

pub mod import;
pub mod memos;
pub mod summarize;
