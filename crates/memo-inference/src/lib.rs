//! # memo-inference
//!
//! Generative text backends for memo-keeper.
//!
//! This crate provides:
//! - A Gemini implementation of `GenerationBackend`
//! - Memo summarization on top of any `GenerationBackend`
//! - A mock backend for tests (feature `mock`)
//!
//! # Example
//!
//! ```rust,no_run
//! use memo_inference::{summarize, GeminiBackend};
//!
//! #[tokio::main]
//! async fn main() {
//!     let backend = GeminiBackend::from_env().unwrap();
//!     let summary = summarize(&backend, "Long memo text...").await.unwrap();
//!     println!("{}", summary);
//! }
//! ```

pub mod gemini;
pub mod summarize;

// Mock generation backend for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export core types
pub use memo_core::*;

pub use gemini::{GeminiBackend, GeminiConfig};
pub use summarize::{summarize, summary_prompt};
