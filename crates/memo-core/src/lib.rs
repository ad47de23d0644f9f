//! # memo-core
//!
//! Core types, traits, and abstractions for memo-keeper.
//!
//! This crate provides the memo data model, the shared error type, and the
//! capability traits (`MemoRepository`, `MemoSource`, `GenerationBackend`)
//! that the storage, inference, import and API crates are written against.

pub mod error;
pub mod ids;
pub mod models;
pub mod traits;

// In-memory repository for tests in this and dependent crates
#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use ids::{new_v7, parse_store_id};
pub use models::*;
pub use traits::*;
