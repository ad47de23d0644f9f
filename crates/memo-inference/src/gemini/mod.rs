//! Google Gemini generative text backend.
//!
//! Talks to the REST `generateContent` endpoint directly with reqwest.
//!
//! # Example
//!
//! ```rust,no_run
//! use memo_inference::gemini::{GeminiBackend, GeminiConfig};
//! use memo_core::GenerationBackend;
//!
//! #[tokio::main]
//! async fn main() {
//!     let backend = GeminiBackend::new(GeminiConfig::new("my-api-key")).unwrap();
//!     let text = backend.generate("Say hello").await.unwrap();
//!     println!("{}", text);
//! }
//! ```

mod backend;
mod types;

pub use backend::{
    GeminiBackend, GeminiConfig, DEFAULT_GEMINI_URL, DEFAULT_GEN_MODEL, DEFAULT_TIMEOUT_SECS,
};
pub use types::*;
