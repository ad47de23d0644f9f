//! Memo summarization.

use tracing::debug;

use memo_core::{Error, GenerationBackend, Result};

/// Build the summarization prompt for a memo body.
pub fn summary_prompt(content: &str) -> String {
    format!(
        "Summarize the following memo concisely and clearly. \
         Cover the key content and important points in 3-5 sentences.\n\n\
         Memo content:\n{}\n\n\
         Summary:",
        content
    )
}

/// Summarize a memo body with the given backend.
///
/// Blank content is rejected before any model call. The model output is
/// trimmed; an empty result counts as a failed generation.
pub async fn summarize(backend: &dyn GenerationBackend, content: &str) -> Result<String> {
    if content.trim().is_empty() {
        return Err(Error::InvalidInput("Memo content is required".to_string()));
    }

    let raw = backend.generate(&summary_prompt(content)).await?;
    let summary = raw.trim();
    if summary.is_empty() {
        return Err(Error::Inference("No summary could be generated".to_string()));
    }

    debug!(
        subsystem = "inference",
        component = "summarize",
        model = backend.model_name(),
        response_len = summary.len(),
        "Summary generated"
    );
    Ok(summary.to_string())
}
