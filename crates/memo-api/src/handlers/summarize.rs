//! AI summary handler.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{ApiError, ApiJson, AppState};
use memo_core::Error;

/// Request body for summarization.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeRequest {
    /// Memo text to summarize.
    #[serde(default)]
    pub content: String,
    /// When set, the summary is also stored on this memo.
    #[serde(default)]
    pub memo_id: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct SummarizeResponse {
    pub summary: String,
    pub success: bool,
}

/// Summarize memo text.
///
/// POST /api/summarize
#[utoipa::path(post, path = "/api/summarize", tag = "Summaries",
    request_body = SummarizeRequest,
    responses((status = 200, description = "Summary generated", body = SummarizeResponse),
              (status = 400, description = "Missing content"),
              (status = 500, description = "Summarization unavailable or failed")))]
pub async fn summarize_memo(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, ApiError> {
    if req.content.trim().is_empty() {
        return Err(ApiError::BadRequest("Memo content is required".to_string()));
    }

    let backend = state
        .generator
        .as_deref()
        .ok_or_else(|| ApiError::Internal("Gemini API key is not configured".to_string()))?;

    let summary = memo_inference::summarize(backend, &req.content)
        .await
        .map_err(|e| {
            warn!(
                subsystem = "api",
                component = "summarize",
                error = %e,
                "Summary generation failed"
            );
            match e {
                Error::InvalidInput(msg) => ApiError::BadRequest(msg),
                other => ApiError::Internal(other.detail()),
            }
        })?;

    if let Some(memo_id) = req.memo_id.as_deref().filter(|id| !id.is_empty()) {
        match state.memos.update_ai_summary(memo_id, &summary).await {
            Ok(()) => info!(
                subsystem = "api",
                component = "summarize",
                memo_id = %memo_id,
                "Summary stored"
            ),
            // The summary is still returned when storing it fails
            Err(e) => warn!(
                subsystem = "api",
                component = "summarize",
                memo_id = %memo_id,
                error = %e,
                "Failed to store summary"
            ),
        }
    }

    Ok(Json(SummarizeResponse {
        summary,
        success: true,
    }))
}
