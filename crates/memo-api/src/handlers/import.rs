//! Batch import handler.

use axum::{extract::State, Json};
use serde_json::Value;
use tracing::info;

use crate::{ApiError, ApiJson, AppState};
use memo_core::{ImportRecord, ImportResult};
use memo_import::{parse_record, ImportMode, MemoImporter, RecordSource};

/// Request body for an import. Entries that [`parse_record`] rejects are
/// skipped rather than failing the request.
#[derive(Debug, utoipa::ToSchema)]
pub struct ImportMemosRequest {
    pub memos: Vec<ImportRecord>,
}

/// Import memos from a client-side store.
///
/// Every well-formed entry is created as a new memo. Malformed entries are
/// dropped before the import runs.
///
/// POST /api/memos/import
#[utoipa::path(post, path = "/api/memos/import", tag = "Memos",
    request_body = ImportMemosRequest,
    responses((status = 200, description = "Import outcome", body = ImportResult),
              (status = 400, description = "No memos array or no valid memos")))]
pub async fn import_memos(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<Value>,
) -> Result<Json<ImportResult>, ApiError> {
    let entries = body
        .get("memos")
        .and_then(Value::as_array)
        .ok_or_else(|| ApiError::BadRequest("A memos array is required".to_string()))?;

    let records: Vec<ImportRecord> = entries
        .iter()
        .filter_map(|entry| parse_record(entry).ok())
        .collect();
    if records.is_empty() {
        return Err(ApiError::BadRequest("No valid memos to import".to_string()));
    }

    info!(
        subsystem = "api",
        component = "import",
        received = entries.len(),
        valid = records.len(),
        "Importing memos"
    );

    let importer = MemoImporter::new(state.memos.clone());
    let result = importer
        .import_from(&RecordSource::new(records), ImportMode::CreateOnly)
        .await;
    Ok(Json(result))
}
