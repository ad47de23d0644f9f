//! Memo CRUD, search and statistics handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::{ApiError, ApiJson, AppState};
use memo_core::{Memo, MemoFields, MemoStats, CATEGORY_ALL};

/// Query parameters for listing memos.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct ListMemosQuery {
    /// Category to filter by; `all` or absent lists every memo.
    pub category: Option<String>,
    /// Case-insensitive search over title, content and tags. Takes
    /// precedence over `category`.
    pub q: Option<String>,
}

/// List memos, newest first.
///
/// GET /api/memos
#[utoipa::path(get, path = "/api/memos", tag = "Memos",
    params(ListMemosQuery),
    responses((status = 200, description = "Memos, newest first", body = [Memo])))]
pub async fn list_memos(
    State(state): State<AppState>,
    Query(query): Query<ListMemosQuery>,
) -> Result<Json<Vec<Memo>>, ApiError> {
    let search = query.q.as_deref().map(str::trim).filter(|q| !q.is_empty());
    let memos = match search {
        Some(q) => state.memos.search(q).await?,
        None => {
            let category = query
                .category
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .unwrap_or(CATEGORY_ALL);
            state.memos.list_by_category(category).await?
        }
    };
    Ok(Json(memos))
}

/// Create a memo.
///
/// POST /api/memos
#[utoipa::path(post, path = "/api/memos", tag = "Memos",
    request_body = MemoFields,
    responses((status = 201, description = "Created", body = Memo),
              (status = 400, description = "Blank title, content or category")))]
pub async fn create_memo(
    State(state): State<AppState>,
    ApiJson(fields): ApiJson<MemoFields>,
) -> Result<(StatusCode, Json<Memo>), ApiError> {
    fields.validate()?;
    let memo = state.memos.create(fields).await?;
    info!(
        subsystem = "api",
        component = "memos",
        op = "create",
        memo_id = %memo.id,
        "Memo created"
    );
    Ok((StatusCode::CREATED, Json(memo)))
}

/// Fetch one memo.
///
/// GET /api/memos/:id
#[utoipa::path(get, path = "/api/memos/{id}", tag = "Memos",
    params(("id" = String, Path, description = "Memo ID")),
    responses((status = 200, description = "The memo", body = Memo),
              (status = 404, description = "Not found")))]
pub async fn get_memo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Memo>, ApiError> {
    state
        .memos
        .fetch(&id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Memo {} not found", id)))
}

/// Replace a memo's title, content, category and tags.
///
/// PUT /api/memos/:id
#[utoipa::path(put, path = "/api/memos/{id}", tag = "Memos",
    params(("id" = String, Path, description = "Memo ID")),
    request_body = MemoFields,
    responses((status = 200, description = "Updated", body = Memo),
              (status = 400, description = "Blank title, content or category"),
              (status = 404, description = "Not found")))]
pub async fn update_memo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(fields): ApiJson<MemoFields>,
) -> Result<Json<Memo>, ApiError> {
    fields.validate()?;
    let memo = state.memos.update(&id, fields).await?;
    Ok(Json(memo))
}

/// Delete a memo.
///
/// DELETE /api/memos/:id
#[utoipa::path(delete, path = "/api/memos/{id}", tag = "Memos",
    params(("id" = String, Path, description = "Memo ID")),
    responses((status = 204, description = "Deleted"),
              (status = 404, description = "Not found")))]
pub async fn delete_memo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.memos.delete(&id).await?;
    info!(
        subsystem = "api",
        component = "memos",
        op = "delete",
        memo_id = %id,
        "Memo deleted"
    );
    Ok(StatusCode::NO_CONTENT)
}

/// Delete every memo.
///
/// DELETE /api/memos
#[utoipa::path(delete, path = "/api/memos", tag = "Memos",
    responses((status = 200, description = "Number of memos removed")))]
pub async fn clear_memos(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let deleted = state.memos.delete_all().await?;
    info!(
        subsystem = "api",
        component = "memos",
        op = "delete_all",
        deleted,
        "All memos deleted"
    );
    Ok(Json(json!({ "deleted": deleted })))
}

/// Memo counts, overall and per category.
///
/// GET /api/memos/stats
#[utoipa::path(get, path = "/api/memos/stats", tag = "Memos",
    responses((status = 200, description = "Counts", body = MemoStats)))]
pub async fn memo_stats(State(state): State<AppState>) -> Result<Json<MemoStats>, ApiError> {
    Ok(Json(state.memos.stats().await?))
}
