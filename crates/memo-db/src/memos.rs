//! Memo repository implementation.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{postgres::PgRow, Pool, Postgres, Row};
use tracing::debug;
use uuid::Uuid;

use memo_core::{
    new_v7, parse_store_id, Error, Memo, MemoFields, MemoRepository, MemoStats, Result,
    CATEGORY_ALL,
};

use crate::escape_like;

const MEMO_COLUMNS: &str =
    "id, title, content, category, tags, ai_summary, created_at, updated_at";

/// PostgreSQL implementation of MemoRepository.
#[derive(Clone)]
pub struct PgMemoRepository {
    pool: Pool<Postgres>,
}

impl PgMemoRepository {
    /// Create a new PgMemoRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Resolve a domain ID to a store key, treating foreign IDs as missing.
    fn store_key(id: &str) -> Result<Uuid> {
        parse_store_id(id).ok_or_else(|| not_found(id))
    }
}

fn not_found(id: &str) -> Error {
    Error::NotFound(format!("Memo {} not found", id))
}

/// Map a database row to a Memo.
fn map_row_to_memo(row: PgRow) -> Memo {
    let id: Uuid = row.get("id");
    Memo {
        id: id.to_string(),
        title: row.get("title"),
        content: row.get("content"),
        category: row.get("category"),
        tags: row
            .get::<Option<Vec<String>>, _>("tags")
            .unwrap_or_default(),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
        ai_summary: row.get("ai_summary"),
    }
}

#[async_trait]
impl MemoRepository for PgMemoRepository {
    async fn list(&self) -> Result<Vec<Memo>> {
        let query = format!(
            "SELECT {} FROM memos ORDER BY created_at DESC, id DESC",
            MEMO_COLUMNS
        );
        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(Error::Database)?;

        debug!(
            subsystem = "database",
            component = "memos",
            op = "list",
            result_count = rows.len(),
            "Listed memos"
        );
        Ok(rows.into_iter().map(map_row_to_memo).collect())
    }

    async fn fetch(&self, id: &str) -> Result<Option<Memo>> {
        let Some(key) = parse_store_id(id) else {
            return Ok(None);
        };
        let query = format!("SELECT {} FROM memos WHERE id = $1", MEMO_COLUMNS);
        let row = sqlx::query(&query)
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(Error::Database)?;
        Ok(row.map(map_row_to_memo))
    }

    async fn create(&self, fields: MemoFields) -> Result<Memo> {
        let id = new_v7();
        let now = Utc::now();
        let query = format!(
            "INSERT INTO memos (id, title, content, category, tags, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $6)
             RETURNING {}",
            MEMO_COLUMNS
        );
        let row = sqlx::query(&query)
            .bind(id)
            .bind(&fields.title)
            .bind(&fields.content)
            .bind(&fields.category)
            .bind(&fields.tags)
            .bind(now)
            .fetch_one(&self.pool)
            .await
            .map_err(Error::Database)?;

        debug!(
            subsystem = "database",
            component = "memos",
            op = "create",
            memo_id = %id,
            "Created memo"
        );
        Ok(map_row_to_memo(row))
    }

    async fn update(&self, id: &str, fields: MemoFields) -> Result<Memo> {
        let key = Self::store_key(id)?;
        let query = format!(
            "UPDATE memos
             SET title = $1, content = $2, category = $3, tags = $4, updated_at = $5
             WHERE id = $6
             RETURNING {}",
            MEMO_COLUMNS
        );
        let row = sqlx::query(&query)
            .bind(&fields.title)
            .bind(&fields.content)
            .bind(&fields.category)
            .bind(&fields.tags)
            .bind(Utc::now())
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(Error::Database)?
            .ok_or_else(|| not_found(id))?;

        debug!(
            subsystem = "database",
            component = "memos",
            op = "update",
            memo_id = %key,
            "Updated memo"
        );
        Ok(map_row_to_memo(row))
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let key = Self::store_key(id)?;
        let result = sqlx::query("DELETE FROM memos WHERE id = $1")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn delete_all(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM memos")
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;
        Ok(result.rows_affected())
    }

    async fn search(&self, query: &str) -> Result<Vec<Memo>> {
        let pattern = format!("%{}%", escape_like(query));
        let sql = format!(
            "SELECT {} FROM memos
             WHERE title ILIKE $1 ESCAPE '\\'
                OR content ILIKE $1 ESCAPE '\\'
                OR EXISTS (SELECT 1 FROM unnest(tags) AS t(tag) WHERE t.tag ILIKE $1 ESCAPE '\\')
             ORDER BY created_at DESC, id DESC",
            MEMO_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(&pattern)
            .fetch_all(&self.pool)
            .await
            .map_err(Error::Database)?;

        debug!(
            subsystem = "database",
            component = "memos",
            op = "search",
            query = %query,
            result_count = rows.len(),
            "Searched memos"
        );
        Ok(rows.into_iter().map(map_row_to_memo).collect())
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Memo>> {
        if category == CATEGORY_ALL {
            return self.list().await;
        }
        let query = format!(
            "SELECT {} FROM memos WHERE category = $1 ORDER BY created_at DESC, id DESC",
            MEMO_COLUMNS
        );
        let rows = sqlx::query(&query)
            .bind(category)
            .fetch_all(&self.pool)
            .await
            .map_err(Error::Database)?;
        Ok(rows.into_iter().map(map_row_to_memo).collect())
    }

    async fn update_ai_summary(&self, id: &str, summary: &str) -> Result<()> {
        let key = Self::store_key(id)?;
        let result = sqlx::query("UPDATE memos SET ai_summary = $1 WHERE id = $2")
            .bind(summary)
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn stats(&self) -> Result<MemoStats> {
        let rows = sqlx::query(
            "SELECT category, COUNT(*) AS count FROM memos GROUP BY category ORDER BY category",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        let by_category: BTreeMap<String, i64> = rows
            .into_iter()
            .map(|r| (r.get("category"), r.get("count")))
            .collect();
        let total = by_category.values().sum();

        Ok(MemoStats { total, by_category })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_key_accepts_uuid() {
        let id = new_v7();
        assert_eq!(PgMemoRepository::store_key(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_store_key_rejects_foreign_id_as_not_found() {
        let err = PgMemoRepository::store_key("1").unwrap_err();
        assert_eq!(err.to_string(), "Not found: Memo 1 not found");
    }
}
