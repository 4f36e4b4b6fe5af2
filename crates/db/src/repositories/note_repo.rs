//! Repository for the `notes` table.

use sqlx::PgPool;

use carnet_core::search::{like_pattern, SEARCH_RESULT_CAP};
use carnet_core::types::OwnerId;

use crate::models::note::Note;

/// Column list for notes queries.
const COLUMNS: &str = "id, owner_id, title, content, created_at, updated_at";

/// Read operations over notes. The count and page fetch are independent
/// reads; a write landing between them shifts page boundaries by at most one
/// request, which callers treat as acceptable staleness.
pub struct NoteRepo;

impl NoteRepo {
    /// Fetch one page of an owner's notes, ordered by title ascending with
    /// id as the tie-break so pagination stays deterministic across pages.
    pub async fn list_by_owner(
        pool: &PgPool,
        owner_id: OwnerId,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notes
             WHERE owner_id = $1
             ORDER BY title ASC, id ASC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(owner_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count an owner's notes.
    pub async fn count_by_owner(pool: &PgPool, owner_id: OwnerId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM notes WHERE owner_id = $1")
            .bind(owner_id)
            .fetch_one(pool)
            .await
    }

    /// Raw substring search over title and content.
    ///
    /// The term is always parameter-bound (as a `%term%` pattern); the only
    /// literal SQL is the fixed shape, including the result cap. Rows come
    /// back as loose JSON and MUST pass through
    /// [`carnet_core::validate::validate_search_rows`] before use. Result
    /// order is unspecified beyond the cap.
    pub async fn search(
        pool: &PgPool,
        owner_id: OwnerId,
        term: &str,
    ) -> Result<Vec<serde_json::Value>, sqlx::Error> {
        let pattern = like_pattern(term);
        let query = format!(
            "SELECT to_jsonb(n) FROM (
                 SELECT id, title, content FROM notes
                 WHERE owner_id = $1 AND (title ILIKE $2 OR content ILIKE $2)
                 LIMIT {SEARCH_RESULT_CAP}
             ) n"
        );
        let rows = sqlx::query_scalar::<_, serde_json::Value>(&query)
            .bind(owner_id)
            .bind(&pattern)
            .fetch_all(pool)
            .await?;

        tracing::debug!(term_len = term.len(), rows = rows.len(), "Raw note search fetched");
        Ok(rows)
    }
}
