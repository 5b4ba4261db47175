//! Repository for the `comments` table.

use std::collections::HashMap;

use blog_core::types::DbId;
use sqlx::PgPool;

use crate::models::comment::{Comment, CreateComment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, entry_id, name, email, body, created_at, modified_at";

/// Provides insert and read access to comments. Comments are never edited;
/// they disappear only when their entry is deleted.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a comment inside its own transaction, returning the created row.
    ///
    /// Both timestamps take the transaction's `NOW()`, so they are equal.
    pub async fn create(pool: &PgPool, input: &CreateComment) -> Result<Comment, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO comments (entry_id, name, email, body, created_at, modified_at)
             VALUES ($1, $2, $3, $4, NOW(), NOW())
             RETURNING {COLUMNS}"
        );
        let comment = sqlx::query_as::<_, Comment>(&query)
            .bind(input.entry_id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.body)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(comment)
    }

    /// Find a comment by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE id = $1");
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All comments on an entry, oldest first.
    pub async fn list_for_entry(
        pool: &PgPool,
        entry_id: DbId,
    ) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM comments WHERE entry_id = $1 ORDER BY created_at, id"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(entry_id)
            .fetch_all(pool)
            .await
    }

    /// Number of comments on an entry.
    pub async fn count_for_entry(pool: &PgPool, entry_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM comments WHERE entry_id = $1")
            .bind(entry_id)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Comment counts for several entries in one query.
    ///
    /// Entries without comments are absent from the map.
    pub async fn counts_for_entries(
        pool: &PgPool,
        entry_ids: &[DbId],
    ) -> Result<HashMap<DbId, i64>, sqlx::Error> {
        let rows: Vec<(DbId, i64)> = sqlx::query_as(
            "SELECT entry_id, COUNT(*) FROM comments
             WHERE entry_id = ANY($1)
             GROUP BY entry_id",
        )
        .bind(entry_ids)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().collect())
    }
}
