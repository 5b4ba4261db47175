//! Repository for the `entries` table.
//!
//! Every write recomputes `slug` from the title being stored, so the slug
//! column can never drift from the title.

use blog_core::slug::slugify;
use blog_core::types::DbId;
use sqlx::PgPool;

use crate::models::entry::{CreateEntry, Entry, UpdateEntry};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, author_id, body, slug, created_at, modified_at";

/// Provides CRUD operations for blog entries.
pub struct EntryRepo;

impl EntryRepo {
    /// Insert a new entry, returning the created row.
    ///
    /// `created_at` and `modified_at` both default to `NOW()`.
    pub async fn create(pool: &PgPool, input: &CreateEntry) -> Result<Entry, sqlx::Error> {
        let query = format!(
            "INSERT INTO entries (title, author_id, body, slug)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Entry>(&query)
            .bind(&input.title)
            .bind(input.author_id)
            .bind(&input.body)
            .bind(slugify(&input.title))
            .fetch_one(pool)
            .await
    }

    /// Find an entry by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Entry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM entries WHERE id = $1");
        sqlx::query_as::<_, Entry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// The `limit` most recently created entries, newest first.
    ///
    /// Entries created in the same instant are ordered by descending id.
    pub async fn recent(pool: &PgPool, limit: i64) -> Result<Vec<Entry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM entries ORDER BY created_at DESC, id DESC LIMIT $1"
        );
        sqlx::query_as::<_, Entry>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Save edits to an entry. Only non-`None` fields are applied.
    ///
    /// The slug is recomputed from the resulting title and `modified_at` is
    /// bumped even when nothing else changed. `created_at` is untouched.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn save(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEntry,
    ) -> Result<Option<Entry>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let select = format!("SELECT {COLUMNS} FROM entries WHERE id = $1 FOR UPDATE");
        let Some(existing) = sqlx::query_as::<_, Entry>(&select)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let title = input.title.as_deref().unwrap_or(&existing.title);
        let body = input.body.as_deref().unwrap_or(&existing.body);

        let update = format!(
            "UPDATE entries SET
                title = $2,
                body = $3,
                slug = $4,
                modified_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let entry = sqlx::query_as::<_, Entry>(&update)
            .bind(id)
            .bind(title)
            .bind(body)
            .bind(slugify(title))
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(entry))
    }

    /// Permanently delete an entry and, by cascade, its comments.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM entries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
