//! Blog entry model and DTOs.

use std::fmt;

use blog_core::permalink::entry_permalink;
use blog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `entries` table.
///
/// `slug` is always derived from `title` by the repository on every write;
/// no DTO carries it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Entry {
    pub id: DbId,
    pub title: String,
    pub author_id: DbId,
    pub body: String,
    pub slug: String,
    pub created_at: Timestamp,
    pub modified_at: Timestamp,
}

impl Entry {
    pub const VERBOSE_NAME_PLURAL: &'static str = "entries";

    /// Canonical permalink, e.g. `/2024/3/7/42-my-entry-title/`.
    pub fn absolute_url(&self) -> String {
        entry_permalink(&self.created_at, self.id, &self.slug)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

/// DTO for creating a new entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEntry {
    pub title: String,
    pub body: String,
    pub author_id: DbId,
}

/// DTO for editing an entry. Omitted fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEntry {
    pub title: Option<String>,
    pub body: Option<String>,
}

/// An entry as returned by the JSON API, with its permalink.
#[derive(Debug, Clone, Serialize)]
pub struct EntryResponse {
    #[serde(flatten)]
    pub entry: Entry,
    pub url: String,
}

impl From<Entry> for EntryResponse {
    fn from(entry: Entry) -> Self {
        let url = entry.absolute_url();
        Self { entry, url }
    }
}
