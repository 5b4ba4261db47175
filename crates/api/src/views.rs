//! View models serialized into template contexts.
//!
//! Templates only ever see these structs, never database rows, so column
//! changes do not leak into template syntax.

use blog_core::types::Timestamp;
use blog_db::models::comment::Comment;
use blog_db::models::entry::Entry;
use serde::Serialize;

/// Human-readable date, e.g. `March 7, 2024`.
fn display_date(at: &Timestamp) -> String {
    at.format("%B %-d, %Y").to_string()
}

/// An entry as listed on the homepage.
#[derive(Debug, Clone, Serialize)]
pub struct EntrySummary {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub url: String,
    pub created_at: String,
    pub comment_count: i64,
}

impl EntrySummary {
    pub fn new(entry: &Entry, comment_count: i64) -> Self {
        Self {
            id: entry.id,
            title: entry.title.clone(),
            body: entry.body.clone(),
            url: entry.absolute_url(),
            created_at: display_date(&entry.created_at),
            comment_count,
        }
    }
}

/// An entry on its own permalink page.
#[derive(Debug, Clone, Serialize)]
pub struct EntryDetail {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub url: String,
    pub author: String,
    pub created_at: String,
    pub modified_at: String,
}

impl EntryDetail {
    pub fn new(entry: &Entry, author: &str) -> Self {
        Self {
            id: entry.id,
            title: entry.title.clone(),
            body: entry.body.clone(),
            url: entry.absolute_url(),
            author: author.to_string(),
            created_at: display_date(&entry.created_at),
            modified_at: display_date(&entry.modified_at),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentView {
    pub name: String,
    pub body: String,
    pub gravatar_url: String,
    pub created_at: String,
}

impl From<&Comment> for CommentView {
    fn from(comment: &Comment) -> Self {
        let name = if comment.name.is_empty() {
            "Anonymous".to_string()
        } else {
            comment.name.clone()
        };
        Self {
            name,
            body: comment.body.clone(),
            gravatar_url: comment.gravatar_url(),
            created_at: display_date(&comment.created_at),
        }
    }
}

/// A sidebar link to a recent entry.
#[derive(Debug, Clone, Serialize)]
pub struct RecentEntry {
    pub title: String,
    pub url: String,
}

impl From<&Entry> for RecentEntry {
    fn from(entry: &Entry) -> Self {
        Self {
            title: entry.title.clone(),
            url: entry.absolute_url(),
        }
    }
}
