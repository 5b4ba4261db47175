//! Comment model and DTOs.

use std::fmt;

use blog_core::comment::gravatar_url;
use blog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `comments` table.
///
/// `created_at` and `modified_at` are stamped together at insert and never
/// change afterwards.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub entry_id: DbId,
    pub name: String,
    pub email: String,
    pub body: String,
    pub created_at: Timestamp,
    pub modified_at: Timestamp,
}

impl Comment {
    pub fn gravatar_url(&self) -> String {
        gravatar_url(&self.email)
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.email)
    }
}

/// DTO for inserting a validated comment.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateComment {
    pub entry_id: DbId,
    pub name: String,
    pub email: String,
    pub body: String,
}

/// A comment as returned by the JSON API, with its derived avatar URL.
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    #[serde(flatten)]
    pub comment: Comment,
    pub gravatar_url: String,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        let gravatar_url = comment.gravatar_url();
        Self {
            comment,
            gravatar_url,
        }
    }
}
