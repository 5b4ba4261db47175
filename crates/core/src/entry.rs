//! Entry field rules and listing limits.

use crate::error::CoreError;

/// Maximum title length, in characters.
pub const TITLE_MAX_LENGTH: usize = 500;

/// Default number of entries returned by a recent-entries listing.
pub const DEFAULT_RECENT_LIMIT: i64 = 5;

/// Upper bound for any recent-entries listing.
pub const MAX_RECENT_LIMIT: i64 = 100;

/// Validate an entry title (non-blank, at most [`TITLE_MAX_LENGTH`] chars).
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Title must not be empty".into()));
    }
    let len = title.chars().count();
    if len > TITLE_MAX_LENGTH {
        return Err(CoreError::Validation(format!(
            "Title must be at most {TITLE_MAX_LENGTH} characters (it has {len})"
        )));
    }
    Ok(())
}

/// Validate an entry body (non-blank, otherwise unbounded).
pub fn validate_body(body: &str) -> Result<(), CoreError> {
    if body.trim().is_empty() {
        return Err(CoreError::Validation("Body must not be empty".into()));
    }
    Ok(())
}

/// Validate both user-supplied entry fields.
pub fn validate_entry(title: &str, body: &str) -> Result<(), CoreError> {
    validate_title(title)?;
    validate_body(body)
}

/// Resolve an optional requested limit into `1..=MAX_RECENT_LIMIT`.
pub fn clamp_recent_limit(limit: Option<i64>) -> i64 {
    limit
        .unwrap_or(DEFAULT_RECENT_LIMIT)
        .clamp(1, MAX_RECENT_LIMIT)
}
