//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// `?limit=` for recent-entries listings. Clamped by
/// [`blog_core::entry::clamp_recent_limit`].
#[derive(Debug, Deserialize)]
pub struct LimitParams {
    pub limit: Option<i64>,
}
