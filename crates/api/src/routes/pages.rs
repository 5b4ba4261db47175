//! Route definitions for server-rendered pages, mounted at the root.

use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// ```text
/// GET    /                                   -> home
/// GET    /{year}/{month}/{day}/{id}-{slug}/  -> entry_detail
/// POST   /{year}/{month}/{day}/{id}-{slug}/  -> post_comment
/// GET    /fragments/recent-entries           -> recent_entries_fragment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route(
            "/{year}/{month}/{day}/{key}/",
            get(pages::entry_detail).post(pages::post_comment),
        )
        .route(
            "/fragments/recent-entries",
            get(pages::recent_entries_fragment),
        )
}
