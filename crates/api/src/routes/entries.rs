//! Route definitions for entries and their comments, mounted at `/entries`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{comments, entries};
use crate::state::AppState;

/// ```text
/// GET    /                  -> list_entries
/// POST   /                  -> create_entry
/// GET    /{id}              -> get_entry
/// PUT    /{id}              -> update_entry
/// DELETE /{id}              -> delete_entry
/// GET    /{id}/comments     -> list_comments
/// POST   /{id}/comments     -> create_comment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(entries::list_entries).post(entries::create_entry))
        .route(
            "/{id}",
            get(entries::get_entry)
                .put(entries::update_entry)
                .delete(entries::delete_entry),
        )
        .route(
            "/{id}/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
}
