pub mod entries;
pub mod health;
pub mod pages;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /entries                          list (recent), create
/// /entries/{id}                     get, save, delete
/// /entries/{id}/comments            list, create
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/entries", entries::router())
}
