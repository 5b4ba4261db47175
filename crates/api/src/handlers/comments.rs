//! JSON handlers for entry comments.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use blog_core::comment::CommentInput;
use blog_core::error::CoreError;
use blog_core::types::DbId;
use blog_db::models::comment::CommentResponse;
use blog_db::models::entry::Entry;
use blog_db::repositories::{CommentRepo, EntryRepo};

use crate::error::{AppError, AppResult};
use crate::forms::CommentForm;
use crate::response::DataResponse;
use crate::state::AppState;

/// Fetch an entry by id or return 404.
async fn ensure_entry(pool: &sqlx::PgPool, entry_id: DbId) -> AppResult<Entry> {
    EntryRepo::find_by_id(pool, entry_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Entry",
                id: entry_id,
            })
        })
}

/// GET /api/v1/entries/{id}/comments
///
/// Oldest first, each with its gravatar URL.
pub async fn list_comments(
    State(state): State<AppState>,
    Path(entry_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_entry(&state.pool, entry_id).await?;

    let comments: Vec<CommentResponse> = CommentRepo::list_for_entry(&state.pool, entry_id)
        .await?
        .into_iter()
        .map(CommentResponse::from)
        .collect();

    Ok(Json(DataResponse { data: comments }))
}

/// POST /api/v1/entries/{id}/comments
///
/// Same validation as the HTML form; field errors come back as a 400 with a
/// `fields` map.
pub async fn create_comment(
    State(state): State<AppState>,
    Path(entry_id): Path<DbId>,
    Json(input): Json<CommentInput>,
) -> AppResult<impl IntoResponse> {
    let entry = ensure_entry(&state.pool, entry_id).await?;
    let form = CommentForm::new(&entry, input);

    if !form.is_valid() {
        return Err(AppError::InvalidForm(form.into_errors()));
    }

    let comment = form.save(&state.pool).await?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CommentResponse::from(comment),
        }),
    ))
}
