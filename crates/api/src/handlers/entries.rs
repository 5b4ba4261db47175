//! JSON handlers for blog entries.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use blog_core::entry::{clamp_recent_limit, validate_body, validate_entry, validate_title};
use blog_core::error::CoreError;
use blog_core::types::DbId;
use blog_db::models::entry::{CreateEntry, EntryResponse, UpdateEntry};
use blog_db::repositories::{EntryRepo, UserRepo};

use crate::error::AppResult;
use crate::query::LimitParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/entries
///
/// Most recent entries first. `?limit=` defaults to 5.
pub async fn list_entries(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_recent_limit(params.limit);
    let entries: Vec<EntryResponse> = EntryRepo::recent(&state.pool, limit)
        .await?
        .into_iter()
        .map(EntryResponse::from)
        .collect();

    Ok(Json(DataResponse { data: entries }))
}

/// POST /api/v1/entries
pub async fn create_entry(
    State(state): State<AppState>,
    Json(input): Json<CreateEntry>,
) -> AppResult<impl IntoResponse> {
    validate_entry(&input.title, &input.body)?;

    UserRepo::find_by_id(&state.pool, input.author_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "User",
            id: input.author_id,
        })?;

    let entry = EntryRepo::create(&state.pool, &input).await?;

    tracing::info!(entry_id = entry.id, author_id = entry.author_id, slug = %entry.slug, "Entry created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: EntryResponse::from(entry),
        }),
    ))
}

/// GET /api/v1/entries/{id}
pub async fn get_entry(
    State(state): State<AppState>,
    Path(entry_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let entry = EntryRepo::find_by_id(&state.pool, entry_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Entry",
            id: entry_id,
        })?;

    Ok(Json(DataResponse {
        data: EntryResponse::from(entry),
    }))
}

/// PUT /api/v1/entries/{id}
///
/// Saves edits; the slug follows the title and `modified_at` is bumped.
pub async fn update_entry(
    State(state): State<AppState>,
    Path(entry_id): Path<DbId>,
    Json(input): Json<UpdateEntry>,
) -> AppResult<impl IntoResponse> {
    if let Some(title) = &input.title {
        validate_title(title)?;
    }
    if let Some(body) = &input.body {
        validate_body(body)?;
    }

    let entry = EntryRepo::save(&state.pool, entry_id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Entry",
            id: entry_id,
        })?;

    tracing::info!(entry_id, slug = %entry.slug, "Entry saved");

    Ok(Json(DataResponse {
        data: EntryResponse::from(entry),
    }))
}

/// DELETE /api/v1/entries/{id}
///
/// Deletes the entry and all of its comments.
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(entry_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !EntryRepo::delete(&state.pool, entry_id).await? {
        return Err(CoreError::NotFound {
            entity: "Entry",
            id: entry_id,
        }
        .into());
    }

    tracing::info!(entry_id, "Entry deleted");

    Ok(StatusCode::NO_CONTENT)
}
