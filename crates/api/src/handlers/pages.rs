//! HTML page handlers: homepage, entry permalink (view and comment
//! submission), and the standalone recent-entries fragment.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use blog_core::comment::CommentInput;
use blog_core::entry::clamp_recent_limit;
use blog_core::error::CoreError;
use blog_core::permalink::parse_permalink;
use blog_db::models::entry::Entry;
use blog_db::repositories::{CommentRepo, EntryRepo, UserRepo};
use blog_db::DbPool;
use tera::Context;

use crate::error::{AppError, AppResult, PageResult};
use crate::forms::CommentForm;
use crate::state::AppState;
use crate::templates;
use crate::views::{CommentView, EntryDetail, EntrySummary, RecentEntry};

/// Permalink path segments: year, month, day, `<id>-<slug>`.
type PermalinkPath = Path<(String, String, String, String)>;

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

/// Resolve permalink segments to an entry by primary key alone.
///
/// The date and slug segments only have to be well-formed; they are not
/// compared with the entry. Malformed segments and unknown ids are both
/// not-found.
pub async fn resolve_permalink(
    pool: &DbPool,
    year: &str,
    month: &str,
    day: &str,
    key: &str,
) -> AppResult<Entry> {
    let permalink = parse_permalink(year, month, day, key)
        .ok_or_else(|| AppError::NotFound("No entry matches this address".into()))?;

    let entry = EntryRepo::find_by_id(pool, permalink.id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Entry",
            id: permalink.id,
        })?;

    if permalink.slug != entry.slug {
        tracing::debug!(
            entry_id = entry.id,
            requested_slug = permalink.slug,
            "Serving entry under a non-canonical permalink",
        );
    }

    Ok(entry)
}

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

/// GET /
///
/// Recent entries with title and body, or "No blog entries yet.".
pub async fn home(State(state): State<AppState>) -> PageResult<Html<String>> {
    let limit = clamp_recent_limit(Some(state.config.home_page_entries));
    let entries = EntryRepo::recent(&state.pool, limit).await?;

    let ids: Vec<_> = entries.iter().map(|entry| entry.id).collect();
    let counts = CommentRepo::counts_for_entries(&state.pool, &ids).await?;

    let summaries: Vec<EntrySummary> = entries
        .iter()
        .map(|entry| EntrySummary::new(entry, counts.get(&entry.id).copied().unwrap_or(0)))
        .collect();

    let mut context = page_context(&state).await?;
    context.insert("entries", &summaries);

    Ok(Html(templates::render("home.html", &context)?))
}

/// GET /{year}/{month}/{day}/{id}-{slug}/
pub async fn entry_detail(
    State(state): State<AppState>,
    Path((year, month, day, key)): PermalinkPath,
) -> PageResult<Html<String>> {
    let entry = resolve_permalink(&state.pool, &year, &month, &day, &key).await?;
    let form = CommentForm::unbound(&entry);

    render_entry_page(&state, &form).await
}

/// POST /{year}/{month}/{day}/{id}-{slug}/
///
/// Valid submissions are saved and redirected (302) to the entry's canonical
/// permalink. Invalid ones re-render the page with inline errors and
/// persist nothing.
pub async fn post_comment(
    State(state): State<AppState>,
    Path((year, month, day, key)): PermalinkPath,
    Form(input): Form<CommentInput>,
) -> PageResult<Response> {
    let entry = resolve_permalink(&state.pool, &year, &month, &day, &key).await?;
    let form = CommentForm::builder().entry(&entry).data(input).build()?;

    if form.is_valid() {
        form.save(&state.pool).await?;
        return Ok((StatusCode::FOUND, [(header::LOCATION, entry.absolute_url())]).into_response());
    }

    tracing::debug!(
        entry_id = entry.id,
        invalid_fields = form.errors().len(),
        "Comment form rejected",
    );

    Ok(render_entry_page(&state, &form).await?.into_response())
}

/// GET /fragments/recent-entries
///
/// The recent-entries sidebar on its own.
pub async fn recent_entries_fragment(State(state): State<AppState>) -> PageResult<Html<String>> {
    let context = page_context(&state).await?;
    Ok(Html(templates::render("recent_entries.html", &context)?))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Context shared by every page: the recent-entries sidebar.
async fn page_context(state: &AppState) -> Result<Context, sqlx::Error> {
    let limit = clamp_recent_limit(Some(state.config.recent_entries_limit));
    let recent: Vec<RecentEntry> = EntryRepo::recent(&state.pool, limit)
        .await?
        .iter()
        .map(RecentEntry::from)
        .collect();

    let mut context = Context::new();
    context.insert("recent_entries", &recent);
    Ok(context)
}

/// Render an entry with its comments and the given form.
async fn render_entry_page(state: &AppState, form: &CommentForm<'_>) -> PageResult<Html<String>> {
    let entry = form.entry();

    let author = UserRepo::find_by_id(&state.pool, entry.author_id)
        .await?
        .map(|user| user.username)
        .unwrap_or_default();

    let comments: Vec<CommentView> = CommentRepo::list_for_entry(&state.pool, entry.id)
        .await?
        .iter()
        .map(CommentView::from)
        .collect();

    let mut context = page_context(state).await?;
    context.insert("entry", &EntryDetail::new(entry, &author));
    context.insert("comments", &comments);
    context.insert("form", &form.view());

    Ok(Html(templates::render("entry_detail.html", &context)?))
}
