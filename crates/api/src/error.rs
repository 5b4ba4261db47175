use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use blog_core::comment::FieldErrors;
use blog_core::error::CoreError;
use serde_json::json;

use crate::templates;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses;
/// HTML handlers wrap it in [`PageError`] instead.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `blog_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A template failed to render.
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    /// Submitted form fields failed validation, one message per field.
    #[error("Invalid form submission")]
    InvalidForm(FieldErrors),

    /// The request addressed nothing (e.g. a malformed permalink).
    #[error("Not found: {0}")]
    NotFound(String),

}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// HTTP status, error code, and client-safe message for this error.
    ///
    /// Server-side failures are logged here and their details replaced by a
    /// generic message.
    fn classify(&self) -> (StatusCode, &'static str, String) {
        match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Configuration(msg) => {
                    tracing::error!(error = %msg, "Improperly configured component");
                    internal()
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Rendering ---
            AppError::Template(err) => {
                tracing::error!(error = ?err, "Template error");
                internal()
            }

            // --- HTTP-specific errors ---
            AppError::InvalidForm(_) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "Validation failed".to_string(),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.classify();

        let body = match &self {
            AppError::InvalidForm(fields) => json!({
                "error": message,
                "code": code,
                "fields": fields,
            }),
            _ => json!({
                "error": message,
                "code": code,
            }),
        };

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Foreign key violations (a comment on a vanished entry, an entry for an
///   unknown author) map to 404.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL foreign key violation: error code 23503
            if db_err.code().as_deref() == Some("23503") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                tracing::debug!(constraint, "Foreign key violation");
                return (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    "Referenced resource not found".to_string(),
                );
            }
            tracing::error!(error = %db_err, "Database error");
            internal()
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}

/// Error type for HTML page handlers.
///
/// Carries the same classification as [`AppError`] but renders `error.html`
/// with the matching status instead of a JSON body.
#[derive(Debug)]
pub struct PageError(pub AppError);

/// Convenience type alias for page handler return values.
pub type PageResult<T> = Result<T, PageError>;

impl From<AppError> for PageError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<CoreError> for PageError {
    fn from(err: CoreError) -> Self {
        Self(AppError::Core(err))
    }
}

impl From<sqlx::Error> for PageError {
    fn from(err: sqlx::Error) -> Self {
        Self(AppError::Database(err))
    }
}

impl From<tera::Error> for PageError {
    fn from(err: tera::Error) -> Self {
        Self(AppError::Template(err))
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, _, message) = self.0.classify();

        match templates::render_error_page(status, &message) {
            Ok(html) => (status, Html(html)).into_response(),
            Err(err) => {
                tracing::error!(error = ?err, "Failed to render error page");
                (status, message).into_response()
            }
        }
    }
}
