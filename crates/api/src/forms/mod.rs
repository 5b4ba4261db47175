//! Server-side forms: binding submitted fields, validation, persistence and
//! the render view used by templates.

pub mod comment;

pub use comment::{CommentForm, CommentFormBuilder};
