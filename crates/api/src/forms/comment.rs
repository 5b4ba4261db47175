//! The comment-submission form.
//!
//! A [`CommentForm`] is always bound to the [`Entry`] being commented on.
//! It is either unbound (a fresh form for a GET) or bound to submitted
//! [`CommentInput`], in which case validation runs once at construction.

use blog_core::comment::{
    validate_comment, CommentInput, FieldErrors, ValidComment, NAME_MAX_LENGTH,
};
use blog_core::error::CoreError;
use blog_db::models::comment::{Comment, CreateComment};
use blog_db::models::entry::Entry;
use blog_db::repositories::CommentRepo;
use blog_db::DbPool;
use serde::Serialize;

use crate::error::AppResult;

/// Static description of one submitted field.
struct FieldDef {
    name: &'static str,
    label: &'static str,
    kind: &'static str,
    required: bool,
    max_length: Option<usize>,
}

/// Fields in display and validation order.
const FIELDS: [FieldDef; 3] = [
    FieldDef {
        name: "name",
        label: "Name",
        kind: "text",
        required: false,
        max_length: Some(NAME_MAX_LENGTH),
    },
    FieldDef {
        name: "email",
        label: "Email",
        kind: "email",
        required: true,
        max_length: None,
    },
    FieldDef {
        name: "body",
        label: "Comment",
        kind: "textarea",
        required: true,
        max_length: None,
    },
];

/// Comment form bound to an entry.
#[derive(Debug)]
pub struct CommentForm<'a> {
    entry: &'a Entry,
    data: CommentInput,
    is_bound: bool,
    cleaned: Option<ValidComment>,
    errors: FieldErrors,
}

impl<'a> CommentForm<'a> {
    /// Bind submitted fields to `entry` and validate them.
    pub fn new(entry: &'a Entry, data: CommentInput) -> Self {
        let (cleaned, errors) = match validate_comment(&data) {
            Ok(valid) => (Some(valid), FieldErrors::new()),
            Err(errors) => (None, errors),
        };
        Self {
            entry,
            data,
            is_bound: true,
            cleaned,
            errors,
        }
    }

    /// A fresh, empty form for `entry`. Never valid, never has errors.
    pub fn unbound(entry: &'a Entry) -> Self {
        Self {
            entry,
            data: CommentInput::default(),
            is_bound: false,
            cleaned: None,
            errors: FieldErrors::new(),
        }
    }

    /// Start building a form from loosely supplied parts.
    pub fn builder() -> CommentFormBuilder<'a> {
        CommentFormBuilder::default()
    }

    pub fn entry(&self) -> &Entry {
        self.entry
    }

    pub fn is_bound(&self) -> bool {
        self.is_bound
    }

    /// Whether the submitted data passed every field rule.
    pub fn is_valid(&self) -> bool {
        self.cleaned.is_some()
    }

    /// One message per invalid field, in field order.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn into_errors(self) -> FieldErrors {
        self.errors
    }

    /// Persist the validated comment against the bound entry.
    ///
    /// Fails with [`CoreError::Validation`] if the form is unbound or
    /// invalid; callers check [`is_valid`](Self::is_valid) first.
    pub async fn save(&self, pool: &DbPool) -> AppResult<Comment> {
        let Some(valid) = &self.cleaned else {
            return Err(CoreError::Validation(
                "Cannot save a comment form that did not validate".into(),
            )
            .into());
        };

        let input = CreateComment {
            entry_id: self.entry.id,
            name: valid.name.clone(),
            email: valid.email.clone(),
            body: valid.body.clone(),
        };
        let comment = CommentRepo::create(pool, &input).await?;

        tracing::info!(
            comment_id = comment.id,
            entry_id = self.entry.id,
            "Comment created",
        );

        Ok(comment)
    }

    /// Render context for templates: each field with its echoed value and
    /// error, if any.
    pub fn view(&self) -> FormView {
        let fields = FIELDS
            .iter()
            .map(|field| FieldView {
                name: field.name,
                label: field.label,
                kind: field.kind,
                required: field.required,
                max_length: field.max_length,
                value: self.submitted(field.name).to_string(),
                error: self.errors.get(field.name).cloned(),
            })
            .collect();

        FormView {
            fields,
            errors: self.errors.clone(),
        }
    }

    fn submitted(&self, field: &str) -> &str {
        match field {
            "name" => &self.data.name,
            "email" => &self.data.email,
            "body" => &self.data.body,
            _ => "",
        }
    }
}

/// Builder that enforces the `entry` binding at [`build`](Self::build) time.
#[derive(Debug, Default)]
pub struct CommentFormBuilder<'a> {
    entry: Option<&'a Entry>,
    data: Option<CommentInput>,
}

impl<'a> CommentFormBuilder<'a> {
    pub fn entry(mut self, entry: &'a Entry) -> Self {
        self.entry = Some(entry);
        self
    }

    pub fn data(mut self, data: CommentInput) -> Self {
        self.data = Some(data);
        self
    }

    /// Build the form. Without data the form is unbound.
    ///
    /// Fails with [`CoreError::Configuration`] when no entry was supplied.
    pub fn build(self) -> Result<CommentForm<'a>, CoreError> {
        let entry = self.entry.ok_or_else(|| {
            CoreError::Configuration("CommentForm requires an `entry` binding".into())
        })?;

        Ok(match self.data {
            Some(data) => CommentForm::new(entry, data),
            None => CommentForm::unbound(entry),
        })
    }
}

/// Template view of a [`CommentForm`].
#[derive(Debug, Clone, Serialize)]
pub struct FormView {
    pub fields: Vec<FieldView>,
    pub errors: FieldErrors,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: &'static str,
    pub required: bool,
    pub max_length: Option<usize>,
    pub value: String,
    pub error: Option<String>,
}
