//! Comment field validation and gravatar URLs.
//!
//! [`validate_comment`] is the pure half of the comment-submission workflow:
//! it takes the raw submitted fields and either returns the cleaned values or
//! one message per invalid field, in field order. Binding the result to an
//! entry and persisting it happens in the HTTP layer.

use indexmap::IndexMap;
use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

/// Maximum commenter name length, in characters.
pub const NAME_MAX_LENGTH: usize = 100;

pub const GRAVATAR_BASE_URL: &str = "http://www.gravatar.com/avatar/";

pub const REQUIRED_MESSAGE: &str = "This field is required.";
pub const INVALID_EMAIL_MESSAGE: &str = "Enter a valid email address.";
pub const NULL_CHARACTER_MESSAGE: &str = "Null characters are not allowed.";

/// Ordered mapping of field name to error message.
pub type FieldErrors = IndexMap<&'static str, String>;

/// Raw comment fields as submitted by a visitor. Missing fields are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CommentInput {
    pub name: String,
    pub email: String,
    pub body: String,
}

/// Comment fields that passed validation, with surrounding whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidComment {
    pub name: String,
    pub email: String,
    pub body: String,
}

/// Validate submitted comment fields.
///
/// - `name` is optional, at most [`NAME_MAX_LENGTH`] characters.
/// - `email` is required and must be a syntactically valid address.
/// - `body` is required.
///
/// No field may contain a NUL character; PostgreSQL text columns cannot
/// store one.
pub fn validate_comment(input: &CommentInput) -> Result<ValidComment, FieldErrors> {
    let name = input.name.trim().to_string();
    let email = input.email.trim().to_string();
    let body = input.body.trim().to_string();

    let mut errors = FieldErrors::new();

    let name_len = name.chars().count();
    if name.contains('\0') {
        errors.insert("name", NULL_CHARACTER_MESSAGE.to_string());
    } else if name_len > NAME_MAX_LENGTH {
        errors.insert(
            "name",
            format!("Ensure this value has at most {NAME_MAX_LENGTH} characters (it has {name_len})."),
        );
    }

    if email.is_empty() {
        errors.insert("email", REQUIRED_MESSAGE.to_string());
    } else if email.contains('\0') {
        errors.insert("email", NULL_CHARACTER_MESSAGE.to_string());
    } else if !email.validate_email() {
        errors.insert("email", INVALID_EMAIL_MESSAGE.to_string());
    }

    if body.is_empty() {
        errors.insert("body", REQUIRED_MESSAGE.to_string());
    } else if body.contains('\0') {
        errors.insert("body", NULL_CHARACTER_MESSAGE.to_string());
    }

    if errors.is_empty() {
        Ok(ValidComment { name, email, body })
    } else {
        Err(errors)
    }
}

/// Gravatar image URL for an email address.
///
/// The address is trimmed and lowercased before hashing.
pub fn gravatar_url(email: &str) -> String {
    let digest = Md5::digest(email.trim().to_lowercase().as_bytes());
    format!("{GRAVATAR_BASE_URL}{digest:x}")
}
