//! Blog domain logic.
//!
//! Pure functions and types shared by the persistence and HTTP layers:
//! slug derivation, permalink construction, field validation for entries
//! and comments, and gravatar URLs. No database dependencies.

pub mod comment;
pub mod entry;
pub mod error;
pub mod permalink;
pub mod slug;
pub mod types;
