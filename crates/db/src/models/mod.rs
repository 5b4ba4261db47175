//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Where the entity is editable, an update DTO with `Option` fields

pub mod comment;
pub mod entry;
pub mod user;
