use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// A component was built without a binding it cannot work without.
    /// Always a programming error, never caused by user input.
    #[error("Improperly configured: {0}")]
    Configuration(String),
}
