#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// `key` is the lookup key as given by the caller: a numeric id
    /// rendered as text, or an external identifier such as a chat id.
    #[error("Entity not found: {entity} {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
