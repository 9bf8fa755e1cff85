use giftlist_core::types::DbId;

/// Errors surfaced by the client data layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never completed (connection refused, timeout, ...).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with an error status.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The action is not permitted for this viewer; no request was sent.
    #[error("Not permitted: {0}")]
    PermissionDenied(String),

    /// The item id is not in the local snapshot.
    #[error("Unknown item {0}")]
    UnknownItem(DbId),

    /// No wishlist has been loaded into the session yet.
    #[error("No wishlist loaded")]
    NotLoaded,
}
