use thiserror::Error;

/// Errors from publishing a note to the sync target.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// The target rejected the request (bad token, unknown database, invalid content).
    #[error("Notion API error ({status}): {message}")]
    Upstream { status: u16, message: String },

    /// The request never got a response.
    #[error("Request to Notion failed: {0}")]
    Request(String),

    /// The target answered 2xx with a body we could not read.
    #[error("Invalid response from Notion: {0}")]
    InvalidResponse(String),
}
