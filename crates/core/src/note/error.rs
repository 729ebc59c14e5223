use thiserror::Error;

/// Errors that can occur when validating a note request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NoteError {
    #[error("Title and content are required")]
    MissingTitle,
    #[error("Title and content are required")]
    MissingContent,
}
