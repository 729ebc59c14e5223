//! Shared application state.
//!
//! Built once in `main` and cloned into every handler. Storage and the sync
//! target are trait objects so tests can swap in fakes.

use std::sync::Arc;

use noteboard_core::storage::NoteRepository;
use noteboard_core::sync::PagePublisher;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Note storage selected at startup.
    pub notes: Arc<dyn NoteRepository>,
    /// Destination for Notion sync.
    pub publisher: Arc<dyn PagePublisher>,
    /// Include internal error details in 500 responses.
    pub expose_error_details: bool,
}

impl AppState {
    pub fn new(notes: Arc<dyn NoteRepository>, publisher: Arc<dyn PagePublisher>) -> Self {
        Self {
            notes,
            publisher,
            expose_error_details: false,
        }
    }

    /// Sets whether 500 responses carry a `details` field.
    pub fn with_error_details(mut self, expose: bool) -> Self {
        self.expose_error_details = expose;
        self
    }
}
