use async_trait::async_trait;

use crate::note::Note;

use super::{SyncError, SyncTarget};

/// Publishes a note as a page in the sync target.
#[async_trait]
pub trait PagePublisher: Send + Sync {
    /// Creates a page for `note` and returns the new page's id.
    async fn publish(&self, note: &Note, target: &SyncTarget) -> Result<String, SyncError>;
}
