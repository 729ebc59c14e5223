//! Pushing notes to an external Notion database.
//!
//! The core owns the batch semantics and the publisher seam; the HTTP client
//! that talks to Notion lives in the binary crate.

mod error;
mod operations;
mod traits;
mod types;

pub use error::SyncError;
pub use operations::sync_notes;
pub use traits::PagePublisher;
pub use types::{SyncSummary, SyncTarget};
