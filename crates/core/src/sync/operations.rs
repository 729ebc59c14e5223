use super::{PagePublisher, SyncSummary, SyncTarget};
use crate::note::Note;

/// Publishes every note, one at a time, and tallies the outcome.
///
/// A failure is recorded against its note and the batch carries on.
pub async fn sync_notes(
    publisher: &dyn PagePublisher,
    notes: &[Note],
    target: &SyncTarget,
) -> SyncSummary {
    let mut summary = SyncSummary::default();

    for note in notes {
        match publisher.publish(note, target).await {
            Ok(_) => summary.record_success(),
            Err(e) => summary.record_failure(&note.title, e),
        }
    }

    summary
}
