use serde::{Deserialize, Serialize};

/// Where notes are published: a Notion database and the integration token for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncTarget {
    pub database_id: String,
    pub token: String,
}

impl SyncTarget {
    pub fn new(database_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            database_id: database_id.into(),
            token: token.into(),
        }
    }
}

/// Outcome of a batch sync.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncSummary {
    pub synced: usize,
    pub failed: usize,
    /// One `"{title}: {error}"` line per failed note.
    pub errors: Vec<String>,
}

impl SyncSummary {
    /// Records a successfully published note.
    pub fn record_success(&mut self) {
        self.synced += 1;
    }

    /// Records a note that could not be published.
    pub fn record_failure(&mut self, title: &str, error: impl std::fmt::Display) {
        self.failed += 1;
        self.errors.push(format!("{title}: {error}"));
    }

    /// Human-readable one-line summary.
    pub fn message(&self) -> String {
        format!(
            "Synced {} note(s) to Notion. {} failed.",
            self.synced, self.failed
        )
    }
}
