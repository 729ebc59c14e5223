use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::serde::{deserialize_timestamp, serialize_timestamp};

/// Note type used when a request does not name one.
pub const DEFAULT_NOTE_TYPE: &str = "main";

/// A stored note.
///
/// `content` is serialized rich-text HTML and is opaque to the store.
/// `note_type` partitions notes by area of the application ("main", "hash", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub note_type: String,
    #[serde(
        serialize_with = "serialize_timestamp",
        deserialize_with = "deserialize_timestamp"
    )]
    pub created_at: DateTime<Utc>,
    #[serde(
        serialize_with = "serialize_timestamp",
        deserialize_with = "deserialize_timestamp"
    )]
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Returns true if this note has been edited since it was created.
    pub fn is_edited(&self) -> bool {
        self.updated_at > self.created_at
    }
}

/// A validated note ready to be inserted.
///
/// Built from a [`CreateNoteRequest`](super::CreateNoteRequest) after validation;
/// the store assigns the id and both timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub note_type: String,
}

impl NewNote {
    /// Creates a new note of the default type.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            note_type: DEFAULT_NOTE_TYPE.to_string(),
        }
    }

    /// Sets the note type.
    pub fn with_type(mut self, note_type: impl Into<String>) -> Self {
        self.note_type = note_type.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_note() -> Note {
        let created = Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap();
        Note {
            id: 7,
            title: "Groceries".to_string(),
            content: "<p>Milk</p>".to_string(),
            note_type: "main".to_string(),
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn test_note_serializes_type_field() {
        let json = serde_json::to_value(sample_note()).unwrap();

        assert_eq!(json["type"], "main");
        assert!(json.get("note_type").is_none());
        assert_eq!(json["created_at"], "2024-06-15T10:30:00.000Z");
        assert_eq!(json["updated_at"], "2024-06-15T10:30:00.000Z");
    }

    #[test]
    fn test_note_deserializes_from_api_shape() {
        let json = r#"{
            "id": 7,
            "title": "Groceries",
            "content": "<p>Milk</p>",
            "type": "main",
            "created_at": "2024-06-15T10:30:00.000Z",
            "updated_at": "2024-06-15T10:30:00.000Z"
        }"#;

        let note: Note = serde_json::from_str(json).unwrap();

        assert_eq!(note, sample_note());
    }

    #[test]
    fn test_is_edited() {
        let mut note = sample_note();
        assert!(!note.is_edited());

        note.updated_at += chrono::Duration::seconds(1);
        assert!(note.is_edited());
    }

    #[test]
    fn test_new_note_defaults_to_main() {
        let note = NewNote::new("Title", "Body");
        assert_eq!(note.note_type, DEFAULT_NOTE_TYPE);

        let hashed = NewNote::new("Title", "Body").with_type("hash");
        assert_eq!(hashed.note_type, "hash");
    }
}
