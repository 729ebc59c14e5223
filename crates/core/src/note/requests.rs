//! API request types for note operations.
//!
//! Following the Functional Core pattern, these are pure data types with
//! validation and no I/O.

use serde::{Deserialize, Serialize};

use super::error::NoteError;
use super::types::{NewNote, DEFAULT_NOTE_TYPE};
use crate::serde::deserialize_optional_string;

/// Request payload for creating a note.
///
/// Missing, null, and whitespace-only fields all deserialize to `None` so
/// validation can report them uniformly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateNoteRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub content: Option<String>,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub note_type: Option<String>,
}

impl CreateNoteRequest {
    /// Create a request with a title and content.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
            note_type: None,
        }
    }

    /// Set the note type.
    pub fn with_type(mut self, note_type: impl Into<String>) -> Self {
        self.note_type = Some(note_type.into());
        self
    }

    /// Validates the request and converts it into a [`NewNote`].
    pub fn validate(self) -> Result<NewNote, NoteError> {
        let title = self.title.ok_or(NoteError::MissingTitle)?;
        let content = self.content.ok_or(NoteError::MissingContent)?;

        Ok(NewNote {
            title,
            content,
            note_type: normalize_note_type(self.note_type),
        })
    }
}

/// Request payload for replacing a note's title and content.
///
/// Partial updates are not supported: both fields are always required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateNoteRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub content: Option<String>,
}

impl UpdateNoteRequest {
    /// Create a request with a title and content.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }

    /// Validates the request, returning the new `(title, content)` pair.
    pub fn validate(self) -> Result<(String, String), NoteError> {
        let title = self.title.ok_or(NoteError::MissingTitle)?;
        let content = self.content.ok_or(NoteError::MissingContent)?;
        Ok((title, content))
    }
}

/// Which notes a list query should return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteTypeFilter {
    /// Every note regardless of type.
    All,
    /// Only notes of the given type.
    Only(String),
}

impl NoteTypeFilter {
    /// Query value that selects every note type.
    pub const ALL: &'static str = "all";

    /// Builds a filter from an optional `?type=` query value.
    ///
    /// An absent or blank value means the default type; `all` means no filter.
    pub fn from_query(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(Self::ALL) => NoteTypeFilter::All,
            Some(t) if !t.is_empty() => NoteTypeFilter::Only(t.to_string()),
            _ => NoteTypeFilter::Only(DEFAULT_NOTE_TYPE.to_string()),
        }
    }

    /// Returns the type to filter on, or `None` for all types.
    pub fn as_type(&self) -> Option<&str> {
        match self {
            NoteTypeFilter::All => None,
            NoteTypeFilter::Only(t) => Some(t.as_str()),
        }
    }
}

impl Default for NoteTypeFilter {
    fn default() -> Self {
        NoteTypeFilter::Only(DEFAULT_NOTE_TYPE.to_string())
    }
}

/// Resolves an optional note type, falling back to [`DEFAULT_NOTE_TYPE`].
pub fn normalize_note_type(note_type: Option<String>) -> String {
    note_type
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| DEFAULT_NOTE_TYPE.to_string())
}
