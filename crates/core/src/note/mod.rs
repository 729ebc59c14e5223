mod error;
mod requests;
mod types;

pub use error::NoteError;
pub use requests::{normalize_note_type, CreateNoteRequest, NoteTypeFilter, UpdateNoteRequest};
pub use types::{NewNote, Note, DEFAULT_NOTE_TYPE};
