//! SQLite storage backend.
//!
//! Uses `rusqlite` for synchronous operations and `tokio-rusqlite` for async
//! wrapping. Notes live in `<data_dir>/notes.db`.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
