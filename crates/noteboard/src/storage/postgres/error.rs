//! Postgres error mapping.

use noteboard_core::storage::RepositoryError;

/// Maps a sqlx error to a RepositoryError.
///
/// # Error Mapping
///
/// - Pool, I/O, TLS and protocol failures → `RepositoryError::ConnectionFailed`
/// - Column decoding failures → `RepositoryError::Serialization`
/// - `RowNotFound` → `RepositoryError::NotFound`
/// - All other errors → `RepositoryError::QueryFailed`
pub fn map_sqlx_error(err: sqlx::Error, entity_type: &'static str) -> RepositoryError {
    match err {
        sqlx::Error::Configuration(_)
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Protocol(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => RepositoryError::ConnectionFailed(err.to_string()),

        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
            RepositoryError::Serialization(err.to_string())
        }

        sqlx::Error::RowNotFound => RepositoryError::NotFound {
            entity_type,
            id: "unknown".to_string(),
        },

        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Whether a schema statement failed only because the change is already applied.
pub fn is_already_applied(err: &sqlx::Error) -> bool {
    let message = err.to_string().to_lowercase();
    message.contains("already exists") || message.contains("duplicate column")
}
