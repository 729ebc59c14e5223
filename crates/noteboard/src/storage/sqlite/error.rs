//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` and `rusqlite::Error` to `RepositoryError`.

use noteboard_core::storage::RepositoryError;

/// Maps a rusqlite error to a RepositoryError.
///
/// # Error Mapping
///
/// - `CannotOpen` / `NotADatabase` → `RepositoryError::ConnectionFailed`
/// - Constraint violations → `RepositoryError::InvalidData`
/// - Column conversion failures → `RepositoryError::Serialization`
/// - All other errors → `RepositoryError::QueryFailed`
fn map_rusqlite_error(err: &rusqlite::Error, entity_type: &'static str) -> RepositoryError {
    match err {
        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if matches!(
                sqlite_err.code,
                rusqlite::ErrorCode::CannotOpen | rusqlite::ErrorCode::NotADatabase
            ) =>
        {
            RepositoryError::ConnectionFailed(format!("Cannot open database: {err}"))
        }

        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            RepositoryError::InvalidData(format!("Constraint violation for {entity_type}: {err}"))
        }

        rusqlite::Error::FromSqlConversionFailure(..) | rusqlite::Error::InvalidColumnType(..) => {
            RepositoryError::Serialization(err.to_string())
        }

        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Maps a tokio_rusqlite error to a RepositoryError.
///
/// This is the main entry point for error mapping in async code.
pub fn map_tokio_rusqlite_error(
    err: tokio_rusqlite::Error,
    entity_type: &'static str,
) -> RepositoryError {
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => {
            map_rusqlite_error(rusqlite_err, entity_type)
        }
        tokio_rusqlite::Error::ConnectionClosed | tokio_rusqlite::Error::Close(_) => {
            RepositoryError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Whether a schema statement failed only because the change is already applied.
///
/// Re-running `ALTER TABLE ... ADD COLUMN` on an upgraded database reports a
/// duplicate column; that is expected on every start after the first.
pub fn is_already_applied(err: &rusqlite::Error) -> bool {
    let message = err.to_string().to_lowercase();
    message.contains("duplicate column") || message.contains("already exists")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::ffi;

    #[test]
    fn test_cannot_open_maps_to_connection_failed() {
        let sqlite_err = ffi::Error {
            code: rusqlite::ErrorCode::CannotOpen,
            extended_code: ffi::SQLITE_CANTOPEN,
        };
        let err = tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(sqlite_err, None));

        let result = map_tokio_rusqlite_error(err, "Note");

        assert!(matches!(result, RepositoryError::ConnectionFailed(_)));
        assert!(result.is_configuration());
    }

    #[test]
    fn test_not_null_maps_to_invalid_data() {
        let sqlite_err = ffi::Error {
            code: rusqlite::ErrorCode::ConstraintViolation,
            extended_code: ffi::SQLITE_CONSTRAINT_NOTNULL,
        };
        let err = tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(sqlite_err, None));

        let result = map_tokio_rusqlite_error(err, "Note");

        assert!(matches!(result, RepositoryError::InvalidData(_)));
    }

    #[test]
    fn test_closed_connection_maps_to_connection_failed() {
        let result = map_tokio_rusqlite_error(tokio_rusqlite::Error::ConnectionClosed, "Note");
        assert!(matches!(result, RepositoryError::ConnectionFailed(_)));
    }

    #[test]
    fn test_other_errors_map_to_query_failed() {
        let err = tokio_rusqlite::Error::Other(Box::new(std::io::Error::other("boom")));

        let result = map_tokio_rusqlite_error(err, "Note");

        assert!(matches!(result, RepositoryError::QueryFailed(_)));
    }

    #[test]
    fn test_duplicate_column_is_already_applied() {
        let duplicate = rusqlite::Error::SqliteFailure(
            ffi::Error {
                code: rusqlite::ErrorCode::Unknown,
                extended_code: ffi::SQLITE_ERROR,
            },
            Some("duplicate column name: type".to_string()),
        );
        let missing = rusqlite::Error::SqliteFailure(
            ffi::Error {
                code: rusqlite::ErrorCode::Unknown,
                extended_code: ffi::SQLITE_ERROR,
            },
            Some("no such table: notes".to_string()),
        );

        assert!(is_already_applied(&duplicate));
        assert!(!is_already_applied(&missing));
    }
}
