use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    /// The backend could not be reached or initialized.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    /// Returns true for errors caused by backend configuration rather than data.
    pub fn is_configuration(&self) -> bool {
        matches!(self, RepositoryError::ConnectionFailed(_))
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_not_found_display() {
        let error = RepositoryError::NotFound {
            entity_type: "Note",
            id: "42".to_string(),
        };
        assert_eq!(error.to_string(), "Note not found: 42");
    }

    #[test]
    fn test_repository_error_connection_failed_display() {
        let error = RepositoryError::ConnectionFailed("timeout after 10s".to_string());
        assert_eq!(error.to_string(), "Connection failed: timeout after 10s");
    }

    #[test]
    fn test_repository_error_query_failed_display() {
        let error = RepositoryError::QueryFailed("no such table: notes".to_string());
        assert_eq!(error.to_string(), "Query failed: no such table: notes");
    }

    #[test]
    fn test_repository_error_serialization_display() {
        let error = RepositoryError::Serialization("bad timestamp".to_string());
        assert_eq!(error.to_string(), "Serialization error: bad timestamp");
    }

    #[test]
    fn test_repository_error_invalid_data_display() {
        let error = RepositoryError::InvalidData("id out of range".to_string());
        assert_eq!(error.to_string(), "Invalid data: id out of range");
    }

    #[test]
    fn test_only_connection_failures_are_configuration_errors() {
        assert!(RepositoryError::ConnectionFailed("x".to_string()).is_configuration());
        assert!(!RepositoryError::QueryFailed("x".to_string()).is_configuration());
        assert!(!RepositoryError::NotFound {
            entity_type: "Note",
            id: "1".to_string()
        }
        .is_configuration());
    }
}
