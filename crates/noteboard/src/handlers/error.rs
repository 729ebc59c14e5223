use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use noteboard_core::note::NoteError;
use noteboard_core::storage::{repository_error_to_status_code, RepositoryError};
use noteboard_core::sync::SyncError;

use crate::state::AppState;

/// Client mistakes detected by the handlers themselves.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    #[error("Request body is too large")]
    BodyTooLarge,
    #[error("Invalid note id: {0}")]
    InvalidId(String),
    #[error("Notion token and database ID are required")]
    MissingSyncCredentials,
    #[error("No notes to export")]
    NothingToExport,
    #[error("No notes to sync")]
    NothingToSync,
}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::BodyTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

/// JSON error body returned by every failing endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// The full body of a 500 response, held back unless details are exposed.
#[derive(Debug, Clone)]
struct WithheldDetails(ErrorBody);

pub struct AppError(pub anyhow::Error);

impl AppError {
    /// A 404 for a note id that does not resolve.
    pub fn note_not_found(id: i64) -> Self {
        Self(
            anyhow::Error::new(RepositoryError::NotFound {
                entity_type: "Note",
                id: id.to_string(),
            })
            .context("Note not found"),
        )
    }

    fn status_code(&self) -> StatusCode {
        if let Some(request_error) = self.0.downcast_ref::<RequestError>() {
            request_error.status_code()
        } else if self.0.downcast_ref::<NoteError>().is_some() {
            StatusCode::BAD_REQUEST
        } else if self.0.downcast_ref::<SyncError>().is_some() {
            StatusCode::BAD_GATEWAY
        } else if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            let code = repository_error_to_status_code(repo_error);
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.0.to_string();
        let chain = format!("{:#}", self.0);

        if status.is_server_error() {
            tracing::error!(status = %status, error = %chain, "Request failed");
        } else {
            tracing::warn!(status = %status, error = %chain, "Request rejected");
        }

        if status == StatusCode::BAD_GATEWAY {
            let body = ErrorBody {
                error: message,
                details: Some(self.0.root_cause().to_string()),
            };
            return (status, Json(body)).into_response();
        }

        let mut response = (
            status,
            Json(ErrorBody {
                error: message.clone(),
                details: None,
            }),
        )
            .into_response();

        if status.is_server_error() {
            response.extensions_mut().insert(WithheldDetails(ErrorBody {
                error: message,
                details: Some(chain),
            }));
        }

        response
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

/// Response middleware that restores `details` on 500 responses when the
/// service runs in development.
pub async fn expose_error_details(State(state): State<AppState>, mut response: Response) -> Response {
    let Some(WithheldDetails(body)) = response.extensions_mut().remove::<WithheldDetails>() else {
        return response;
    };

    if !state.expose_error_details {
        return response;
    }

    (response.status(), Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_validation_errors_are_bad_request() {
        let err = AppError::from(NoteError::MissingTitle);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = AppError::from(RequestError::NothingToExport);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = AppError::from(RequestError::BodyTooLarge);
        assert_eq!(err.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn test_not_found_keeps_public_message() {
        let err = AppError::note_not_found(12);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.0.to_string(), "Note not found");
    }

    #[test]
    fn test_store_errors_are_internal_even_with_context() {
        let result: Result<(), RepositoryError> =
            Err(RepositoryError::QueryFailed("disk I/O error".to_string()));
        let err = AppError::from(result.context("Failed to fetch notes").unwrap_err());

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.0.to_string(), "Failed to fetch notes");
    }

    #[test]
    fn test_configuration_errors_are_internal() {
        let err = AppError::from(RepositoryError::ConnectionFailed("refused".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_upstream_errors_are_bad_gateway() {
        let err = AppError::from(SyncError::Upstream {
            status: 404,
            message: "Could not find database".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_unknown_errors_are_internal() {
        let err = AppError::from(anyhow::anyhow!("something odd"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
