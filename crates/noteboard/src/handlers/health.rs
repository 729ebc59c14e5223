//! Liveness probe.

use axum::http::StatusCode;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Storage was opened before the listener started.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}
