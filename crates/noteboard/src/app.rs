use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method, StatusCode},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        error::expose_error_details,
        export::{export_notes, note_markdown},
        health::livez,
        notes::{create_note, delete_note, get_note, list_notes, update_note},
        notion::sync_to_notion,
    },
    state::AppState,
};

/// Largest accepted request body (2 MiB).
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    // API routes with CORS
    let api_routes = Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route("/notes/export", get(export_notes))
        .route(
            "/notes/{id}",
            get(get_note).put(update_note).delete(delete_note),
        )
        .route("/notes/{id}/markdown", get(note_markdown))
        .route("/notion/sync", post(sync_to_notion))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors);

    // Main application router
    Router::new()
        .route("/livez", get(livez))
        .nest("/api", api_routes)
        .layer(middleware::map_response_with_state(
            state.clone(),
            expose_error_details,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}
