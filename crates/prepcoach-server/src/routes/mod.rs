//! HTTP route handlers.

pub mod history;
pub mod messages;
pub mod review;
pub mod sessions;

use crate::state::AppState;
use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use prepcoach_core::{Assistant, PrepError};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the application router with every API route under `/api`.
pub fn router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/messages", post(messages::handle))
        .route("/sessions", post(sessions::create))
        .route("/sessions/{id}", get(sessions::get))
        .route("/sessions/{id}/answers", post(sessions::submit_answer))
        .route("/sessions/{id}/next", post(sessions::next))
        .route("/review", post(review::review))
        .route("/history", get(history::list))
        .route("/health", get(health));

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Map an engine error to an HTTP status and the same reply text the chat gets.
pub(crate) fn error_response(error: PrepError) -> (StatusCode, String) {
    let status = match error {
        PrepError::SessionNotFound(_) => StatusCode::NOT_FOUND,
        PrepError::AllQuestionsAnswered(_) => StatusCode::CONFLICT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Assistant::error_reply(&error))
}
