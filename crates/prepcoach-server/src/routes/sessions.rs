//! Mock interview session routes.

use super::error_response;
use crate::routes::messages::MessageResponse;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use prepcoach_core::AdvanceOutcome;
use prepcoach_types::InterviewSession;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

#[derive(Deserialize, Default)]
pub struct CreateSessionRequest {
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Serialize)]
pub struct CreateSessionResponse {
    pub session_id: String,
    pub total_questions: usize,
    pub response: String,
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<Json<CreateSessionResponse>, (StatusCode, String)> {
    let (session, response) = state
        .assistant()
        .start_interview(req.company.as_deref(), req.role.as_deref())
        .map_err(error_response)?;

    info!(target: "prepcoach::api", "Created session {}", session.id);

    Ok(Json(CreateSessionResponse {
        total_questions: session.total_questions(),
        session_id: session.id,
        response,
    }))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<InterviewSession>, (StatusCode, String)> {
    let session = state
        .assistant()
        .engine()
        .get_session(&id)
        .map_err(error_response)?;
    Ok(Json(session))
}

#[derive(Deserialize)]
pub struct SubmitAnswerRequest {
    pub answer: String,
}

pub async fn submit_answer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<SubmitAnswerRequest>,
) -> Result<Json<MessageResponse>, (StatusCode, String)> {
    let response = state
        .assistant()
        .submit_answer(&id, &req.answer)
        .map_err(error_response)?;

    Ok(Json(MessageResponse { response }))
}

#[derive(Serialize)]
pub struct NextQuestionResponse {
    pub response: String,
    pub completed: bool,
}

/// POST /api/sessions/{id}/next - move on (also how a question is skipped).
pub async fn next(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<NextQuestionResponse>, (StatusCode, String)> {
    let (outcome, response) = state
        .assistant()
        .next_question(&id)
        .map_err(error_response)?;

    let completed = matches!(outcome, AdvanceOutcome::Completed(_));
    if completed {
        info!(target: "prepcoach::api", "Session {} completed", id);
    }
    Ok(Json(NextQuestionResponse {
        response,
        completed,
    }))
}
