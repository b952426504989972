//! Free-text message route.

use crate::state::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

#[derive(Deserialize)]
pub struct MessageRequest {
    pub message: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub response: String,
}

/// POST /api/messages - answer a chat message. Always 200 with a reply.
pub async fn handle(
    State(state): State<Arc<AppState>>,
    Json(req): Json<MessageRequest>,
) -> Json<MessageResponse> {
    debug!(target: "prepcoach::api", "Message received ({} chars)", req.message.len());
    let response = state.assistant().handle(&req.message);
    Json(MessageResponse { response })
}
