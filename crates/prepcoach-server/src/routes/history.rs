//! History routes.

use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use prepcoach_types::HistoryEntry;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Deserialize)]
pub struct HistoryQuery {
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Serialize)]
pub struct HistoryResponse {
    pub entries: Vec<HistoryEntry>,
}

/// GET /api/history - completed sessions, oldest first. `limit` keeps the
/// most recent entries.
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HistoryQuery>,
) -> Json<HistoryResponse> {
    let mut entries = state.assistant().engine().history();

    if let Some(limit) = query.limit {
        let skip = entries.len().saturating_sub(limit);
        entries = entries.split_off(skip);
    }

    Json(HistoryResponse { entries })
}
