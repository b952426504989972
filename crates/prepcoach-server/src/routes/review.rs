//! Answer review route.

use axum::{http::StatusCode, Json};
use prepcoach_core::review_answer;
use prepcoach_types::AnswerReview;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct ReviewRequest {
    pub answer: String,
}

/// POST /api/review - structured STAR and length feedback.
pub async fn review(
    Json(req): Json<ReviewRequest>,
) -> Result<Json<AnswerReview>, (StatusCode, String)> {
    let answer = req.answer.trim();
    if answer.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Answer must not be empty".to_string()));
    }
    Ok(Json(review_answer(answer)))
}
