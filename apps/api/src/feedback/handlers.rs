//! Axum route handlers for the Feedback API. Thin wrappers over the
//! pipeline in `generator` — success/failure lives in the result body,
//! not in the HTTP status.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::feedback::generator::{create_feedback, CreateFeedbackParams, CreateFeedbackResult};
use crate::models::feedback::Feedback;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackQuery {
    pub interview_id: String,
    pub user_id: String,
}

/// POST /api/v1/feedback
///
/// Runs the full pipeline and always answers 200: the model stage cannot
/// fail the operation, and a store failure is reported as `success: false`.
pub async fn handle_create_feedback(
    State(state): State<AppState>,
    Json(params): Json<CreateFeedbackParams>,
) -> Json<CreateFeedbackResult> {
    let result = create_feedback(state.store.as_ref(), state.llm.as_ref(), params).await;
    Json(result)
}

/// GET /api/v1/feedback?interviewId=...&userId=...
pub async fn handle_get_feedback(
    State(state): State<AppState>,
    Query(params): Query<FeedbackQuery>,
) -> Result<Json<Feedback>, AppError> {
    let feedback = state
        .store
        .get_feedback(&params.interview_id, &params.user_id)
        .await
        .map_err(AppError::Internal)?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "No feedback for interview {} and user {}",
                params.interview_id, params.user_id
            ))
        })?;

    Ok(Json(feedback))
}
