//! Axum route handlers for the Interviews API.

use axum::extract::rejection::JsonRejection;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{error, info};

use crate::errors::AppError;
use crate::interviews::covers::random_cover;
use crate::interviews::questions::{build_questions, split_techstack};
use crate::models::interview::{Interview, InterviewRecord};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Body of the generate call. Every field is independently defaultable —
/// a missing or null field is never rejected.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateInterviewRequest {
    #[serde(rename = "type")]
    pub interview_type: Option<String>,
    pub role: Option<String>,
    pub level: Option<String>,
    pub techstack: Option<String>,
    pub userid: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestInterviewsQuery {
    pub user_id: String,
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdQuery {
    pub user_id: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/interviews/generate
///
/// Builds the fixed question list, persists the interview card, and answers
/// `{success, interviewId, questions}`. Any failure — malformed body or
/// store write — becomes a 500 `{success: false, error}` rather than a
/// propagated error.
pub async fn handle_generate_interview(
    State(state): State<AppState>,
    body: Result<Json<GenerateInterviewRequest>, JsonRejection>,
) -> (StatusCode, Json<Value>) {
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            error!("Interview generate request rejected: {rejection}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": rejection.to_string() })),
            );
        }
    };

    let questions = build_questions(request.techstack.as_deref());

    let record = InterviewRecord {
        role: request.role.unwrap_or_else(|| "General Developer".to_string()),
        interview_type: request.interview_type.unwrap_or_else(|| "General".to_string()),
        level: request.level.unwrap_or_else(|| "Entry".to_string()),
        techstack: split_techstack(request.techstack.as_deref()),
        questions: questions.clone(),
        user_id: request.userid.unwrap_or_else(|| "test-user".to_string()),
        finalized: true,
        cover_image: random_cover(),
        created_at: Utc::now(),
    };

    match state.store.create_interview(&record).await {
        Ok(interview_id) => {
            info!("Interview card created: {interview_id}");
            (
                StatusCode::OK,
                Json(json!({
                    "success": true,
                    "interviewId": interview_id,
                    "questions": questions,
                })),
            )
        }
        Err(e) => {
            error!("Interview write failed: {e:?}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": e.to_string() })),
            )
        }
    }
}

/// GET /api/v1/interviews/:id
pub async fn handle_get_interview(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Interview>, AppError> {
    let interview = state
        .store
        .get_interview(&id)
        .await
        .map_err(AppError::Internal)?
        .ok_or_else(|| AppError::NotFound(format!("Interview {id} not found")))?;

    Ok(Json(interview))
}

/// GET /api/v1/interviews/latest?userId=...&limit=...
///
/// Most-recent finalized interviews excluding the given user, newest first.
pub async fn handle_latest_interviews(
    State(state): State<AppState>,
    Query(params): Query<LatestInterviewsQuery>,
) -> Result<Json<Vec<Interview>>, AppError> {
    let limit = params.limit.unwrap_or(20);
    let interviews = state
        .store
        .latest_interviews(&params.user_id, limit)
        .await
        .map_err(AppError::Internal)?;

    Ok(Json(interviews))
}

/// GET /api/v1/interviews?userId=...
pub async fn handle_interviews_for_user(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<Interview>>, AppError> {
    let interviews = state
        .store
        .interviews_for_user(&params.user_id)
        .await
        .map_err(AppError::Internal)?;

    Ok(Json(interviews))
}
