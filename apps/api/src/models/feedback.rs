use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One turn of a mock-interview conversation. Sequence order is
/// conversation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub role: String,
    pub content: String,
}

/// A per-category evaluation. Five fixed category names are expected:
/// Communication Skills, Technical Knowledge, Problem-Solving,
/// Cultural & Role Fit, Confidence & Clarity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub name: String,
    pub score: f64, // 0 - 100
    pub comment: String,
}

/// The evaluation produced by the model (or the fallback payload).
///
/// Every field carries a serde default: syntactically valid model JSON that
/// is missing fields deserializes to the zero/empty shape instead of failing
/// the parse. A missing `categoryScores` therefore persists as an empty
/// sequence, not as the mock payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeedbackResult {
    pub total_score: f64,
    pub category_scores: Vec<CategoryScore>,
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub final_assessment: String,
}

/// A feedback document as persisted in the `feedback` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    pub interview_id: String,
    pub user_id: String,
    pub total_score: f64,
    pub category_scores: Vec<CategoryScore>,
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub final_assessment: String,
    pub created_at: DateTime<Utc>,
}

impl FeedbackRecord {
    /// Builds the record to persist, stamping `created_at` and coercing an
    /// empty final assessment to the pending placeholder. The remaining
    /// fields already default to zero/empty at deserialization.
    pub fn from_result(interview_id: String, user_id: String, result: FeedbackResult) -> Self {
        let final_assessment = if result.final_assessment.trim().is_empty() {
            "Assessment pending.".to_string()
        } else {
            result.final_assessment
        };

        FeedbackRecord {
            interview_id,
            user_id,
            total_score: result.total_score,
            category_scores: result.category_scores,
            strengths: result.strengths,
            areas_for_improvement: result.areas_for_improvement,
            final_assessment,
            created_at: Utc::now(),
        }
    }
}

/// A feedback document read back from the store: id plus record fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub id: String,
    #[serde(flatten)]
    pub record: FeedbackRecord,
}
