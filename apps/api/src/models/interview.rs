use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An interview document as persisted in the `interviews` collection.
///
/// Created once by question provisioning and never mutated afterward.
/// `finalized` is always true at creation — there is no draft state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewRecord {
    pub role: String,
    #[serde(rename = "type")]
    pub interview_type: String,
    pub level: String,
    pub techstack: Vec<String>,
    pub questions: Vec<String>,
    pub user_id: String,
    pub finalized: bool,
    pub cover_image: String,
    pub created_at: DateTime<Utc>,
}

/// An interview read back from the store: document id plus record fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interview {
    pub id: String,
    #[serde(flatten)]
    pub record: InterviewRecord,
}
