//! Document store — the persistence seam for the `interviews` and
//! `feedback` collections.
//!
//! `AppState` holds an `Arc<dyn DocumentStore>`, swapped for `MemoryStore`
//! in tests. The store guarantees per-document atomicity for the feedback
//! upsert; concurrent submissions that both omit `feedbackId` are not
//! deduplicated and may create two documents.

pub mod memory;
pub mod postgres;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::feedback::{Feedback, FeedbackRecord};
use crate::models::interview::{Interview, InterviewRecord};

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserts a new interview document and returns its generated id.
    async fn create_interview(&self, record: &InterviewRecord) -> Result<String>;

    /// Fetches an interview by document id.
    async fn get_interview(&self, id: &str) -> Result<Option<Interview>>;

    /// Writes a feedback document. A supplied id overwrites that document
    /// in place (full overwrite, never a merge); `None` creates a new
    /// document with a generated id. Returns the id written.
    async fn upsert_feedback(&self, id: Option<&str>, record: &FeedbackRecord) -> Result<String>;

    /// Fetches the single feedback document for an interview + user pair.
    async fn get_feedback(&self, interview_id: &str, user_id: &str) -> Result<Option<Feedback>>;

    /// Lists up to `limit` most-recent finalized interviews not owned by
    /// `excluding_user`, newest first.
    async fn latest_interviews(&self, excluding_user: &str, limit: i64) -> Result<Vec<Interview>>;

    /// Lists all interviews for a user, newest first.
    async fn interviews_for_user(&self, user_id: &str) -> Result<Vec<Interview>>;
}
