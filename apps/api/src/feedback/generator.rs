//! Feedback pipeline — two explicit sequential stages.
//!
//! Flow: format transcript → model call → tolerant parse → (fallback to
//! mock on any model-stage failure) → coerce + stamp → upsert.
//!
//! The stages fail independently: a model-stage failure swaps in the mock
//! payload and the operation still succeeds; only a store failure makes the
//! operation report `success: false`. Neither stage retries, and no error
//! propagates to the caller.

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::feedback::mock::mock_feedback;
use crate::feedback::parser::parse_feedback;
use crate::feedback::prompts::render_feedback_prompt;
use crate::feedback::transcript::format_transcript;
use crate::llm_client::TextGenerator;
use crate::models::feedback::{FeedbackRecord, FeedbackResult, TranscriptEntry};
use crate::store::DocumentStore;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeedbackParams {
    pub interview_id: String,
    pub user_id: String,
    pub transcript: Vec<TranscriptEntry>,
    /// Overwrites this document when supplied; otherwise a new one is created.
    #[serde(default)]
    pub feedback_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeedbackResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback_id: Option<String>,
}

/// Outcome of the model stage. `Fallback` carries the mock payload; it is a
/// recovered state, not an error — the pipeline continues to persistence
/// either way.
#[derive(Debug)]
pub enum ModelStage {
    Ok(FeedbackResult),
    Fallback(FeedbackResult),
}

impl ModelStage {
    pub fn into_result(self) -> FeedbackResult {
        match self {
            ModelStage::Ok(result) | ModelStage::Fallback(result) => result,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Model stage: prompt the model with the formatted transcript and parse its
/// response. Any failure — network, auth, missing or malformed JSON — is
/// recovered here by substituting the mock payload wholesale.
pub async fn evaluate_transcript(
    llm: &dyn TextGenerator,
    transcript: &[TranscriptEntry],
) -> ModelStage {
    let block = format_transcript(transcript);
    let prompt = render_feedback_prompt(&block);

    let text = match llm.generate(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Model call failed, using backup data: {e}");
            return ModelStage::Fallback(mock_feedback());
        }
    };

    match parse_feedback(&text) {
        Ok(result) => {
            info!("Model feedback parsed");
            ModelStage::Ok(result)
        }
        Err(e) => {
            warn!("Model response unusable, using backup data: {e}");
            ModelStage::Fallback(mock_feedback())
        }
    }
}

/// Creates (or overwrites) the feedback document for an interview.
///
/// Model-stage failures never fail the operation; a store failure reports
/// `success: false` with no id. Nothing is retried.
pub async fn create_feedback(
    store: &dyn DocumentStore,
    llm: &dyn TextGenerator,
    params: CreateFeedbackParams,
) -> CreateFeedbackResult {
    info!("Generating feedback for interview {}", params.interview_id);

    let evaluation = evaluate_transcript(llm, &params.transcript).await;

    let record =
        FeedbackRecord::from_result(params.interview_id, params.user_id, evaluation.into_result());

    match store.upsert_feedback(params.feedback_id.as_deref(), &record).await {
        Ok(feedback_id) => {
            info!("Feedback saved: {feedback_id}");
            CreateFeedbackResult {
                success: true,
                feedback_id: Some(feedback_id),
            }
        }
        Err(e) => {
            error!("Feedback write failed: {e:?}");
            CreateFeedbackResult {
                success: false,
                feedback_id: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::{bail, Result};
    use async_trait::async_trait;

    use super::*;
    use crate::llm_client::LlmError;
    use crate::models::feedback::{Feedback, FeedbackRecord};
    use crate::models::interview::{Interview, InterviewRecord};
    use crate::store::memory::MemoryStore;

    struct FixedGenerator(String);

    #[async_trait]
    impl TextGenerator for FixedGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            Ok(self.0.clone())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            Err(LlmError::EmptyContent)
        }
    }

    /// Store whose writes always fail; reads are unreachable in these tests.
    struct BrokenStore;

    #[async_trait]
    impl DocumentStore for BrokenStore {
        async fn create_interview(&self, _record: &InterviewRecord) -> Result<String> {
            bail!("store unavailable")
        }
        async fn get_interview(&self, _id: &str) -> Result<Option<Interview>> {
            bail!("store unavailable")
        }
        async fn upsert_feedback(
            &self,
            _id: Option<&str>,
            _record: &FeedbackRecord,
        ) -> Result<String> {
            bail!("store unavailable")
        }
        async fn get_feedback(
            &self,
            _interview_id: &str,
            _user_id: &str,
        ) -> Result<Option<Feedback>> {
            bail!("store unavailable")
        }
        async fn latest_interviews(
            &self,
            _excluding_user: &str,
            _limit: i64,
        ) -> Result<Vec<Interview>> {
            bail!("store unavailable")
        }
        async fn interviews_for_user(&self, _user_id: &str) -> Result<Vec<Interview>> {
            bail!("store unavailable")
        }
    }

    fn params(feedback_id: Option<&str>) -> CreateFeedbackParams {
        CreateFeedbackParams {
            interview_id: "i1".to_string(),
            user_id: "u1".to_string(),
            transcript: vec![TranscriptEntry {
                role: "candidate".to_string(),
                content: "I enjoy systems programming.".to_string(),
            }],
            feedback_id: feedback_id.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_model_json_persists_verbatim() {
        let store = MemoryStore::new();
        let llm = FixedGenerator(
            r#"```json
{"totalScore": 91, "strengths": ["deep Rust knowledge"], "finalAssessment": "Hire."}
```"#
                .to_string(),
        );

        let result = create_feedback(&store, &llm, params(None)).await;
        assert!(result.success);
        assert!(!result.feedback_id.clone().unwrap().is_empty());

        let saved = store.get_feedback("i1", "u1").await.unwrap().unwrap();
        assert_eq!(saved.record.total_score, 91.0);
        assert_eq!(saved.record.strengths, vec!["deep Rust knowledge"]);
        assert_eq!(saved.record.final_assessment, "Hire.");
        // Missing fields coerce to empty, not to mock data
        assert!(saved.record.category_scores.is_empty());
    }

    #[tokio::test]
    async fn test_model_failure_persists_mock_payload() {
        let store = MemoryStore::new();

        let result = create_feedback(&store, &FailingGenerator, params(None)).await;
        assert!(result.success);

        let saved = store.get_feedback("i1", "u1").await.unwrap().unwrap();
        let mock = mock_feedback();
        assert_eq!(saved.record.total_score, mock.total_score);
        assert_eq!(saved.record.category_scores, mock.category_scores);
        assert_eq!(saved.record.strengths, mock.strengths);
        assert_eq!(saved.record.final_assessment, mock.final_assessment);
    }

    #[tokio::test]
    async fn test_non_json_response_persists_mock_payload() {
        let store = MemoryStore::new();
        let llm = FixedGenerator("I am unable to evaluate this transcript.".to_string());

        let result = create_feedback(&store, &llm, params(None)).await;
        assert!(result.success);

        let saved = store.get_feedback("i1", "u1").await.unwrap().unwrap();
        assert_eq!(saved.record.total_score, 75.0);
        assert_eq!(saved.record.category_scores.len(), 5);
    }

    #[tokio::test]
    async fn test_supplied_id_overwrites_same_document() {
        let store = MemoryStore::new();

        let first = create_feedback(
            &store,
            &FixedGenerator(r#"{"totalScore": 10}"#.to_string()),
            params(Some("X")),
        )
        .await;
        let second = create_feedback(
            &store,
            &FixedGenerator(r#"{"totalScore": 99}"#.to_string()),
            params(Some("X")),
        )
        .await;

        assert_eq!(first.feedback_id.as_deref(), Some("X"));
        assert_eq!(second.feedback_id.as_deref(), Some("X"));

        let saved = store.get_feedback("i1", "u1").await.unwrap().unwrap();
        assert_eq!(saved.record.total_score, 99.0);
    }

    #[tokio::test]
    async fn test_store_failure_reports_unsuccessful() {
        let result = create_feedback(
            &BrokenStore,
            &FixedGenerator(r#"{"totalScore": 50}"#.to_string()),
            params(None),
        )
        .await;

        assert!(!result.success);
        assert!(result.feedback_id.is_none());
    }

    #[tokio::test]
    async fn test_evaluate_transcript_tags_stages() {
        let ok = evaluate_transcript(
            &FixedGenerator(r#"{"totalScore": 42}"#.to_string()),
            &params(None).transcript,
        )
        .await;
        assert!(matches!(ok, ModelStage::Ok(_)));

        let fallback = evaluate_transcript(&FailingGenerator, &params(None).transcript).await;
        assert!(matches!(fallback, ModelStage::Fallback(_)));
    }
}
