//! In-process `DocumentStore` used by tests. Mirrors the Postgres
//! implementation's query semantics (filters, ordering, upsert overwrite)
//! over two mutex-guarded vectors.

use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use uuid::Uuid;

use crate::models::feedback::{Feedback, FeedbackRecord};
use crate::models::interview::{Interview, InterviewRecord};
use crate::store::DocumentStore;

#[derive(Default)]
pub struct MemoryStore {
    interviews: Mutex<Vec<(String, InterviewRecord)>>,
    feedback: Mutex<Vec<(String, FeedbackRecord)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn create_interview(&self, record: &InterviewRecord) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        let mut interviews = self
            .interviews
            .lock()
            .map_err(|_| anyhow!("interview store lock poisoned"))?;
        interviews.push((id.clone(), record.clone()));
        Ok(id)
    }

    async fn get_interview(&self, id: &str) -> Result<Option<Interview>> {
        let interviews = self
            .interviews
            .lock()
            .map_err(|_| anyhow!("interview store lock poisoned"))?;
        Ok(interviews
            .iter()
            .find(|(doc_id, _)| doc_id == id)
            .map(|(doc_id, record)| Interview {
                id: doc_id.clone(),
                record: record.clone(),
            }))
    }

    async fn upsert_feedback(&self, id: Option<&str>, record: &FeedbackRecord) -> Result<String> {
        let id = match id {
            Some(id) => id.to_string(),
            None => Uuid::new_v4().to_string(),
        };
        let mut feedback = self
            .feedback
            .lock()
            .map_err(|_| anyhow!("feedback store lock poisoned"))?;
        match feedback.iter_mut().find(|(doc_id, _)| *doc_id == id) {
            Some((_, existing)) => *existing = record.clone(),
            None => feedback.push((id.clone(), record.clone())),
        }
        Ok(id)
    }

    async fn get_feedback(&self, interview_id: &str, user_id: &str) -> Result<Option<Feedback>> {
        let feedback = self
            .feedback
            .lock()
            .map_err(|_| anyhow!("feedback store lock poisoned"))?;
        Ok(feedback
            .iter()
            .find(|(_, r)| r.interview_id == interview_id && r.user_id == user_id)
            .map(|(doc_id, record)| Feedback {
                id: doc_id.clone(),
                record: record.clone(),
            }))
    }

    async fn latest_interviews(&self, excluding_user: &str, limit: i64) -> Result<Vec<Interview>> {
        let interviews = self
            .interviews
            .lock()
            .map_err(|_| anyhow!("interview store lock poisoned"))?;
        let mut matching: Vec<Interview> = interviews
            .iter()
            .filter(|(_, r)| r.finalized && r.user_id != excluding_user)
            .map(|(doc_id, record)| Interview {
                id: doc_id.clone(),
                record: record.clone(),
            })
            .collect();
        matching.sort_by(|a, b| b.record.created_at.cmp(&a.record.created_at));
        matching.truncate(limit.max(0) as usize);
        Ok(matching)
    }

    async fn interviews_for_user(&self, user_id: &str) -> Result<Vec<Interview>> {
        let interviews = self
            .interviews
            .lock()
            .map_err(|_| anyhow!("interview store lock poisoned"))?;
        let mut matching: Vec<Interview> = interviews
            .iter()
            .filter(|(_, r)| r.user_id == user_id)
            .map(|(doc_id, record)| Interview {
                id: doc_id.clone(),
                record: record.clone(),
            })
            .collect();
        matching.sort_by(|a, b| b.record.created_at.cmp(&a.record.created_at));
        Ok(matching)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;
    use crate::models::feedback::FeedbackResult;

    fn interview(user_id: &str, finalized: bool, age_minutes: i64) -> InterviewRecord {
        InterviewRecord {
            role: "Backend Engineer".to_string(),
            interview_type: "Technical".to_string(),
            level: "Mid".to_string(),
            techstack: vec!["Rust".to_string()],
            questions: vec!["Q1".to_string()],
            user_id: user_id.to_string(),
            finalized,
            cover_image: "/covers/adobe.png".to_string(),
            created_at: Utc::now() - Duration::minutes(age_minutes),
        }
    }

    fn feedback(interview_id: &str, user_id: &str, total_score: f64) -> FeedbackRecord {
        FeedbackRecord::from_result(
            interview_id.to_string(),
            user_id.to_string(),
            FeedbackResult {
                total_score,
                ..Default::default()
            },
        )
    }

    #[tokio::test]
    async fn test_create_and_get_interview() {
        let store = MemoryStore::new();
        let id = store.create_interview(&interview("u1", true, 0)).await.unwrap();
        let fetched = store.get_interview(&id).await.unwrap().unwrap();
        assert_eq!(fetched.id, id);
        assert_eq!(fetched.record.user_id, "u1");
        assert!(store.get_interview("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_upsert_feedback_overwrites_same_id() {
        let store = MemoryStore::new();
        let first = store
            .upsert_feedback(Some("X"), &feedback("i1", "u1", 40.0))
            .await
            .unwrap();
        let second = store
            .upsert_feedback(Some("X"), &feedback("i1", "u1", 90.0))
            .await
            .unwrap();
        assert_eq!(first, "X");
        assert_eq!(second, "X");

        let fetched = store.get_feedback("i1", "u1").await.unwrap().unwrap();
        assert_eq!(fetched.record.total_score, 90.0);
    }

    #[tokio::test]
    async fn test_upsert_feedback_generates_distinct_ids() {
        let store = MemoryStore::new();
        let a = store
            .upsert_feedback(None, &feedback("i1", "u1", 50.0))
            .await
            .unwrap();
        let b = store
            .upsert_feedback(None, &feedback("i2", "u1", 60.0))
            .await
            .unwrap();
        assert_ne!(a, b);
        assert!(!a.is_empty());
    }

    #[tokio::test]
    async fn test_latest_interviews_filters_and_orders() {
        let store = MemoryStore::new();
        store.create_interview(&interview("u1", true, 5)).await.unwrap();
        store.create_interview(&interview("u2", true, 30)).await.unwrap();
        store.create_interview(&interview("u3", true, 10)).await.unwrap();
        store.create_interview(&interview("u4", false, 1)).await.unwrap();

        let latest = store.latest_interviews("u1", 2).await.unwrap();
        assert_eq!(latest.len(), 2);
        assert!(latest.iter().all(|i| i.record.finalized));
        assert!(latest.iter().all(|i| i.record.user_id != "u1"));
        // Newest first: u3 (10 min old) before u2 (30 min old)
        assert_eq!(latest[0].record.user_id, "u3");
        assert_eq!(latest[1].record.user_id, "u2");
    }

    #[tokio::test]
    async fn test_interviews_for_user_newest_first() {
        let store = MemoryStore::new();
        store.create_interview(&interview("u1", true, 60)).await.unwrap();
        store.create_interview(&interview("u1", false, 2)).await.unwrap();
        store.create_interview(&interview("u2", true, 1)).await.unwrap();

        let mine = store.interviews_for_user("u1").await.unwrap();
        assert_eq!(mine.len(), 2);
        assert!(mine[0].record.created_at > mine[1].record.created_at);
    }
}
