//! Postgres-backed `DocumentStore`.
//!
//! Two tables stand in for the original document collections; the
//! category-score sequence lives in a JSONB column. Document ids are
//! app-generated UUID strings so the upsert can target a caller-supplied id.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::models::feedback::{CategoryScore, Feedback, FeedbackRecord};
use crate::models::interview::{Interview, InterviewRecord};
use crate::store::DocumentStore;

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct InterviewRow {
    id: String,
    role: String,
    interview_type: String,
    level: String,
    techstack: Vec<String>,
    questions: Vec<String>,
    user_id: String,
    finalized: bool,
    cover_image: String,
    created_at: DateTime<Utc>,
}

impl From<InterviewRow> for Interview {
    fn from(row: InterviewRow) -> Self {
        Interview {
            id: row.id,
            record: InterviewRecord {
                role: row.role,
                interview_type: row.interview_type,
                level: row.level,
                techstack: row.techstack,
                questions: row.questions,
                user_id: row.user_id,
                finalized: row.finalized,
                cover_image: row.cover_image,
                created_at: row.created_at,
            },
        }
    }
}

#[derive(Debug, FromRow)]
struct FeedbackRow {
    id: String,
    interview_id: String,
    user_id: String,
    total_score: f64,
    category_scores: Json<Vec<CategoryScore>>,
    strengths: Vec<String>,
    areas_for_improvement: Vec<String>,
    final_assessment: String,
    created_at: DateTime<Utc>,
}

impl From<FeedbackRow> for Feedback {
    fn from(row: FeedbackRow) -> Self {
        Feedback {
            id: row.id,
            record: FeedbackRecord {
                interview_id: row.interview_id,
                user_id: row.user_id,
                total_score: row.total_score,
                category_scores: row.category_scores.0,
                strengths: row.strengths,
                areas_for_improvement: row.areas_for_improvement,
                final_assessment: row.final_assessment,
                created_at: row.created_at,
            },
        }
    }
}

#[async_trait]
impl DocumentStore for PgStore {
    async fn create_interview(&self, record: &InterviewRecord) -> Result<String> {
        let id = Uuid::new_v4().to_string();

        sqlx::query(
            r#"
            INSERT INTO interviews
                (id, role, interview_type, level, techstack, questions,
                 user_id, finalized, cover_image, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(&id)
        .bind(&record.role)
        .bind(&record.interview_type)
        .bind(&record.level)
        .bind(&record.techstack)
        .bind(&record.questions)
        .bind(&record.user_id)
        .bind(record.finalized)
        .bind(&record.cover_image)
        .bind(record.created_at)
        .execute(&self.pool)
        .await?;

        Ok(id)
    }

    async fn get_interview(&self, id: &str) -> Result<Option<Interview>> {
        let row: Option<InterviewRow> =
            sqlx::query_as("SELECT * FROM interviews WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(Interview::from))
    }

    async fn upsert_feedback(&self, id: Option<&str>, record: &FeedbackRecord) -> Result<String> {
        let id = match id {
            Some(id) => id.to_string(),
            None => Uuid::new_v4().to_string(),
        };

        sqlx::query(
            r#"
            INSERT INTO feedback
                (id, interview_id, user_id, total_score, category_scores,
                 strengths, areas_for_improvement, final_assessment, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (id) DO UPDATE SET
                interview_id = EXCLUDED.interview_id,
                user_id = EXCLUDED.user_id,
                total_score = EXCLUDED.total_score,
                category_scores = EXCLUDED.category_scores,
                strengths = EXCLUDED.strengths,
                areas_for_improvement = EXCLUDED.areas_for_improvement,
                final_assessment = EXCLUDED.final_assessment,
                created_at = EXCLUDED.created_at
            "#,
        )
        .bind(&id)
        .bind(&record.interview_id)
        .bind(&record.user_id)
        .bind(record.total_score)
        .bind(Json(&record.category_scores))
        .bind(&record.strengths)
        .bind(&record.areas_for_improvement)
        .bind(&record.final_assessment)
        .bind(record.created_at)
        .execute(&self.pool)
        .await?;

        Ok(id)
    }

    async fn get_feedback(&self, interview_id: &str, user_id: &str) -> Result<Option<Feedback>> {
        let row: Option<FeedbackRow> = sqlx::query_as(
            "SELECT * FROM feedback WHERE interview_id = $1 AND user_id = $2 LIMIT 1",
        )
        .bind(interview_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Feedback::from))
    }

    async fn latest_interviews(&self, excluding_user: &str, limit: i64) -> Result<Vec<Interview>> {
        let rows: Vec<InterviewRow> = sqlx::query_as(
            r#"
            SELECT * FROM interviews
            WHERE finalized = TRUE AND user_id <> $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(excluding_user)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Interview::from).collect())
    }

    async fn interviews_for_user(&self, user_id: &str) -> Result<Vec<Interview>> {
        let rows: Vec<InterviewRow> = sqlx::query_as(
            "SELECT * FROM interviews WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Interview::from).collect())
    }
}
