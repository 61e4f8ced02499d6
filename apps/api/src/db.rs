use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Bootstraps the two document tables. Idempotent, runs at every startup.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS interviews (
            id TEXT PRIMARY KEY,
            role TEXT NOT NULL,
            interview_type TEXT NOT NULL,
            level TEXT NOT NULL,
            techstack TEXT[] NOT NULL,
            questions TEXT[] NOT NULL,
            user_id TEXT NOT NULL,
            finalized BOOLEAN NOT NULL,
            cover_image TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS feedback (
            id TEXT PRIMARY KEY,
            interview_id TEXT NOT NULL,
            user_id TEXT NOT NULL,
            total_score DOUBLE PRECISION NOT NULL,
            category_scores JSONB NOT NULL,
            strengths TEXT[] NOT NULL,
            areas_for_improvement TEXT[] NOT NULL,
            final_assessment TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    info!("Document tables ready");
    Ok(())
}
