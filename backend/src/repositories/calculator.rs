//! Calculator snapshot repository
//!
//! Keeps one latest snapshot per user; each new calculator run replaces
//! the previous blob wholesale.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Stored snapshot row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SnapshotRow {
    pub user_id: Uuid,
    pub payload: serde_json::Value,
    pub calculated_at: DateTime<Utc>,
}

/// Calculator snapshot repository
pub struct CalculatorSnapshotRepository;

impl CalculatorSnapshotRepository {
    /// Insert or replace the user's latest snapshot
    pub async fn upsert(
        pool: &PgPool,
        user_id: Uuid,
        payload: &serde_json::Value,
        calculated_at: DateTime<Utc>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO calculator_snapshots (user_id, payload, calculated_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id)
            DO UPDATE SET payload = EXCLUDED.payload,
                          calculated_at = EXCLUDED.calculated_at
            "#,
        )
        .bind(user_id)
        .bind(payload)
        .bind(calculated_at)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Latest snapshot for a user, if any
    pub async fn get_latest(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Option<SnapshotRow>, sqlx::Error> {
        sqlx::query_as::<_, SnapshotRow>(
            r#"
            SELECT user_id, payload, calculated_at
            FROM calculator_snapshots
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await
    }
}
