//! Routine repository for database operations
//!
//! One row per (user, weekday), enforced by a unique constraint. The
//! `revision` column is bumped on every successful update; updates carry
//! the revision they were based on and affect zero rows when stale.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Routine day row from the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RoutineRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub day: String,
    pub revision: i64,
    pub entry: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Routine repository for database operations
pub struct RoutineRepository;

impl RoutineRepository {
    /// Create a routine entry for a day. Fails with a unique violation
    /// when the user already has a record for that weekday.
    pub async fn create(
        pool: &PgPool,
        user_id: Uuid,
        day: &str,
        entry: &serde_json::Value,
    ) -> Result<RoutineRow, sqlx::Error> {
        sqlx::query_as::<_, RoutineRow>(
            r#"
            INSERT INTO routines (user_id, day, entry)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, day, revision, entry, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(day)
        .bind(entry)
        .fetch_one(pool)
        .await
    }

    /// Get all routine records for a user, in week order by stored day name
    pub async fn list_for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<RoutineRow>, sqlx::Error> {
        sqlx::query_as::<_, RoutineRow>(
            r#"
            SELECT id, user_id, day, revision, entry, created_at, updated_at
            FROM routines
            WHERE user_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Get a single record by id, scoped to its owner
    pub async fn get_by_id(
        pool: &PgPool,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<Option<RoutineRow>, sqlx::Error> {
        sqlx::query_as::<_, RoutineRow>(
            r#"
            SELECT id, user_id, day, revision, entry, created_at, updated_at
            FROM routines
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
    }

    /// Replace a record's entry if the caller's revision is current.
    /// Returns None when the row does not exist for this user or the
    /// expected revision no longer matches.
    pub async fn update_checked(
        pool: &PgPool,
        user_id: Uuid,
        id: Uuid,
        expected_revision: i64,
        day: &str,
        entry: &serde_json::Value,
    ) -> Result<Option<RoutineRow>, sqlx::Error> {
        sqlx::query_as::<_, RoutineRow>(
            r#"
            UPDATE routines
            SET day = $4, entry = $5, revision = revision + 1, updated_at = now()
            WHERE id = $1 AND user_id = $2 AND revision = $3
            RETURNING id, user_id, day, revision, entry, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(expected_revision)
        .bind(day)
        .bind(entry)
        .fetch_optional(pool)
        .await
    }

    /// Delete a record by id. Returns the number of rows removed;
    /// deleting an absent id is not an error.
    pub async fn delete(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM routines
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }
}
