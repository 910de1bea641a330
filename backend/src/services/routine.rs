//! Routine service
//!
//! Create/update/delete/list for routine day records with ownership and
//! revision checks. A weekday is exclusively owned: creating a second
//! record for an occupied day is a conflict, and updates must carry the
//! revision they were based on.

use crate::error::ApiError;
use crate::repositories::{RoutineRepository, RoutineRow};
use macromatch_shared::routine::{RoutineDayRecord, RoutineEntry, Weekday};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

/// Postgres unique-violation SQLSTATE
const UNIQUE_VIOLATION: &str = "23505";

/// Routine service for business logic
pub struct RoutineService;

impl RoutineService {
    /// All routine records for a user
    pub async fn list(pool: &PgPool, user_id: Uuid) -> Result<Vec<RoutineDayRecord>, ApiError> {
        let rows = RoutineRepository::list_for_user(pool, user_id).await?;
        rows.into_iter().map(row_to_record).collect()
    }

    /// Create a record for a day that has none
    pub async fn create(
        pool: &PgPool,
        user_id: Uuid,
        day: Weekday,
        entry: RoutineEntry,
    ) -> Result<RoutineDayRecord, ApiError> {
        entry.validate()?;
        let entry_json = serde_json::to_value(&entry)
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("Failed to encode entry: {}", e)))?;

        let row = RoutineRepository::create(pool, user_id, day.as_str(), &entry_json)
            .await
            .map_err(|e| match unique_violation(&e) {
                true => ApiError::Conflict(format!("A routine already exists for {}", day)),
                false => ApiError::Database(e),
            })?;

        info!(user_id = %user_id, day = %day, id = %row.id, "Routine created");
        row_to_record(row)
    }

    /// Replace an existing record. The caller's revision must match the
    /// stored row; a mismatch means another client updated the day first.
    pub async fn update(
        pool: &PgPool,
        user_id: Uuid,
        id: Uuid,
        expected_revision: i64,
        day: Weekday,
        entry: RoutineEntry,
    ) -> Result<RoutineDayRecord, ApiError> {
        entry.validate()?;
        let entry_json = serde_json::to_value(&entry)
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("Failed to encode entry: {}", e)))?;

        let updated = RoutineRepository::update_checked(
            pool,
            user_id,
            id,
            expected_revision,
            day.as_str(),
            &entry_json,
        )
        .await?;

        match updated {
            Some(row) => {
                info!(user_id = %user_id, id = %id, revision = row.revision, "Routine updated");
                row_to_record(row)
            }
            // Zero rows: distinguish a missing record from a stale revision
            None => match RoutineRepository::get_by_id(pool, user_id, id).await? {
                Some(row) => Err(ApiError::Conflict(format!(
                    "Routine {} is at revision {}, update was based on {}",
                    id, row.revision, expected_revision
                ))),
                None => Err(ApiError::NotFound(format!("Routine {} not found", id))),
            },
        }
    }

    /// Delete a record by id. Idempotent: deleting an already-removed
    /// record succeeds, matching the client's optimistic local removal.
    pub async fn delete(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), ApiError> {
        let removed = RoutineRepository::delete(pool, user_id, id).await?;
        info!(user_id = %user_id, id = %id, removed, "Routine delete");
        Ok(())
    }
}

fn unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .and_then(|db| db.code())
        .map(|code| code == UNIQUE_VIOLATION)
        .unwrap_or(false)
}

fn row_to_record(row: RoutineRow) -> Result<RoutineDayRecord, ApiError> {
    let day: Weekday = row
        .day
        .parse()
        .map_err(|e: String| ApiError::Internal(anyhow::anyhow!("Corrupt day column: {}", e)))?;
    let entry: RoutineEntry = serde_json::from_value(row.entry)
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("Corrupt entry column: {}", e)))?;

    Ok(RoutineDayRecord {
        id: row.id,
        day,
        revision: row.revision,
        entry,
    })
}
