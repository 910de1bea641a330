//! Calculator service
//!
//! Runs the metabolic calculation and persists the resulting snapshot.
//! Persistence failure never discards the result: the snapshot is spooled
//! to local durable storage, the failure is logged, and the response
//! marks the run as not stored.

use crate::error::ApiError;
use crate::repositories::CalculatorSnapshotRepository;
use chrono::Utc;
use macromatch_shared::metabolics;
use macromatch_shared::types::{
    CalculateRequest, CalculateResponse, CalculatorSnapshot, SnapshotResponse,
};
use sqlx::PgPool;
use std::path::Path;
use tracing::{info, warn};
use uuid::Uuid;

/// Calculator service for business logic
pub struct CalculatorService;

impl CalculatorService {
    /// Compute targets for the submitted biometrics and persist the
    /// snapshot. Validation errors abort before any persistence; a
    /// persistence failure falls back to the local spool.
    pub async fn run(
        pool: &PgPool,
        spool_dir: &str,
        user_id: Uuid,
        request: CalculateRequest,
    ) -> Result<CalculateResponse, ApiError> {
        let result = metabolics::compute(&request.biometrics, &request.goals)?;

        let snapshot = CalculatorSnapshot {
            biometrics: request.biometrics,
            goals: request.goals,
            result: result.clone(),
            calculated_at: Utc::now(),
        };
        let payload = serde_json::to_value(&snapshot)
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("Failed to encode snapshot: {}", e)))?;

        let stored = match CalculatorSnapshotRepository::upsert(
            pool,
            user_id,
            &payload,
            snapshot.calculated_at,
        )
        .await
        {
            Ok(()) => {
                info!(user_id = %user_id, "Calculator snapshot stored");
                true
            }
            Err(e) => {
                warn!(user_id = %user_id, error = %e, "Snapshot persistence failed, spooling locally");
                Self::spool_snapshot(spool_dir, user_id, &payload);
                false
            }
        };

        Ok(CalculateResponse { result, stored })
    }

    /// Latest stored snapshot, or `data: null` for a user with no runs
    pub async fn latest(pool: &PgPool, user_id: Uuid) -> Result<SnapshotResponse, ApiError> {
        let row = CalculatorSnapshotRepository::get_latest(pool, user_id).await?;
        let data = match row {
            Some(row) => Some(serde_json::from_value(row.payload).map_err(|e| {
                ApiError::Internal(anyhow::anyhow!("Corrupt snapshot payload: {}", e))
            })?),
            None => None,
        };
        Ok(SnapshotResponse { data })
    }

    /// Best-effort write to the local spool; failure here is only logged,
    /// the computed result has already been returned to the caller.
    fn spool_snapshot(spool_dir: &str, user_id: Uuid, payload: &serde_json::Value) {
        let dir = Path::new(spool_dir);
        if let Err(e) = std::fs::create_dir_all(dir) {
            warn!(error = %e, "Failed to create spool directory");
            return;
        }
        let path = dir.join(format!("{}.json", user_id));
        match std::fs::write(&path, payload.to_string()) {
            Ok(()) => info!(path = %path.display(), "Snapshot spooled"),
            Err(e) => warn!(error = %e, "Failed to spool snapshot"),
        }
    }
}
