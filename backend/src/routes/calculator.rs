//! Calculator API routes

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::CalculatorService;
use crate::state::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use macromatch_shared::types::{CalculateRequest, CalculateResponse, SnapshotResponse};

/// Create calculator routes
pub fn calculator_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(calculate))
        .route("/latest", get(latest_snapshot))
}

/// POST /api/v1/calculator - Run the metabolic calculation
///
/// Computes caloric targets, the macro breakdown and the workout
/// selection for the submitted biometrics, and persists the snapshot.
/// The result is returned even when persistence fails; `stored: false`
/// marks a spooled run.
async fn calculate(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CalculateRequest>,
) -> Result<Json<CalculateResponse>, ApiError> {
    let response = CalculatorService::run(
        state.db(),
        &state.config().storage.spool_dir,
        auth.user_id,
        req,
    )
    .await?;

    Ok(Json(response))
}

/// GET /api/v1/calculator/latest - Last stored snapshot
///
/// Returns `data: null` (not 404) when the user has never run the
/// calculator.
async fn latest_snapshot(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<SnapshotResponse>, ApiError> {
    let response = CalculatorService::latest(state.db(), auth.user_id).await?;
    Ok(Json(response))
}
