//! Routine API routes

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::RoutineService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use macromatch_shared::types::{
    RoutineCreateRequest, RoutineListResponse, RoutineResponse, RoutineUpdateRequest,
};
use uuid::Uuid;

/// Create routine routes
pub fn routine_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_routines).post(create_routine).put(update_routine))
        .route("/:id", axum::routing::delete(delete_routine))
}

/// GET /api/v1/routine - All routine day records for the user
async fn list_routines(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<RoutineListResponse>, ApiError> {
    let data = RoutineService::list(state.db(), auth.user_id).await?;
    Ok(Json(RoutineListResponse { data }))
}

/// POST /api/v1/routine - Create a record for an unoccupied weekday
///
/// Returns 409 when the user already has a record for that day.
async fn create_routine(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<RoutineCreateRequest>,
) -> Result<(StatusCode, Json<RoutineResponse>), ApiError> {
    let record = RoutineService::create(state.db(), auth.user_id, req.day, req.entry).await?;
    Ok((StatusCode::CREATED, Json(RoutineResponse { record })))
}

/// PUT /api/v1/routine - Replace an existing record
///
/// The body carries the id and the revision the edit was based on; a
/// stale revision means another client updated the day first and returns
/// 409 with the current revision in the message.
async fn update_routine(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<RoutineUpdateRequest>,
) -> Result<Json<RoutineResponse>, ApiError> {
    let record = RoutineService::update(
        state.db(),
        auth.user_id,
        req.id,
        req.revision,
        req.day,
        req.entry,
    )
    .await?;
    Ok(Json(RoutineResponse { record }))
}

/// DELETE /api/v1/routine/{id} - Remove a record
///
/// Idempotent; deleting an id that no longer exists still returns 204.
async fn delete_routine(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    RoutineService::delete(state.db(), auth.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
