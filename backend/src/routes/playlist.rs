//! Workout playlist API routes

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use macromatch_shared::types::{PlaylistRequest, PlaylistResponse};

/// Create playlist routes
pub fn playlist_routes() -> Router<AppState> {
    Router::new().route("/", post(generate_playlist))
}

/// POST /api/v1/playlist - Generate a workout playlist
///
/// Proxies to the Spotify integration. When the integration is not
/// connected or configured the error is surfaced once as 503; nothing is
/// retried.
async fn generate_playlist(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(req): Json<PlaylistRequest>,
) -> Result<Json<PlaylistResponse>, ApiError> {
    let playlist = state
        .spotify
        .generate_playlist(req.workout_type, req.time_available)
        .await?;
    Ok(Json(playlist))
}
