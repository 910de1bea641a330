//! Spotify playlist client
//!
//! Proxies playlist generation to the Spotify recommendations API. The
//! integration is optional: a disabled or unconfigured client fails with
//! an IntegrationError that the API layer surfaces once, with no retry.

use crate::config::SpotifyConfig;
use macromatch_shared::errors::IntegrationError;
use macromatch_shared::metabolics::{TimeAvailable, WorkoutType};
use macromatch_shared::types::{PlaylistResponse, PlaylistTrack};
use serde::Deserialize;
use tracing::info;

/// Spotify recommendations client
#[derive(Clone)]
pub struct SpotifyClient {
    http: reqwest::Client,
    enabled: bool,
    base_url: String,
    api_token: String,
}

#[derive(Deserialize)]
struct RecommendationsResponse {
    tracks: Vec<TrackObject>,
}

#[derive(Deserialize)]
struct TrackObject {
    name: String,
    duration_ms: u64,
    artists: Vec<ArtistObject>,
}

#[derive(Deserialize)]
struct ArtistObject {
    name: String,
}

impl SpotifyClient {
    pub fn new(config: &SpotifyConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            enabled: config.enabled,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
        }
    }

    /// Seed genre for a workout focus
    fn seed_genre(workout_type: WorkoutType) -> &'static str {
        match workout_type {
            WorkoutType::Cardio => "work-out",
            WorkoutType::Strength => "rock",
            WorkoutType::Flexibility => "ambient",
            WorkoutType::Mixed => "pop",
        }
    }

    fn playlist_name(workout_type: WorkoutType) -> String {
        let label = match workout_type {
            WorkoutType::Cardio => "Cardio",
            WorkoutType::Strength => "Strength",
            WorkoutType::Flexibility => "Flexibility",
            WorkoutType::Mixed => "Mixed",
        };
        format!("{} Workout Mix", label)
    }

    /// Generate a playlist sized to the session length. Tracks are taken
    /// in recommendation order until the lower bound of the time range is
    /// covered.
    pub async fn generate_playlist(
        &self,
        workout_type: WorkoutType,
        time_available: TimeAvailable,
    ) -> Result<PlaylistResponse, IntegrationError> {
        if !self.enabled {
            return Err(IntegrationError::NotConnected);
        }
        if self.api_token.is_empty() {
            return Err(IntegrationError::NotConfigured);
        }

        let url = format!("{}/recommendations", self.base_url);
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.api_token)
            .query(&[
                ("seed_genres", Self::seed_genre(workout_type)),
                ("limit", "50"),
            ])
            .send()
            .await
            .map_err(|e| IntegrationError::Upstream(e.to_string()))?;

        if !response.status().is_success() {
            return Err(IntegrationError::Upstream(format!(
                "Spotify returned {}",
                response.status()
            )));
        }

        let recommendations: RecommendationsResponse = response
            .json()
            .await
            .map_err(|e| IntegrationError::Upstream(format!("Malformed response: {}", e)))?;

        let target_secs = u64::from(time_available.minutes_lower_bound()) * 60;
        let mut tracks = Vec::new();
        let mut total_secs = 0u64;
        for track in recommendations.tracks {
            if total_secs >= target_secs {
                break;
            }
            let duration_sec = (track.duration_ms / 1000) as u32;
            total_secs += u64::from(duration_sec);
            tracks.push(PlaylistTrack {
                title: track.name,
                artist: track
                    .artists
                    .first()
                    .map(|a| a.name.clone())
                    .unwrap_or_default(),
                duration_sec,
            });
        }

        let playlist = PlaylistResponse {
            name: Self::playlist_name(workout_type),
            total_duration_min: (total_secs / 60) as u32,
            tracks,
        };
        info!(
            name = %playlist.name,
            tracks = playlist.tracks.len(),
            "Playlist generated"
        );
        Ok(playlist)
    }
}
