//! API request and response types

use crate::metabolics::{BiometricInput, CalculationResult, GoalPreferences, TimeAvailable, WorkoutType};
use crate::routine::{RoutineDayRecord, RoutineEntry, Weekday};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

// ============================================================================
// Calculator Types
// ============================================================================

/// Calculator submission: biometrics plus goal preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateRequest {
    #[serde(flatten)]
    pub biometrics: BiometricInput,
    #[serde(flatten)]
    pub goals: GoalPreferences,
}

/// Calculator response. `stored` is false when the snapshot could not be
/// persisted and was spooled locally instead; the result is still valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateResponse {
    pub result: CalculationResult,
    pub stored: bool,
}

/// Persisted calculator run: the input alongside its derived output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorSnapshot {
    pub biometrics: BiometricInput,
    pub goals: GoalPreferences,
    pub result: CalculationResult,
    pub calculated_at: DateTime<Utc>,
}

/// Latest-snapshot response; `data` is null when the user has never run
/// the calculator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotResponse {
    pub data: Option<CalculatorSnapshot>,
}

// ============================================================================
// Routine Types
// ============================================================================

/// Create a routine entry for a day that has none
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutineCreateRequest {
    pub day: Weekday,
    #[serde(flatten)]
    pub entry: RoutineEntry,
}

/// Replace an existing day's entry. `revision` must match the stored row
/// or the update is rejected as stale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutineUpdateRequest {
    pub id: Uuid,
    pub revision: i64,
    pub day: Weekday,
    #[serde(flatten)]
    pub entry: RoutineEntry,
}

/// Single stored routine day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutineResponse {
    #[serde(flatten)]
    pub record: RoutineDayRecord,
}

/// Full week listing, at most one record per weekday
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutineListResponse {
    pub data: Vec<RoutineDayRecord>,
}

// ============================================================================
// Playlist Types
// ============================================================================

/// Playlist generation request, derived from the workout preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistRequest {
    #[serde(default)]
    pub workout_type: WorkoutType,
    #[serde(default)]
    pub time_available: TimeAvailable,
}

/// Generated playlist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistResponse {
    pub name: String,
    pub tracks: Vec<PlaylistTrack>,
    pub total_duration_min: u32,
}

/// Single playlist track
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrack {
    pub title: String,
    pub artist: String,
    pub duration_sec: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metabolics::{ActivityLevel, Sex};
    use crate::units::UnitSystem;

    #[test]
    fn test_calculate_request_flattens_sections() {
        let json = serde_json::json!({
            "weight": 154.0,
            "height": 69.0,
            "age": 30,
            "sex": "male",
            "activity": "moderately_active",
            "unit_system": "imperial",
            "primary_goal": "weight_loss",
            "diet_type": "balanced",
            "time_available": "30-45"
        });
        let req: CalculateRequest = serde_json::from_value(json).unwrap();
        assert_eq!(req.biometrics.sex, Sex::Male);
        assert_eq!(req.biometrics.activity, ActivityLevel::ModeratelyActive);
        assert_eq!(req.biometrics.unit_system, UnitSystem::Imperial);
        assert_eq!(req.goals.primary_goal, crate::metabolics::PrimaryGoal::WeightLoss);
    }

    #[test]
    fn test_snapshot_response_null_data() {
        let resp = SnapshotResponse { data: None };
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json["data"].is_null());
    }

    #[test]
    fn test_routine_create_request_carries_tagged_entry() {
        let json = serde_json::json!({
            "day": "monday",
            "category": "cardio",
            "kind": "running",
            "duration": "30 min",
            "speed": "10 km/h",
            "distance": "5 km"
        });
        let req: RoutineCreateRequest = serde_json::from_value(json).unwrap();
        assert_eq!(req.day, Weekday::Monday);
        assert!(matches!(req.entry, RoutineEntry::Cardio { .. }));
    }
}
