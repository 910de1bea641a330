//! Weekly routine data model
//!
//! Each weekday holds at most one routine record per user. The record
//! payload is a tagged union over the four exercise shapes the routine form
//! supports; validation and serialization dispatch on the tag instead of a
//! flat record full of optional fields.

use crate::errors::ValidationError;
use crate::validation::validate_nonempty;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Weekday
// ============================================================================

/// Day key for a routine record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Zero-based index, Sunday first
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|d| d == self).unwrap_or(0)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Sunday => "sunday",
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Weekday {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sunday" => Ok(Weekday::Sunday),
            "monday" => Ok(Weekday::Monday),
            "tuesday" => Ok(Weekday::Tuesday),
            "wednesday" => Ok(Weekday::Wednesday),
            "thursday" => Ok(Weekday::Thursday),
            "friday" => Ok(Weekday::Friday),
            "saturday" => Ok(Weekday::Saturday),
            _ => Err(format!("Unknown weekday: {}", s)),
        }
    }
}

// ============================================================================
// Exercise kinds and shapes
// ============================================================================

/// The concrete activity chosen in the routine form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    Walking,
    #[default]
    Running,
    Cycling,
    Swimming,
    Elliptical,
    Treadmill,
    Hiit,
    CardioIntervals,
    Strength,
    Yoga,
    Pilates,
}

/// The four record shapes a routine entry can take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryShape {
    Cardio,
    Interval,
    Strength,
    Flexibility,
}

impl ExerciseKind {
    /// Which record shape this activity uses
    pub fn shape(&self) -> EntryShape {
        match self {
            ExerciseKind::Walking
            | ExerciseKind::Running
            | ExerciseKind::Cycling
            | ExerciseKind::Swimming
            | ExerciseKind::Elliptical
            | ExerciseKind::Treadmill => EntryShape::Cardio,
            ExerciseKind::Hiit | ExerciseKind::CardioIntervals => EntryShape::Interval,
            ExerciseKind::Strength => EntryShape::Strength,
            ExerciseKind::Yoga | ExerciseKind::Pilates => EntryShape::Flexibility,
        }
    }
}

/// Required form fields for an exercise kind, validated before submission
pub fn fields_for(kind: ExerciseKind) -> &'static [&'static str] {
    match kind.shape() {
        EntryShape::Cardio => &["duration", "speed", "distance"],
        EntryShape::Interval => &[
            "exercise_per_round",
            "duration",
            "high_intensity",
            "low_intensity",
            "rest_time",
        ],
        EntryShape::Strength => &["exercises"],
        EntryShape::Flexibility => &["duration", "notes"],
    }
}

// ============================================================================
// Routine entry (tagged union)
// ============================================================================

/// One strength movement within a strength-day entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthExercise {
    pub name: String,
    pub reps: u32,
    pub sets: u32,
}

/// The per-day routine payload, variant by exercise shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum RoutineEntry {
    Cardio {
        kind: ExerciseKind,
        /// hh:mm:ss as entered
        duration: String,
        speed: String,
        distance: String,
    },
    Interval {
        kind: ExerciseKind,
        exercise_per_round: String,
        duration: String,
        high_intensity: String,
        low_intensity: String,
        rest_time: String,
    },
    Strength {
        exercises: Vec<StrengthExercise>,
    },
    Flexibility {
        kind: ExerciseKind,
        duration: String,
        notes: String,
    },
}

impl RoutineEntry {
    /// Blank form for a freshly toggled-on day
    pub fn blank(kind: ExerciseKind) -> Self {
        match kind.shape() {
            EntryShape::Cardio => RoutineEntry::Cardio {
                kind,
                duration: String::new(),
                speed: String::new(),
                distance: String::new(),
            },
            EntryShape::Interval => RoutineEntry::Interval {
                kind,
                exercise_per_round: String::new(),
                duration: String::new(),
                high_intensity: String::new(),
                low_intensity: String::new(),
                rest_time: String::new(),
            },
            EntryShape::Strength => RoutineEntry::Strength { exercises: Vec::new() },
            EntryShape::Flexibility => RoutineEntry::Flexibility {
                kind,
                duration: String::new(),
                notes: String::new(),
            },
        }
    }

    /// The activity selected in the form, if the shape carries one
    pub fn kind(&self) -> ExerciseKind {
        match self {
            RoutineEntry::Cardio { kind, .. }
            | RoutineEntry::Interval { kind, .. }
            | RoutineEntry::Flexibility { kind, .. } => *kind,
            RoutineEntry::Strength { .. } => ExerciseKind::Strength,
        }
    }

    pub fn shape(&self) -> EntryShape {
        match self {
            RoutineEntry::Cardio { .. } => EntryShape::Cardio,
            RoutineEntry::Interval { .. } => EntryShape::Interval,
            RoutineEntry::Strength { .. } => EntryShape::Strength,
            RoutineEntry::Flexibility { .. } => EntryShape::Flexibility,
        }
    }

    /// Check the entry is complete for its shape.
    ///
    /// Also rejects a kind that belongs to a different shape, which can only
    /// happen through hand-built JSON.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.kind().shape() != self.shape() {
            return Err(ValidationError::Missing { field: "category" });
        }

        match self {
            RoutineEntry::Cardio { duration, speed, distance, .. } => {
                validate_nonempty("duration", duration)?;
                validate_nonempty("speed", speed)?;
                validate_nonempty("distance", distance)?;
            }
            RoutineEntry::Interval {
                exercise_per_round,
                duration,
                high_intensity,
                low_intensity,
                rest_time,
                ..
            } => {
                validate_nonempty("exercise_per_round", exercise_per_round)?;
                validate_nonempty("duration", duration)?;
                validate_nonempty("high_intensity", high_intensity)?;
                validate_nonempty("low_intensity", low_intensity)?;
                validate_nonempty("rest_time", rest_time)?;
            }
            RoutineEntry::Strength { exercises } => {
                if exercises.is_empty() {
                    return Err(ValidationError::Empty { field: "exercises" });
                }
                for exercise in exercises {
                    validate_nonempty("name", &exercise.name)?;
                    if exercise.reps == 0 {
                        return Err(ValidationError::NotPositive { field: "reps" });
                    }
                    if exercise.sets == 0 {
                        return Err(ValidationError::NotPositive { field: "sets" });
                    }
                }
            }
            RoutineEntry::Flexibility { duration, notes, .. } => {
                validate_nonempty("duration", duration)?;
                validate_nonempty("notes", notes)?;
            }
        }
        Ok(())
    }
}

// ============================================================================
// Stored record
// ============================================================================

/// A routine record as held by the store: one per (user, weekday)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutineDayRecord {
    pub id: Uuid,
    pub day: Weekday,
    /// Monotonic version, bumped on every update; updates must present the
    /// expected revision or they are rejected as stale
    pub revision: i64,
    #[serde(flatten)]
    pub entry: RoutineEntry,
}
