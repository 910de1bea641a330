//! MacroMatch Shared Library
//!
//! This crate contains the computational core shared across the backend
//! and WASM modules: the metabolic calculator, the workout catalog, the
//! routine model, and the weekly planner state machine.

pub mod catalog;
pub mod errors;
pub mod metabolics;
pub mod planner;
pub mod routine;
pub mod types;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use types::*;

// Export units module items (canonical source for unit types)
pub use units::*;

// Export the calculator and routine surface without the helper internals
pub use metabolics::{
    ActivityLevel, BiometricInput, CalculationResult, DietType, Equipment, FitnessLevel,
    GoalPreferences, MacroGrams, MacroSplit, PrimaryGoal, Sex, TimeAvailable, WorkoutType,
};
pub use routine::{EntryShape, ExerciseKind, RoutineDayRecord, RoutineEntry, Weekday};
