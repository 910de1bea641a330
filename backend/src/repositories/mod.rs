//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod calculator;
pub mod routine;

pub use calculator::{CalculatorSnapshotRepository, SnapshotRow};
pub use routine::{RoutineRepository, RoutineRow};
