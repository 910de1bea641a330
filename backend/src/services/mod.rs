//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and external systems.

pub mod calculator;
pub mod routine;

pub use calculator::CalculatorService;
pub use routine::RoutineService;
