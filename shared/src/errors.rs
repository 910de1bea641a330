//! Error types for the MacroMatch application
//!
//! The taxonomy mirrors how failures are surfaced to users: validation
//! problems are correctable input, persistence problems fall back to local
//! storage, auth problems end the session, integration problems are
//! surfaced once with no retry.

use thiserror::Error;

/// Input validation failures for biometric and routine data
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("{field} must be a positive number")]
    NotPositive { field: &'static str },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("{field} cannot be empty")]
    Empty { field: &'static str },
}

/// Failures talking to the routine / calculator stores
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Conflicting update: {0}")]
    Conflict(String),
}

/// Session / token failures; fatal to the session
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Missing token")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,
}

/// Third-party integration failures (Spotify playlist generation)
#[derive(Error, Debug)]
pub enum IntegrationError {
    #[error("Integration is not connected")]
    NotConnected,

    #[error("Integration is not configured")]
    NotConfigured,

    #[error("Upstream service error: {0}")]
    Upstream(String),
}
