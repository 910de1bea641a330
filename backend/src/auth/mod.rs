//! Authentication module
//!
//! The session provider is an external collaborator; this module only
//! validates the bearer tokens it issues. Token generation exists for the
//! test harness and local development.

mod jwt;
mod middleware;

pub use jwt::{Claims, JwtService};
pub use middleware::AuthUser;
