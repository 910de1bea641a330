//! External integrations
//!
//! Third-party collaborators the gateway proxies to. Each client is
//! constructed once at startup and cloned into handlers.

mod spotify;

pub use spotify::SpotifyClient;
