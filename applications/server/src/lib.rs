//! Roster Server Library
//!
//! Read-only HTTP listing of users backed by a pluggable repository.
//!
//! This library exposes the router and its components for testing purposes.

pub mod api;
pub mod bootstrap;
pub mod config;
pub mod error;
pub mod router;
pub mod state;

// Re-export commonly used types for convenience
pub use bootstrap::open_repository;
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use router::create_router;
pub use state::AppState;
