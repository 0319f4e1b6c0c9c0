//! Roster Core
//!
//! Storage-agnostic domain types, the repository trait, and error handling for Roster.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`
//! - **Core Traits**: `UserRepository`, the seam between the HTTP surface and persistence
//! - **Error Handling**: Unified `RosterError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use roster_core::types::User;
//!
//! let user = User::new(1, "Alice");
//! assert_eq!(
//!     serde_json::to_string(&user).unwrap(),
//!     r#"{"id":1,"name":"Alice"}"#
//! );
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod repository;
pub mod types;

// Re-export commonly used types
pub use error::{Result, RosterError};
pub use repository::UserRepository;
pub use types::{Profile, User};
