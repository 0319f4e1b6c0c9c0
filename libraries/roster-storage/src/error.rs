/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Database connection error
    #[error("Database connection error: {0}")]
    Connection(String),

    /// Schema bootstrap error
    #[error("Schema error: {0}")]
    Schema(String),

    /// A stored profile column is not a JSON object
    #[error("Invalid profile for user {id}: {reason}")]
    InvalidProfile { id: i64, reason: String },

    /// I/O error preparing the database location
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Database error from `SQLx`
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl StorageError {
    /// Create an invalid profile error
    pub fn invalid_profile(id: i64, reason: impl Into<String>) -> Self {
        Self::InvalidProfile {
            id,
            reason: reason.into(),
        }
    }
}

impl From<StorageError> for roster_core::RosterError {
    fn from(err: StorageError) -> Self {
        roster_core::RosterError::storage(err.to_string())
    }
}
