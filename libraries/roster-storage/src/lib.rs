//! Roster Storage
//!
//! `SQLite` and in-memory implementations of [`roster_core::UserRepository`].
//!
//! # Example
//!
//! ```rust,no_run
//! use roster_storage::{create_pool, ensure_schema, SqliteUserRepository};
//! use roster_core::UserRepository;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://roster.db", 5).await?;
//! ensure_schema(&pool).await?;
//!
//! let repository = SqliteUserRepository::new(pool);
//! let users = repository.find_all().await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod memory;
mod repository;

pub mod users;

pub use error::StorageError;
pub use memory::InMemoryUserRepository;
pub use repository::SqliteUserRepository;

use sqlx::sqlite::SqlitePool;

const USERS_SCHEMA: &str = include_str!("../schema/users.sql");

/// Create the tables this crate reads from, if they do not exist yet
///
/// Existing tables and their rows are left untouched.
///
/// # Errors
///
/// Returns an error if the schema statement fails
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), StorageError> {
    sqlx::query(USERS_SCHEMA)
        .execute(pool)
        .await
        .map_err(|e| StorageError::Schema(e.to_string()))?;

    Ok(())
}

/// Run a SQL script, such as a seed file, against the pool
///
/// The script may hold several statements; they run as one batch.
///
/// # Errors
///
/// Returns an error if any statement fails
pub async fn apply_script(pool: &SqlitePool, script: &str) -> Result<(), StorageError> {
    sqlx::raw_sql(script).execute(pool).await?;
    Ok(())
}

/// Create a new `SQLite` pool
///
/// Missing parent directories of a file-backed database are created.
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `sqlite://roster.db`)
/// * `max_connections` - upper bound on pooled connections
///
/// # Errors
///
/// Returns an error if the URL is malformed, the database directory cannot be
/// created, or the connection fails
pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, StorageError> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!("Creating SQLite pool for {}", database_url);

    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| StorageError::Connection(e.to_string()))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    // SQLite creates the file but not its directory
    if let Some(parent) = options.get_filename().parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            tokio::fs::create_dir_all(parent).await?;
            tracing::info!("Created database directory {}", parent.display());
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

    tracing::debug!("SQLite pool ready ({} max connections)", max_connections);

    Ok(pool)
}
