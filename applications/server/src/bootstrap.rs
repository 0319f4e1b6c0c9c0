/// Storage bootstrap shared by the server and the CLI
use crate::{
    config::ServerConfig,
    error::{Result, ServerError},
};
use roster_storage::SqliteUserRepository;

/// Open the configured `SQLite` store
///
/// Creates the pool (and the database directory), ensures the users table,
/// then applies `storage.seed_file` if one is set.
pub async fn open_repository(config: &ServerConfig) -> Result<SqliteUserRepository> {
    let pool = roster_storage::create_pool(
        &config.storage.database_url,
        config.storage.max_connections,
    )
    .await?;
    roster_storage::ensure_schema(&pool).await?;

    if let Some(seed_file) = &config.storage.seed_file {
        let script = tokio::fs::read_to_string(seed_file).await.map_err(|e| {
            ServerError::Config(format!(
                "Cannot read seed file {}: {}",
                seed_file.display(),
                e
            ))
        })?;
        roster_storage::apply_script(&pool, &script).await?;
        tracing::info!("Applied seed file {}", seed_file.display());
    }

    Ok(SqliteUserRepository::new(pool))
}
