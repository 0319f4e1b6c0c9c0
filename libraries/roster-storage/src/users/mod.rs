//! User queries

use crate::error::{Result, StorageError};
use roster_core::types::User;
use sqlx::SqlitePool;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    profile: String,
}

impl TryFrom<UserRow> for User {
    type Error = StorageError;

    fn try_from(row: UserRow) -> Result<Self> {
        let profile = match serde_json::from_str::<serde_json::Value>(&row.profile) {
            Ok(serde_json::Value::Object(map)) => map,
            Ok(other) => {
                return Err(StorageError::invalid_profile(
                    row.id,
                    format!("expected a JSON object, found {}", json_kind(&other)),
                ))
            }
            Err(e) => return Err(StorageError::invalid_profile(row.id, e.to_string())),
        };

        Ok(User::with_profile(row.id, row.name, profile))
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Get all users, ordered by id
///
/// A single row with a malformed profile fails the whole read; no partial
/// result is returned.
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>> {
    let rows = sqlx::query_as::<_, UserRow>("SELECT id, name, profile FROM users ORDER BY id")
        .fetch_all(pool)
        .await?;

    rows.into_iter().map(User::try_from).collect()
}
