/// User API routes
use crate::{error::Result, state::AppState};
use axum::{extract::State, Json};
use roster_core::User;

/// GET /users
/// List all users
pub async fn list_users(State(app_state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = app_state.users.find_all().await?;
    tracing::debug!("Listing {} users", users.len());
    Ok(Json(users))
}
