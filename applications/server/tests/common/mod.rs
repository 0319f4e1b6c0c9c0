//! Common test utilities and fixtures
#![allow(dead_code)]

use async_trait::async_trait;
use axum::{body::Body, http::Request, Router};
use mockall::mock;
use roster_core::{Result, User, UserRepository};
use roster_server::{create_router, AppState};
use roster_storage::{InMemoryUserRepository, SqliteUserRepository};
use sqlx::SqlitePool;
use std::sync::Arc;
use tempfile::TempDir;

mock! {
    pub Repository {}

    #[async_trait]
    impl UserRepository for Repository {
        async fn find_all(&self) -> Result<Vec<User>>;
    }
}

/// Build the router over any repository
pub fn app_with(repository: impl UserRepository + 'static) -> Router {
    create_router(AppState::new(Arc::new(repository)))
}

/// Build the router over a fixed list of users
pub fn app_with_users(users: Vec<User>) -> Router {
    app_with(InMemoryUserRepository::new(users))
}

/// SQLite-backed test database that cleans up on drop
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

impl TestDb {
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_url = format!("sqlite://{}", temp_dir.path().join("roster.db").display());

        let pool = roster_storage::create_pool(&db_url, 2)
            .await
            .expect("Failed to create pool");
        roster_storage::ensure_schema(&pool)
            .await
            .expect("Failed to create schema");

        Self {
            pool,
            _temp_dir: temp_dir,
        }
    }

    pub async fn insert(&self, id: i64, name: &str, profile: &str) {
        sqlx::query("INSERT INTO users (id, name, profile) VALUES (?, ?, ?)")
            .bind(id)
            .bind(name)
            .bind(profile)
            .execute(&self.pool)
            .await
            .expect("Failed to insert test user");
    }

    pub fn app(&self) -> Router {
        app_with(SqliteUserRepository::new(self.pool.clone()))
    }
}

/// GET request with an empty body
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Collect a response body into bytes
pub async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}
