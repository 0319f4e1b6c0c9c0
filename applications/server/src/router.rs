/// HTTP router
use crate::{api, state::AppState};
use axum::{routing::get, Router};
use tower_http::trace::{DefaultMakeSpan, TraceLayer};

/// Build the application router with request tracing
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/users", get(api::users::list_users))
        .route("/hello", get(api::hello::hello))
        .route("/health", get(api::health::health))
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .with_state(app_state)
}
