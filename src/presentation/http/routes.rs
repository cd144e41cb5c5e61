//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{response::IntoResponse, routing::get, Router};

use super::handlers;
use crate::infrastructure::metrics;
use crate::startup::AppState;

/// Create the main API router.
///
/// Cross-cutting layers are added by [`crate::startup::build_router`].
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/users", user_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    let metrics = metrics::gather_metrics();
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}

/// User routes, with chats and messages nested under their owner
fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::user::list_users).post(handlers::user::create_user),
        )
        .route(
            "/{user_id}",
            get(handlers::user::get_user).delete(handlers::user::delete_user),
        )
        .nest("/{user_id}/chats", chat_routes())
}

/// Chat routes (nested under /users/{user_id})
fn chat_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::chat::list_chats).post(handlers::chat::create_chat),
        )
        .route(
            "/{chat_id}",
            get(handlers::chat::get_chat).delete(handlers::chat::delete_chat),
        )
        .nest("/{chat_id}/messages", message_routes())
}

/// Message routes (nested under /users/{user_id}/chats/{chat_id})
fn message_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::message::list_messages).post(handlers::message::create_message),
        )
        .route(
            "/{message_id}",
            get(handlers::message::get_message).delete(handlers::message::delete_message),
        )
}
