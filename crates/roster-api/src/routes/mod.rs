//! Route definitions
//!
//! One route per user operation, plus service metadata and health probes.

use axum::{
    routing::get,
    Router,
};

use crate::handlers::{health, meta, users};
use crate::state::AppState;

/// Create the main router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(meta::service_info))
        .merge(health_routes())
        .merge(user_routes())
}

/// Health check routes
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/", get(users::list_users).post(users::create_user))
        // The static segment wins over the capture, so email lookups never
        // collide with id lookups.
        .route("/users/email/:email", get(users::get_user_by_email))
        .route(
            "/users/:user_id",
            get(users::get_user).delete(users::delete_user),
        )
}
