//! Route definitions for the Newsroom HTTP API.
//!
//! All routes are mounted under `/api`. Routes that need a session sit
//! behind the [`require_session`](crate::middleware::auth::require_session)
//! route layer.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the API router with all routes and the session gate.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(admin_routes())
        .merge(protected_admin_routes(state.clone()))
        .merge(health_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Admin endpoints that do not require a session.
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/login", post(handlers::admin::login))
        .route("/admin/create", post(handlers::admin::create))
        .route("/admin/logout", post(handlers::admin::logout))
        .route("/admin/verify", get(handlers::admin::verify))
}

/// Admin endpoints gated on a valid session cookie.
fn protected_admin_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/admin/delete/{id}", delete(handlers::admin::delete_admin))
        .route("/admin/protected", get(handlers::admin::protected))
        .route("/admin/me", get(handlers::admin::me))
        .route_layer(axum_middleware::from_fn_with_state(
            state,
            middleware::auth::require_session,
        ))
}

/// Health probes.
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}
