//! # newsroom-api
//!
//! HTTP API layer for the Newsroom backend built on Axum.
//!
//! Provides the admin endpoints, the session gate middleware, the session
//! cookie policy, DTOs, and the mapping from [`AppError`](newsroom_core::AppError)
//! to HTTP responses.

pub mod app;
pub mod cookie;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
