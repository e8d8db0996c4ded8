//! Tower/Axum middleware.

pub mod auth;
pub mod cors;
pub mod logging;
