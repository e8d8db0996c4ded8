//! `AuthAdmin` extractor: reads the session admitted by the gate middleware.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use newsroom_core::error::AppError;

use crate::error::ApiError;

/// Identity attached to a request by
/// [`require_session`](crate::middleware::auth::require_session).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionContext {
    /// The authenticated admin.
    pub admin_id: Uuid,
    /// When the session token expires.
    pub expires_at: DateTime<Utc>,
}

/// Extracted session context available in protected handlers.
#[derive(Debug, Clone, Copy)]
pub struct AuthAdmin(pub SessionContext);

impl std::ops::Deref for AuthAdmin {
    type Target = SessionContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AuthAdmin
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionContext>()
            .copied()
            .map(AuthAdmin)
            .ok_or_else(|| AppError::unauthorized("No token provided").into())
    }
}
