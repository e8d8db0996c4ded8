//! Session gate for protected routes.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;

use newsroom_core::error::AppError;

use crate::error::ApiError;
use crate::extractors::SessionContext;
use crate::state::AppState;

/// Validate the session cookie carried by `jar`.
///
/// Fails with "No token provided" when the cookie is missing or empty and
/// with "Invalid token" when it does not verify or has expired.
pub fn authenticate(state: &AppState, jar: &CookieJar) -> Result<SessionContext, AppError> {
    let token = state
        .cookie_policy
        .token_from(jar)
        .ok_or_else(|| AppError::unauthorized("No token provided"))?;

    let claims = state
        .jwt_decoder
        .verify(&token)
        .map_err(|_| AppError::unauthorized("Invalid token"))?;

    Ok(SessionContext {
        admin_id: claims.admin_id(),
        expires_at: claims.expires_at(),
    })
}

/// Admit the request only with a valid session cookie, attaching its
/// [`SessionContext`] to the request extensions.
pub async fn require_session(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let context = authenticate(&state, &jar).inspect_err(|e| {
        tracing::debug!(
            path = %request.uri().path(),
            reason = %e.message,
            "Session rejected"
        );
    })?;

    request.extensions_mut().insert(context);
    Ok(next.run(request).await)
}
