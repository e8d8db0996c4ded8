//! Admin handlers: login, provisioning, deletion, logout and session checks.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum_extra::extract::cookie::CookieJar;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use newsroom_auth::{ProvisionOutcome, ProvisionRequest};
use newsroom_core::error::AppError;

use crate::dto::request::{CreateAdminRequest, LoginRequest};
use crate::dto::response::{
    AdminResponse, ApiResponse, CreateAdminResponse, LoginResponse, MessageResponse,
    ProtectedResponse,
};
use crate::error::ApiError;
use crate::extractors::AuthAdmin;
use crate::middleware::auth::authenticate;
use crate::state::AppState;

/// POST /api/admin/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<ApiResponse<LoginResponse>>), ApiError> {
    req.validate()?;

    let session = state
        .session_issuer
        .login(&req.username, &req.password)
        .await?;

    let jar = jar.add(state.cookie_policy.session_cookie(session.token));

    Ok((
        jar,
        Json(ApiResponse::ok(LoginResponse {
            message: "Login successful".to_string(),
            admin: session.admin.into(),
            expires_at: session.expires_at,
        })),
    ))
}

/// POST /api/admin/create
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateAdminRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CreateAdminResponse>>), ApiError> {
    req.validate()?;

    let outcome = state
        .provisioning
        .handle(ProvisionRequest {
            username: req.username,
            password: req.password,
            otp: req.otp,
        })
        .await?;

    let (status, body) = match outcome {
        ProvisionOutcome::OtpDispatched => (
            StatusCode::OK,
            CreateAdminResponse {
                message: "OTP sent to the Owner. Please verify with the OTP.".to_string(),
                admin: None,
            },
        ),
        ProvisionOutcome::Created(admin) => (
            StatusCode::CREATED,
            CreateAdminResponse {
                message: "Admin created successfully".to_string(),
                admin: Some(admin.into()),
            },
        ),
    };

    Ok((status, Json(ApiResponse::ok(body))))
}

/// DELETE /api/admin/delete/{id}
///
/// An id that is not a UUID cannot name an admin and is reported as not
/// found.
pub async fn delete_admin(
    State(state): State<AppState>,
    auth: AuthAdmin,
    Path(raw_id): Path<String>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let id: Uuid = raw_id
        .parse()
        .map_err(|_| AppError::not_found("Admin not found"))?;

    let Some(target) = state.admin_store.find_by_id(id).await? else {
        return Err(AppError::not_found("Admin not found").into());
    };

    if !state.admin_store.delete_by_id(id).await? {
        return Err(AppError::not_found("Admin not found").into());
    }

    info!(
        admin_id = %id,
        username = %target.username,
        deleted_by = %auth.admin_id,
        "Admin deleted"
    );

    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Admin deleted successfully",
    ))))
}

/// POST /api/admin/logout
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<ApiResponse<MessageResponse>>) {
    let jar = jar.add(state.cookie_policy.removal_cookie());
    (
        jar,
        Json(ApiResponse::ok(MessageResponse::new("Logged out successfully"))),
    )
}

/// GET /api/admin/verify
pub async fn verify(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    authenticate(&state, &jar)?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Token is valid"))))
}

/// GET /api/admin/protected
pub async fn protected(auth: AuthAdmin) -> Json<ApiResponse<ProtectedResponse>> {
    Json(ApiResponse::ok(ProtectedResponse {
        message: "This is a protected route".to_string(),
        admin_id: auth.admin_id,
    }))
}

/// GET /api/admin/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthAdmin,
) -> Result<Json<ApiResponse<AdminResponse>>, ApiError> {
    let admin = state
        .admin_store
        .find_by_id(auth.admin_id)
        .await?
        .ok_or_else(|| AppError::not_found("Admin not found"))?;

    Ok(Json(ApiResponse::ok(admin.into())))
}
