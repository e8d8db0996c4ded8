//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username, any case.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Admin provisioning request body.
///
/// Without `otp` this asks the owner for a code; with it, the account is
/// created.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAdminRequest {
    /// Requested username.
    #[validate(length(min = 1, max = 64, message = "Username is required"))]
    pub username: String,
    /// Requested password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Code relayed by the owner.
    #[serde(default)]
    pub otp: Option<String>,
}
