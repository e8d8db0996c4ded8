//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use newsroom_entity::admin::AdminAccount;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

impl MessageResponse {
    /// Build a message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Public view of an admin account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminResponse {
    /// Admin ID.
    pub id: Uuid,
    /// Username.
    pub username: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl From<AdminAccount> for AdminResponse {
    fn from(admin: AdminAccount) -> Self {
        Self {
            id: admin.id,
            username: admin.username,
            created_at: admin.created_at,
        }
    }
}

/// Login response. The token itself travels only in the cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Message.
    pub message: String,
    /// The authenticated admin.
    pub admin: AdminResponse,
    /// Session expiration.
    pub expires_at: DateTime<Utc>,
}

/// Provisioning response for either phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAdminResponse {
    /// Message.
    pub message: String,
    /// The created admin, present once the code was accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<AdminResponse>,
}

/// Protected route response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProtectedResponse {
    /// Message.
    pub message: String,
    /// ID of the admin carried by the session.
    pub admin_id: Uuid,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
    /// Uptime in seconds.
    pub uptime_seconds: u64,
}

/// Detailed health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// Overall status.
    pub status: String,
    /// Credential store status.
    pub database: String,
    /// Number of provisioned admins, when the store is reachable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_count: Option<u64>,
}
