//! Admin account model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use newsroom_core::types::normalize_username;

/// A privileged user allowed to manage news and advertisements.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AdminAccount {
    /// Unique admin identifier.
    pub id: Uuid,
    /// Unique, lower-cased login name.
    pub username: String,
    /// Argon2id password hash in PHC string format.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// When the account was provisioned.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new admin.
#[derive(Debug, Clone)]
pub struct CreateAdmin {
    /// Normalized username.
    pub username: String,
    /// Pre-hashed password.
    pub password_hash: String,
}

impl CreateAdmin {
    /// Build a creation request, normalizing the username.
    pub fn new(username: &str, password_hash: impl Into<String>) -> Self {
        Self {
            username: normalize_username(username),
            password_hash: password_hash.into(),
        }
    }
}
