//! Password login producing a signed session token.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use newsroom_core::result::AppResult;
use newsroom_core::types::normalize_username;
use newsroom_database::AdminStore;
use newsroom_entity::admin::AdminAccount;

use crate::error::AuthFailure;
use crate::jwt::JwtEncoder;
use crate::password::PasswordHasher;

/// A freshly minted session.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    /// Signed session token, to be carried in the session cookie.
    pub token: String,
    /// The authenticated admin.
    pub admin: AdminAccount,
    /// When the token stops being accepted.
    pub expires_at: DateTime<Utc>,
}

/// Checks admin credentials and mints session tokens.
#[derive(Debug, Clone)]
pub struct SessionIssuer {
    store: Arc<dyn AdminStore>,
    hasher: PasswordHasher,
    encoder: JwtEncoder,
}

impl SessionIssuer {
    /// Creates a new issuer.
    pub fn new(store: Arc<dyn AdminStore>, hasher: PasswordHasher, encoder: JwtEncoder) -> Self {
        Self {
            store,
            hasher,
            encoder,
        }
    }

    /// Authenticate `username` with `password`.
    ///
    /// Fails with [`AuthFailure::UnknownUser`] or
    /// [`AuthFailure::BadCredentials`]; no token is minted in either case.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<IssuedSession> {
        let username = normalize_username(username);

        let Some(admin) = self.store.find_by_username(&username).await? else {
            warn!(username = %username, "Login failed: unknown username");
            return Err(AuthFailure::UnknownUser.into());
        };

        if !self.hasher.verify_password(password, &admin.password_hash)? {
            warn!(admin_id = %admin.id, "Login failed: incorrect password");
            return Err(AuthFailure::BadCredentials.into());
        }

        let (token, expires_at) = self.encoder.mint(admin.id)?;
        info!(admin_id = %admin.id, %expires_at, "Admin logged in");

        Ok(IssuedSession {
            token,
            admin,
            expires_at,
        })
    }
}
