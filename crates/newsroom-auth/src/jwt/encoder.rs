//! Session token creation with configurable signing and TTL.

use std::sync::Arc;

use chrono::{DateTime, Duration, SubsecRound, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use newsroom_core::config::AuthConfig;
use newsroom_core::error::AppError;
use newsroom_core::traits::Clock;

use super::claims::SessionClaims;

/// Creates signed session tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    encoding_key: EncodingKey,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder").field("ttl", &self.ttl).finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl: Duration::minutes(config.token_ttl_minutes as i64),
            clock,
        }
    }

    /// Session lifetime.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Mints a token for `admin_id`, returning it with its expiry.
    ///
    /// Claims carry whole seconds, so the issue time is truncated first and
    /// the returned expiry equals the `exp` claim.
    pub fn mint(&self, admin_id: Uuid) -> Result<(String, DateTime<Utc>), AppError> {
        let now = self.clock.now().trunc_subsecs(0);
        let exp = now + self.ttl;

        let claims = SessionClaims {
            sub: admin_id,
            iat: now.timestamp(),
            exp: exp.timestamp(),
            jti: Uuid::new_v4(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))?;

        Ok((token, exp))
    }
}
