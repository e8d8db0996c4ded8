//! Session token validation against the injected clock.

use std::sync::Arc;

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use newsroom_core::config::AuthConfig;
use newsroom_core::error::AppError;
use newsroom_core::traits::Clock;

use super::claims::SessionClaims;
use crate::error::AuthFailure;

/// Validates session tokens.
///
/// Signature and algorithm are checked by `jsonwebtoken`; expiry is checked
/// here against the [`Clock`] with no leeway.
#[derive(Clone)]
pub struct JwtDecoder {
    decoding_key: DecodingKey,
    validation: Validation,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig, clock: Arc<dyn Clock>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            clock,
        }
    }

    /// Decodes and validates a session token.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, AppError> {
        let claims = decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                tracing::debug!(error = %e, "Session token rejected");
                AppError::from(AuthFailure::Unauthorized)
            })?
            .claims;

        if claims.is_expired_at(self.clock.now()) {
            tracing::debug!(admin_id = %claims.sub, "Session token expired");
            return Err(AuthFailure::Unauthorized.into());
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::JwtEncoder;
    use chrono::{Duration, SubsecRound, TimeZone, Utc};
    use newsroom_core::error::ErrorKind;
    use newsroom_core::traits::ManualClock;
    use uuid::Uuid;

    fn config(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            ..AuthConfig::default()
        }
    }

    #[test]
    fn test_token_valid_for_one_hour() {
        let clock = Arc::new(ManualClock::starting_now());
        let encoder = JwtEncoder::new(&config("secret"), clock.clone());
        let decoder = JwtDecoder::new(&config("secret"), clock.clone());

        let admin_id = Uuid::new_v4();
        let (token, expires_at) = encoder.mint(admin_id).unwrap();
        assert_eq!(expires_at, clock.now().trunc_subsecs(0) + Duration::hours(1));

        clock.advance(Duration::minutes(59) + Duration::seconds(59));
        let claims = decoder.verify(&token).unwrap();
        assert_eq!(claims.admin_id(), admin_id);

        clock.advance(Duration::seconds(1));
        let err = decoder.verify(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
    }

    #[test]
    fn test_expiry_matches_claim_for_fractional_issue_time() {
        let issued = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
            + Duration::milliseconds(900);
        let clock = Arc::new(ManualClock::new(issued));
        let encoder = JwtEncoder::new(&config("secret"), clock.clone());
        let decoder = JwtDecoder::new(&config("secret"), clock.clone());

        let (token, expires_at) = encoder.mint(Uuid::new_v4()).unwrap();
        let claims = decoder.verify(&token).unwrap();

        assert_eq!(claims.exp, expires_at.timestamp());
        assert_eq!(claims.expires_at(), expires_at);
        assert_eq!(expires_at.timestamp_subsec_nanos(), 0);
        assert_eq!(
            expires_at,
            Utc.with_ymd_and_hms(2024, 6, 1, 13, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_rejects_foreign_signature() {
        let clock = Arc::new(ManualClock::starting_now());
        let encoder = JwtEncoder::new(&config("one-secret"), clock.clone());
        let decoder = JwtDecoder::new(&config("another-secret"), clock);

        let (token, _) = encoder.mint(Uuid::new_v4()).unwrap();
        assert!(decoder.verify(&token).is_err());
    }

    #[test]
    fn test_rejects_garbage() {
        let decoder = JwtDecoder::new(&config("secret"), Arc::new(ManualClock::starting_now()));
        let err = decoder.verify("not-a-jwt").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
    }

    #[test]
    fn test_tokens_are_unique_per_mint() {
        let clock = Arc::new(ManualClock::starting_now());
        let encoder = JwtEncoder::new(&config("secret"), clock);
        let id = Uuid::new_v4();
        let (a, _) = encoder.mint(id).unwrap();
        let (b, _) = encoder.mint(id).unwrap();
        assert_ne!(a, b);
    }
}
