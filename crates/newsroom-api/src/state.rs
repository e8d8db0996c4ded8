//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use newsroom_auth::{
    JwtDecoder, JwtEncoder, OtpLedger, PasswordHasher, ProvisioningWorkflow, SessionIssuer,
};
use newsroom_core::config::AppConfig;
use newsroom_core::traits::{Clock, Notifier};
use newsroom_database::AdminStore;

use crate::cookie::SessionCookiePolicy;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped or cheap handles, so cloning is cheap.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Process start, for uptime reporting
    pub started_at: Instant,

    // ── Infrastructure ───────────────────────────────────────
    /// Admin credential store
    pub admin_store: Arc<dyn AdminStore>,
    /// Pending provisioning codes
    pub otp_ledger: OtpLedger,

    // ── Auth ─────────────────────────────────────────────────
    /// Password login
    pub session_issuer: Arc<SessionIssuer>,
    /// Session token validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Session cookie attributes
    pub cookie_policy: Arc<SessionCookiePolicy>,
    /// Owner-approved admin creation
    pub provisioning: Arc<ProvisioningWorkflow>,
}

impl AppState {
    /// Wire the auth components around the given collaborators.
    pub fn new(
        config: AppConfig,
        admin_store: Arc<dyn AdminStore>,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let hasher = PasswordHasher::new();
        let otp_ledger = OtpLedger::from_config(&config.otp, Arc::clone(&clock));

        let session_issuer = SessionIssuer::new(
            Arc::clone(&admin_store),
            hasher,
            JwtEncoder::new(&config.auth, Arc::clone(&clock)),
        );
        let jwt_decoder = JwtDecoder::new(&config.auth, Arc::clone(&clock));

        let provisioning = ProvisioningWorkflow::new(
            otp_ledger.clone(),
            Arc::clone(&admin_store),
            notifier,
            hasher,
            config.mail.owner_address.clone(),
        );

        let cookie_policy = SessionCookiePolicy::new(
            &config.cookie,
            config.environment,
            config.auth.token_ttl_minutes,
        );

        Self {
            config: Arc::new(config),
            started_at: Instant::now(),
            admin_store,
            otp_ledger,
            session_issuer: Arc::new(session_issuer),
            jwt_decoder: Arc::new(jwt_decoder),
            cookie_policy: Arc::new(cookie_policy),
            provisioning: Arc::new(provisioning),
        }
    }
}
