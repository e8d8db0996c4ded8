//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod auth;
pub mod cookie;
pub mod database;
pub mod logging;
pub mod mail;
pub mod otp;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::cookie::CookieConfig;
pub use self::database::{DatabaseConfig, DatabaseProvider};
pub use self::logging::LoggingConfig;
pub use self::mail::{MailConfig, MailTransport};
pub use self::otp::OtpConfig;

use crate::error::AppError;
use crate::types::Environment;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay) and
/// `NEWSROOM__`-prefixed environment variables.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Deployment environment; drives the session cookie policy.
    #[serde(default)]
    pub environment: Environment,
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Credential store settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Session cookie settings.
    #[serde(default)]
    pub cookie: CookieConfig,
    /// Provisioning OTP settings.
    #[serde(default)]
    pub otp: OtpConfig,
    /// Owner mailbox and transport settings.
    #[serde(default)]
    pub mail: MailConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges `config/default`, the `config/{env}` overlay and environment
    /// variables prefixed with `NEWSROOM__`. The `environment` field is
    /// forced to `env` so the cookie policy always matches the overlay that
    /// was loaded.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let environment: Environment = env.parse().map_err(AppError::configuration)?;

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("NEWSROOM")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override("environment", environment.to_string())?
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Parse configuration from an in-memory TOML document.
    pub fn from_toml_str(toml: &str) -> Result<Self, AppError> {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Reject settings that are unsafe or unusable for the environment.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.auth.jwt_secret.is_empty() {
            return Err(AppError::configuration("auth.jwt_secret must not be empty"));
        }

        if self.environment.is_production() {
            if self.auth.jwt_secret == auth::PLACEHOLDER_JWT_SECRET {
                return Err(AppError::configuration(
                    "auth.jwt_secret still has the placeholder value",
                ));
            }
            if self.mail.owner_address.trim().is_empty() {
                return Err(AppError::configuration(
                    "mail.owner_address is required in production",
                ));
            }
            if self.mail.transport == MailTransport::Log {
                return Err(AppError::configuration(
                    "mail.transport must not be \"log\" in production",
                ));
            }
        }

        if self.mail.transport == MailTransport::Http && self.mail.endpoint.is_none() {
            return Err(AppError::configuration(
                "mail.endpoint is required for the http transport",
            ));
        }

        Ok(())
    }
}
