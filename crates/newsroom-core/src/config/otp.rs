//! One-time password configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settings for the admin provisioning OTP ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpConfig {
    /// How long an issued code stays valid, in seconds.
    #[serde(default = "default_expiration")]
    pub expiration_seconds: u64,
    /// How often expired codes are swept from memory, in seconds.
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_seconds: u64,
}

impl OtpConfig {
    /// The sweep period as a [`Duration`].
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_seconds.max(1))
    }
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            expiration_seconds: default_expiration(),
            sweep_interval_seconds: default_sweep_interval(),
        }
    }
}

fn default_expiration() -> u64 {
    10 * 60
}

fn default_sweep_interval() -> u64 {
    60
}
