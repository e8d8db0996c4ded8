//! Mail transport configuration.

use serde::{Deserialize, Serialize};

/// Which mail transport delivers owner notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MailTransport {
    /// Write messages to the log only.
    #[default]
    Log,
    /// POST messages to an HTTP mail API.
    Http,
}

/// Owner mailbox and transport settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    /// Transport used for delivery.
    #[serde(default)]
    pub transport: MailTransport,
    /// The owner mailbox that approves new admins. OTPs go here and nowhere else.
    #[serde(default)]
    pub owner_address: String,
    /// Sender address.
    #[serde(default)]
    pub from_address: String,
    /// HTTP mail API endpoint (for the `http` transport).
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Bearer token for the HTTP mail API.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Delivery timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            transport: MailTransport::default(),
            owner_address: String::new(),
            from_address: String::new(),
            endpoint: None,
            api_key: None,
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    10
}
