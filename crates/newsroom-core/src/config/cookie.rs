//! Session cookie configuration.
//!
//! `Secure` and `SameSite` are not configured here: they follow the
//! deployment [`Environment`](crate::types::Environment).

use serde::{Deserialize, Serialize};

/// Attributes shared by the cookie set at login and cleared at logout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CookieConfig {
    /// Cookie name.
    #[serde(default = "default_name")]
    pub name: String,
    /// Cookie path.
    #[serde(default = "default_path")]
    pub path: String,
    /// Cookie domain. When unset the browser scopes it to the request host.
    #[serde(default)]
    pub domain: Option<String>,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            path: default_path(),
            domain: None,
        }
    }
}

fn default_name() -> String {
    "authToken".to_string()
}

fn default_path() -> String {
    "/".to_string()
}
