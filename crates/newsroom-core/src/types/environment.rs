//! Deployment environment.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Where the server is running.
///
/// Production turns on `Secure` cookies with `SameSite=None` so the admin
/// frontend can live on a different site than the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development and tests.
    #[default]
    Development,
    /// Production deployment.
    Production,
}

impl Environment {
    /// Returns `true` for production deployments.
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "development" | "dev" | "test" => Ok(Self::Development),
            other => Err(format!("unknown environment '{other}'")),
        }
    }
}
