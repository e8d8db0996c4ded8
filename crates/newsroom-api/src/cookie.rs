//! Session cookie attributes.
//!
//! Login sets and logout clears the session cookie through the same
//! [`SessionCookiePolicy`], so the removal always targets the cookie that
//! was set.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use newsroom_core::config::CookieConfig;
use newsroom_core::types::Environment;

/// How the session cookie is named and scoped.
#[derive(Debug, Clone)]
pub struct SessionCookiePolicy {
    name: String,
    path: String,
    domain: Option<String>,
    secure: bool,
    same_site: SameSite,
    max_age: time::Duration,
}

impl SessionCookiePolicy {
    /// Derive the policy from configuration.
    ///
    /// Production cookies are `Secure` with `SameSite=None`; everything else
    /// gets `SameSite=Lax` without `Secure`.
    pub fn new(config: &CookieConfig, environment: Environment, ttl_minutes: u64) -> Self {
        let production = environment.is_production();
        Self {
            name: config.name.clone(),
            path: config.path.clone(),
            domain: config.domain.clone().filter(|d| !d.trim().is_empty()),
            secure: production,
            same_site: if production {
                SameSite::None
            } else {
                SameSite::Lax
            },
            max_age: time::Duration::minutes(ttl_minutes as i64),
        }
    }

    /// Cookie name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The cookie carrying a freshly minted token.
    pub fn session_cookie(&self, token: impl Into<String>) -> Cookie<'static> {
        let mut cookie = self.base(token.into());
        cookie.set_max_age(self.max_age);
        cookie
    }

    /// A cookie that makes the browser drop the session cookie.
    pub fn removal_cookie(&self) -> Cookie<'static> {
        let mut cookie = self.base(String::new());
        cookie.make_removal();
        cookie
    }

    /// The session token carried by `jar`, if any. Empty values count as absent.
    pub fn token_from(&self, jar: &CookieJar) -> Option<String> {
        jar.get(&self.name)
            .map(|c| c.value().to_string())
            .filter(|v| !v.is_empty())
    }

    fn base(&self, value: String) -> Cookie<'static> {
        let mut builder = Cookie::build((self.name.clone(), value))
            .path(self.path.clone())
            .http_only(true)
            .secure(self.secure)
            .same_site(self.same_site);
        if let Some(domain) = &self.domain {
            builder = builder.domain(domain.clone());
        }
        builder.build()
    }
}
