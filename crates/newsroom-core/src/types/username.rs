//! Username normalization.
//!
//! Every entry point (login, provisioning, lookups) goes through
//! [`normalize_username`] so that lookups are case-insensitive without
//! relying on collation support in the store.

/// Trim surrounding whitespace and lower-case a username.
pub fn normalize_username(raw: &str) -> String {
    raw.trim().to_lowercase()
}
