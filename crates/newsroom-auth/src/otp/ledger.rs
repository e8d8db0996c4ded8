//! In-memory ledger of pending provisioning codes.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use rand::Rng;
use tracing::debug;

use newsroom_core::config::OtpConfig;
use newsroom_core::traits::Clock;

use crate::error::OtpError;

/// A code waiting to be confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingOtp {
    /// Six decimal digits.
    pub code: String,
    /// When the code was issued.
    pub issued_at: DateTime<Utc>,
}

/// Result of checking a supplied code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpOutcome {
    /// The code matched and has been consumed.
    Verified,
    /// Nothing was pending for the username.
    NoPending,
    /// The pending code was past its window and has been discarded.
    Expired,
    /// The code did not match; the pending entry is kept.
    Mismatch,
}

impl OtpOutcome {
    /// `Ok(())` for [`OtpOutcome::Verified`], the matching [`OtpError`] otherwise.
    pub fn into_result(self) -> Result<(), OtpError> {
        match self {
            Self::Verified => Ok(()),
            Self::NoPending => Err(OtpError::NoPending),
            Self::Expired => Err(OtpError::Expired),
            Self::Mismatch => Err(OtpError::Mismatch),
        }
    }
}

/// Pending provisioning codes keyed by normalized username.
///
/// Cloning yields another handle to the same ledger. Nothing is persisted;
/// a restart forgets every pending code.
#[derive(Debug, Clone)]
pub struct OtpLedger {
    entries: Arc<DashMap<String, PendingOtp>>,
    window: Duration,
    clock: Arc<dyn Clock>,
}

impl OtpLedger {
    /// Create an empty ledger whose codes live for `window`.
    pub fn new(window: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            window,
            clock,
        }
    }

    /// Create an empty ledger from configuration.
    pub fn from_config(config: &OtpConfig, clock: Arc<dyn Clock>) -> Self {
        Self::new(Duration::seconds(config.expiration_seconds as i64), clock)
    }

    /// Issue a fresh code for `username`, replacing any pending one.
    pub fn issue(&self, username: &str) -> String {
        let code = rand::thread_rng()
            .gen_range(100_000..=999_999u32)
            .to_string();
        let pending = PendingOtp {
            code: code.clone(),
            issued_at: self.clock.now(),
        };
        let replaced = self.entries.insert(username.to_string(), pending).is_some();
        debug!(username = %username, replaced, "OTP issued");
        code
    }

    /// Check `supplied` against the pending code for `username`.
    ///
    /// The lookup and any removal happen under the entry's shard lock, so
    /// one code can be consumed at most once.
    pub fn verify(&self, username: &str, supplied: &str) -> OtpOutcome {
        let now = self.clock.now();
        match self.entries.entry(username.to_string()) {
            Entry::Vacant(_) => OtpOutcome::NoPending,
            Entry::Occupied(entry) => {
                if self.is_expired(entry.get(), now) {
                    entry.remove();
                    OtpOutcome::Expired
                } else if entry.get().code == supplied {
                    entry.remove();
                    OtpOutcome::Verified
                } else {
                    OtpOutcome::Mismatch
                }
            }
        }
    }

    /// Drop every expired entry. Returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now();
        let before = self.entries.len();
        self.entries.retain(|_, pending| !self.is_expired(pending, now));
        before.saturating_sub(self.entries.len())
    }

    /// Number of codes currently held.
    pub fn pending_count(&self) -> usize {
        self.entries.len()
    }

    fn is_expired(&self, pending: &PendingOtp, now: DateTime<Utc>) -> bool {
        now - pending.issued_at >= self.window
    }
}
