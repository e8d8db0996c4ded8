//! Background removal of expired provisioning codes.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use super::ledger::OtpLedger;

/// Periodically purges expired entries from an [`OtpLedger`].
#[derive(Debug, Clone)]
pub struct OtpSweeper {
    ledger: OtpLedger,
    interval: Duration,
}

impl OtpSweeper {
    /// Create a sweeper that runs every `interval`.
    pub fn new(ledger: OtpLedger, interval: Duration) -> Self {
        Self { ledger, interval }
    }

    /// Run until `cancel` flips to `true` or its sender is dropped.
    pub async fn run(&self, mut cancel: watch::Receiver<bool>) {
        tracing::info!(
            interval_secs = self.interval.as_secs(),
            "OTP sweeper started"
        );

        let mut interval = time::interval(self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    let purged = self.ledger.purge_expired();
                    if purged > 0 {
                        tracing::debug!(
                            purged,
                            remaining = self.ledger.pending_count(),
                            "Expired OTPs purged"
                        );
                    }
                }
                changed = cancel.changed() => {
                    if changed.is_err() || *cancel.borrow() {
                        tracing::info!("OTP sweeper shutting down");
                        break;
                    }
                }
            }
        }
    }

    /// Spawn [`run`](Self::run) onto the current runtime.
    pub fn spawn(self, cancel: watch::Receiver<bool>) -> JoinHandle<()> {
        tokio::spawn(async move { self.run(cancel).await })
    }
}
