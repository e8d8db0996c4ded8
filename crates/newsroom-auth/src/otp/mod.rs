//! Provisioning one-time passwords.

pub mod ledger;
pub mod sweeper;

pub use ledger::{OtpLedger, OtpOutcome, PendingOtp};
pub use sweeper::OtpSweeper;
