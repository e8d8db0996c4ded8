//! # newsroom-auth
//!
//! Admin identity and session trust for the Newsroom backend.
//!
//! ## Modules
//!
//! - `jwt`: session token minting and verification
//! - `password`: Argon2id password hashing
//! - `otp`: in-memory one-time password ledger and its expiry sweeper
//! - `session`: credential check and session issuance
//! - `provisioning`: owner-approved admin creation

pub mod error;
pub mod jwt;
pub mod otp;
pub mod password;
pub mod provisioning;
pub mod session;

pub use error::{AuthFailure, OtpError};
pub use jwt::{JwtDecoder, JwtEncoder, SessionClaims};
pub use otp::{OtpLedger, OtpOutcome, OtpSweeper};
pub use password::PasswordHasher;
pub use provisioning::{ProvisionOutcome, ProvisionRequest, ProvisioningWorkflow};
pub use session::{IssuedSession, SessionIssuer};
