//! Domain failures raised by the auth subsystem.
//!
//! Both enums convert into [`AppError`] and travel as its `source`, so
//! callers that need the exact variant can downcast.

use thiserror::Error;

use newsroom_core::error::{AppError, ErrorKind};

/// Credential and session failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthFailure {
    /// No admin with the supplied username.
    #[error("Username not found")]
    UnknownUser,
    /// The password did not match the stored hash.
    #[error("Incorrect password")]
    BadCredentials,
    /// No session token, or one that failed verification.
    #[error("Unauthorized")]
    Unauthorized,
}

impl From<AuthFailure> for AppError {
    fn from(failure: AuthFailure) -> Self {
        let kind = match failure {
            AuthFailure::UnknownUser | AuthFailure::BadCredentials => ErrorKind::Authentication,
            AuthFailure::Unauthorized => ErrorKind::Unauthorized,
        };
        AppError::with_source(kind, failure.to_string(), failure)
    }
}

/// Reasons an OTP was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OtpError {
    /// Nothing pending for the username.
    #[error("No OTP found for this username")]
    NoPending,
    /// The pending code outlived its window and has been discarded.
    #[error("OTP has expired. Please request a new one.")]
    Expired,
    /// The supplied code differs from the pending one.
    #[error("Invalid OTP")]
    Mismatch,
}

impl From<OtpError> for AppError {
    fn from(err: OtpError) -> Self {
        AppError::with_source(ErrorKind::Otp, err.to_string(), err)
    }
}

/// Recover the [`OtpError`] carried by an [`AppError`], if any.
pub fn otp_error_of(err: &AppError) -> Option<OtpError> {
    err.source
        .as_deref()
        .and_then(|s| s.downcast_ref::<OtpError>())
        .copied()
}

/// Recover the [`AuthFailure`] carried by an [`AppError`], if any.
pub fn auth_failure_of(err: &AppError) -> Option<AuthFailure> {
    err.source
        .as_deref()
        .and_then(|s| s.downcast_ref::<AuthFailure>())
        .copied()
}
