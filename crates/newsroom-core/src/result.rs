//! Convenience result type alias for Newsroom.

use crate::error::AppError;

/// A specialized `Result` type for Newsroom operations.
pub type AppResult<T> = Result<T, AppError>;
