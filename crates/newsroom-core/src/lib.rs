//! # newsroom-core
//!
//! Core crate for the Newsroom backend. Contains the configuration schema,
//! the unified error system, the collaborator traits (notifier and
//! clock) and small shared types such as username normalization.
//!
//! This crate has **no** internal dependencies on other Newsroom crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
