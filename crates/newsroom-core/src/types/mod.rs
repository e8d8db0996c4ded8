//! Core type definitions used across the Newsroom workspace.

pub mod environment;
pub mod username;

pub use environment::Environment;
pub use username::normalize_username;
