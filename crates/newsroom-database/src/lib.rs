//! # newsroom-database
//!
//! PostgreSQL connection management and the credential store used by the
//! admin authentication subsystem. The [`AdminStore`] trait is the only
//! surface the auth crate sees; [`AdminRepository`] backs it with
//! PostgreSQL and [`MemoryAdminStore`] keeps accounts in process memory.

pub mod connection;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use repositories::{AdminRepository, MemoryAdminStore};
pub use store::AdminStore;
