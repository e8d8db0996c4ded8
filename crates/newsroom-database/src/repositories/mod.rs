//! Credential store implementations.

pub mod admin;
pub mod memory;

pub use admin::AdminRepository;
pub use memory::MemoryAdminStore;
