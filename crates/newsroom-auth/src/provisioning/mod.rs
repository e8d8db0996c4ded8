//! Owner-approved admin creation.

pub mod workflow;

pub use workflow::{ProvisionOutcome, ProvisionRequest, ProvisioningWorkflow};
