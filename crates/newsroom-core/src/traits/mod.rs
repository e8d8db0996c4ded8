//! Collaborator traits defined in `newsroom-core` and implemented by other crates.

pub mod clock;
pub mod notifier;

pub use clock::{Clock, ManualClock, SystemClock};
pub use notifier::{Notifier, OutboundMessage};
