//! # newsroom-notify
//!
//! Mail transports implementing [`Notifier`](newsroom_core::traits::Notifier).
//! Only the provisioning workflow sends mail, and only to the owner.

pub mod http;
pub mod log;

use std::sync::Arc;

use newsroom_core::config::{MailConfig, MailTransport};
use newsroom_core::result::AppResult;
use newsroom_core::traits::Notifier;

pub use http::HttpMailNotifier;
pub use log::LogNotifier;

/// Build the notifier selected by `mail.transport`.
pub fn build_notifier(config: &MailConfig) -> AppResult<Arc<dyn Notifier>> {
    match config.transport {
        MailTransport::Log => Ok(Arc::new(LogNotifier::new())),
        MailTransport::Http => Ok(Arc::new(HttpMailNotifier::from_config(config)?)),
    }
}
