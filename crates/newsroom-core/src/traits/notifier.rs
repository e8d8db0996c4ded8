//! Outbound notification trait.

use async_trait::async_trait;

use crate::result::AppResult;

/// A single message handed to a [`Notifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
}

impl OutboundMessage {
    /// Build a message.
    pub fn new(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }
}

/// Delivers messages through some mail transport.
///
/// Implementations must fail with [`ErrorKind::Delivery`](crate::error::ErrorKind::Delivery)
/// rather than block indefinitely; failed deliveries are not retried.
#[async_trait]
pub trait Notifier: Send + Sync + std::fmt::Debug + 'static {
    /// Send one message.
    async fn send(&self, message: &OutboundMessage) -> AppResult<()>;
}
