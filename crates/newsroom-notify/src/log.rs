//! Transport that writes messages to the log instead of sending them.

use async_trait::async_trait;
use tracing::info;

use newsroom_core::result::AppResult;
use newsroom_core::traits::{Notifier, OutboundMessage};

/// Local development notifier.
///
/// Only the recipient, subject and body length are logged. The body carries
/// the approval code and never reaches the log. Production configuration
/// refuses this transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl LogNotifier {
    /// Create a log notifier.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, message: &OutboundMessage) -> AppResult<()> {
        info!(
            to = %message.to,
            subject = %message.subject,
            body_len = message.body.len(),
            "Mail transport stub"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_always_succeeds() {
        let message = OutboundMessage::new("owner@example.com", "subject", "body");
        assert!(LogNotifier::new().send(&message).await.is_ok());
    }

    #[tokio::test]
    async fn test_body_is_never_logged() {
        let captured = CapturedLog::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let message = OutboundMessage::new(
            "owner@example.com",
            "New Admin Creation Request",
            "Please use the OTP: 482913 to verify the request.",
        );
        LogNotifier::new().send(&message).await.unwrap();

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("owner@example.com"));
        assert!(output.contains("New Admin Creation Request"));
        assert!(!output.contains("482913"));
    }
}
