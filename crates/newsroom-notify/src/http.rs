//! Transport that posts messages to an HTTP mail API.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, error};

use newsroom_core::config::MailConfig;
use newsroom_core::error::{AppError, ErrorKind};
use newsroom_core::result::AppResult;
use newsroom_core::traits::{Notifier, OutboundMessage};

/// JSON body accepted by the mail API.
#[derive(Debug, Serialize)]
struct MailPayload<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}

/// Sends mail through a JSON HTTP API with bearer authentication.
#[derive(Debug, Clone)]
pub struct HttpMailNotifier {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    from_address: String,
}

impl HttpMailNotifier {
    /// Create a notifier posting to `endpoint`.
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        from_address: impl Into<String>,
        timeout: Duration,
    ) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    "Failed to build mail HTTP client",
                    e,
                )
            })?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key,
            from_address: from_address.into(),
        })
    }

    /// Create a notifier from the `mail` configuration section.
    pub fn from_config(config: &MailConfig) -> AppResult<Self> {
        let endpoint = config.endpoint.clone().ok_or_else(|| {
            AppError::configuration("mail.endpoint is required for the http transport")
        })?;
        Self::new(
            endpoint,
            config.api_key.clone(),
            config.from_address.clone(),
            Duration::from_secs(config.timeout_seconds),
        )
    }
}

#[async_trait]
impl Notifier for HttpMailNotifier {
    async fn send(&self, message: &OutboundMessage) -> AppResult<()> {
        let payload = MailPayload {
            from: &self.from_address,
            to: &message.to,
            subject: &message.subject,
            text: &message.body,
        };

        let mut request = self.client.post(&self.endpoint).json(&payload);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|e| {
            error!(error = %e, "Mail API request failed");
            AppError::with_source(ErrorKind::Delivery, "Failed to send email", e)
        })?;

        let status = response.status();
        if !status.is_success() {
            error!(status = %status, "Mail API rejected message");
            return Err(AppError::delivery(format!(
                "Failed to send email: mail API responded {status}"
            )));
        }

        debug!(to = %message.to, "Mail accepted by API");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn message() -> OutboundMessage {
        OutboundMessage::new("owner@example.com", "New Admin Creation Request", "code 123456")
    }

    fn notifier(server: &MockServer, timeout: Duration) -> HttpMailNotifier {
        HttpMailNotifier::new(
            format!("{}/send", server.uri()),
            Some("key-1".to_string()),
            "noreply@example.com",
            timeout,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_posts_json_with_bearer() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/send"))
            .and(header("authorization", "Bearer key-1"))
            .and(body_json(json!({
                "from": "noreply@example.com",
                "to": "owner@example.com",
                "subject": "New Admin Creation Request",
                "text": "code 123456"
            })))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&server)
            .await;

        notifier(&server, Duration::from_secs(5))
            .send(&message())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_error_status_is_delivery_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = notifier(&server, Duration::from_secs(5))
            .send(&message())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Delivery);
    }

    #[tokio::test]
    async fn test_slow_api_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let err = notifier(&server, Duration::from_millis(200))
            .send(&message())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Delivery);
    }
}
