//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum_extra::extract::cookie::Cookie;
use http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use newsroom_api::{AppState, build_app};
use newsroom_auth::PasswordHasher;
use newsroom_core::config::AppConfig;
use newsroom_core::result::AppResult;
use newsroom_core::traits::{ManualClock, Notifier, OutboundMessage};
use newsroom_database::{AdminStore, MemoryAdminStore};
use newsroom_entity::admin::{AdminAccount, CreateAdmin};

pub const OWNER: &str = "owner@example.com";
pub const NEW_ADMIN_PASSWORD: &str = "password1";

/// Notifier that keeps every message in memory.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<OutboundMessage>>,
}

impl RecordingNotifier {
    /// The six-digit code from the most recent message.
    pub fn last_code(&self) -> String {
        let sent = self.sent.lock().unwrap();
        let body = &sent.last().expect("no mail sent").body;
        let start = body.find("OTP: ").expect("no code in mail") + 5;
        body[start..start + 6].to_string()
    }

    pub fn count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, message: &OutboundMessage) -> AppResult<()> {
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// In-memory credential store behind the router
    pub store: Arc<MemoryAdminStore>,
    /// Owner mailbox
    pub notifier: Arc<RecordingNotifier>,
    /// Clock driving OTP and session expiry
    pub clock: Arc<ManualClock>,
    /// Cookies the "browser" currently holds
    cookies: Mutex<HashMap<String, String>>,
}

impl TestApp {
    /// Create a new test application with development settings
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    /// Create a test application from an explicit configuration
    pub fn with_config(config: AppConfig) -> Self {
        let store = Arc::new(MemoryAdminStore::new());
        let notifier = Arc::new(RecordingNotifier::default());
        let clock = Arc::new(ManualClock::starting_now());

        let state = AppState::new(config, store.clone(), notifier.clone(), clock.clone());

        Self {
            router: build_app(state),
            store,
            notifier,
            clock,
            cookies: Mutex::new(HashMap::new()),
        }
    }

    /// Insert an admin directly into the store
    pub async fn create_admin(&self, username: &str, password: &str) -> AdminAccount {
        let hash = PasswordHasher::new().hash_password(password).unwrap();
        self.store
            .create(&CreateAdmin::new(username, hash))
            .await
            .expect("Failed to create admin")
    }

    /// Log in through the API, storing the session cookie
    pub async fn login(&self, username: &str, password: &str) -> TestResponse {
        self.request(
            "POST",
            "/api/admin/login",
            Some(serde_json::json!({ "username": username, "password": password })),
        )
        .await
    }

    /// Value of a cookie currently held
    pub fn cookie(&self, name: &str) -> Option<String> {
        self.cookies.lock().unwrap().get(name).cloned()
    }

    /// Replace the held cookie, e.g. to replay an old token
    pub fn set_cookie(&self, name: &str, value: &str) {
        self.cookies
            .lock()
            .unwrap()
            .insert(name.to_string(), value.to_string());
    }

    /// Make a request, sending held cookies and applying any `Set-Cookie`
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");

        let cookie_header = {
            let cookies = self.cookies.lock().unwrap();
            cookies
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join("; ")
        };
        if !cookie_header.is_empty() {
            req = req.header(header::COOKIE, cookie_header);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let set_cookies: Vec<String> = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok().map(String::from))
            .collect();
        for raw in &set_cookies {
            self.apply_set_cookie(raw);
        }

        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            body,
            set_cookies,
        }
    }

    fn apply_set_cookie(&self, raw: &str) {
        let Ok(cookie) = Cookie::parse(raw) else {
            return;
        };
        let removal =
            cookie.value().is_empty() || cookie.max_age().is_some_and(|age| age.is_zero());

        let mut cookies = self.cookies.lock().unwrap();
        if removal {
            cookies.remove(cookie.name());
        } else {
            cookies.insert(cookie.name().to_string(), cookie.value().to_string());
        }
    }
}

/// Development configuration with a known owner mailbox
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.auth.jwt_secret = "integration-test-secret".to_string();
    config.mail.owner_address = OWNER.to_string();
    config
}

/// A test response
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
    /// Raw `Set-Cookie` headers
    pub set_cookies: Vec<String>,
}

impl TestResponse {
    /// The `Set-Cookie` header for `name`, if one was sent
    pub fn set_cookie(&self, name: &str) -> Option<&str> {
        let prefix = format!("{name}=");
        self.set_cookies
            .iter()
            .find(|c| c.starts_with(&prefix))
            .map(String::as_str)
    }
}
