//! Integration tests for owner-approved admin provisioning.

mod helpers;

use chrono::Duration;
use http::StatusCode;
use serde_json::json;

use helpers::{OWNER, NEW_ADMIN_PASSWORD, TestApp};
use newsroom_database::AdminStore;

fn create_body(username: &str, otp: Option<&str>) -> serde_json::Value {
    match otp {
        Some(code) => json!({ "username": username, "password": NEW_ADMIN_PASSWORD, "otp": code }),
        None => json!({ "username": username, "password": NEW_ADMIN_PASSWORD }),
    }
}

async fn request_code(app: &TestApp, username: &str) -> String {
    let response = app
        .request("POST", "/api/admin/create", Some(create_body(username, None)))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    app.notifier.last_code()
}

#[tokio::test]
async fn test_phase_one_mails_owner() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/api/admin/create", Some(create_body("NewEditor", None)))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["data"]["message"],
        "OTP sent to the Owner. Please verify with the OTP."
    );
    assert!(response.body["data"].get("admin").is_none());

    let sent = app.notifier.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, OWNER);
    assert_eq!(sent[0].subject, "New Admin Creation Request");
    assert!(sent[0].body.contains("neweditor"));
}

#[tokio::test]
async fn test_code_never_returned_to_requester() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/api/admin/create", Some(create_body("editor", None)))
        .await;
    let code = app.notifier.last_code();

    assert!(!response.body.to_string().contains(&code));
}

#[tokio::test]
async fn test_full_flow_then_login() {
    let app = TestApp::new();
    let code = request_code(&app, "editor").await;

    app.clock.advance(Duration::minutes(9) + Duration::seconds(59));
    let response = app
        .request("POST", "/api/admin/create", Some(create_body("Editor", Some(&code))))
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["message"], "Admin created successfully");
    assert_eq!(response.body["data"]["admin"]["username"], "editor");

    let again = app
        .request("POST", "/api/admin/create", Some(create_body("editor", Some(&code))))
        .await;
    assert_eq!(again.status, StatusCode::BAD_REQUEST);
    assert_eq!(again.body["message"], "No OTP found for this username");

    let login = app.login("editor", NEW_ADMIN_PASSWORD).await;
    assert_eq!(login.status, StatusCode::OK);
}

#[tokio::test]
async fn test_expired_code() {
    let app = TestApp::new();
    let code = request_code(&app, "editor").await;

    app.clock.advance(Duration::minutes(10) + Duration::seconds(1));
    let response = app
        .request("POST", "/api/admin/create", Some(create_body("editor", Some(&code))))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "OTP_REJECTED");
    assert_eq!(
        response.body["message"],
        "OTP has expired. Please request a new one."
    );
    assert_eq!(app.store.count().await.unwrap(), 0);

    let retry = app
        .request("POST", "/api/admin/create", Some(create_body("editor", Some(&code))))
        .await;
    assert_eq!(retry.body["message"], "No OTP found for this username");
}

#[tokio::test]
async fn test_wrong_code() {
    let app = TestApp::new();
    let code = request_code(&app, "editor").await;
    let wrong = if code == "100000" { "100001" } else { "100000" };

    let response = app
        .request("POST", "/api/admin/create", Some(create_body("editor", Some(wrong))))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Invalid OTP");

    let response = app
        .request("POST", "/api/admin/create", Some(create_body("editor", Some(&code))))
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_code_is_bound_to_username() {
    let app = TestApp::new();
    let code = request_code(&app, "alice").await;

    let response = app
        .request("POST", "/api/admin/create", Some(create_body("mallory", Some(&code))))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "No OTP found for this username");
}

#[tokio::test]
async fn test_existing_username_keeps_original_hash() {
    let app = TestApp::new();
    let original = app.create_admin("editor", "original-pass").await;
    let code = request_code(&app, "editor").await;

    let response = app
        .request("POST", "/api/admin/create", Some(create_body("editor", Some(&code))))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Username already exists");

    let kept = app.store.find_by_username("editor").await.unwrap().unwrap();
    assert_eq!(kept.password_hash, original.password_hash);
    assert_eq!(app.login("editor", "original-pass").await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_empty_password_rejected_before_code_is_consumed() {
    let app = TestApp::new();
    let code = request_code(&app, "editor").await;

    let response = app
        .request(
            "POST",
            "/api/admin/create",
            Some(json!({ "username": "editor", "password": "", "otp": code })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");

    let response = app
        .request("POST", "/api/admin/create", Some(create_body("editor", Some(&code))))
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_concurrent_confirmations_create_once() {
    let app = TestApp::new();
    let code = request_code(&app, "editor").await;

    let body = create_body("editor", Some(&code));
    let (a, b) = tokio::join!(
        app.request("POST", "/api/admin/create", Some(body.clone())),
        app.request("POST", "/api/admin/create", Some(body)),
    );

    let created = [&a, &b]
        .iter()
        .filter(|r| r.status == StatusCode::CREATED)
        .count();
    assert_eq!(created, 1);

    let loser = if a.status == StatusCode::CREATED { &b } else { &a };
    assert_eq!(loser.status, StatusCode::BAD_REQUEST);
    let message = loser.body["message"].as_str().unwrap();
    assert!(message == "No OTP found for this username" || message == "Username already exists");
    assert_eq!(app.store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_reissue_invalidates_first_code() {
    let app = TestApp::new();
    let first = request_code(&app, "editor").await;
    let second = request_code(&app, "editor").await;
    assert_eq!(app.notifier.count(), 2);

    if first != second {
        let response = app
            .request("POST", "/api/admin/create", Some(create_body("editor", Some(&first))))
            .await;
        assert_eq!(response.body["message"], "Invalid OTP");
    }

    let response = app
        .request("POST", "/api/admin/create", Some(create_body("editor", Some(&second))))
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
}
