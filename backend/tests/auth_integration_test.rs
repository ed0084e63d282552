//! Integration tests for authentication endpoints

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};
use snake_arena_backend::auth::JwtService;

#[tokio::test]
#[ignore = "requires database"]
async fn test_signup_success() {
    let app = common::TestApp::new().await;

    let email = common::unique_email();
    let body = json!({
        "email": email,
        "username": "snake_fan",
        "password": "secret1"
    });

    let (status, response) = app.post("/api/auth/signup", &body.to_string()).await;

    assert_eq!(status, StatusCode::CREATED);

    let response: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["user"]["email"], email.as_str());
    assert_eq!(response["user"]["username"], "snake_fan");
    assert!(response["user"].get("password_hash").is_none());
    assert!(!response["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_signup_then_login_token_names_email() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let body = json!({
        "email": user.email,
        "password": user.password
    });
    let (status, response) = app.post("/api/auth/login", &body.to_string()).await;

    assert_eq!(status, StatusCode::OK);

    let response: Value = serde_json::from_str(&response).unwrap();
    let token = response["token"].as_str().unwrap();
    let claims = app.state.jwt().validate(token).unwrap();
    assert_eq!(claims.sub, user.email);
    assert_eq!(response["user"]["username"], user.username.as_str());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_signup_duplicate_email_conflicts() {
    let app = common::TestApp::new().await;

    let email = common::unique_email();
    let first = json!({
        "email": email,
        "username": "first",
        "password": "password123"
    });
    let (status, _) = app.post("/api/auth/signup", &first.to_string()).await;
    assert_eq!(status, StatusCode::CREATED);

    // Different username and password, same email
    let second = json!({
        "email": email,
        "username": "second",
        "password": "another-password"
    });
    let (status, response) = app.post("/api/auth/signup", &second.to_string()).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let response: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"]["code"], "CONFLICT");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_signup_short_password_rejected() {
    let app = common::TestApp::new().await;

    let body = json!({
        "email": common::unique_email(),
        "username": "shorty",
        "password": "12345"
    });

    let (status, _) = app.post("/api/auth/signup", &body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_wrong_password() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let body = json!({
        "email": user.email,
        "password": "wrong-password"
    });
    let (status, _) = app.post("/api/auth/login", &body.to_string()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_nonexistent_user() {
    let app = common::TestApp::new().await;

    let body = json!({
        "email": common::unique_email(),
        "password": "password123"
    });

    let (status, _) = app.post("/api/auth/login", &body.to_string()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_me_returns_current_user() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let (status, response) = app.get_auth("/api/auth/me", &user.token).await;

    assert_eq!(status, StatusCode::OK);
    let response: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["email"], user.email.as_str());
    assert_eq!(response["username"], user.username.as_str());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_logout_acknowledges_and_token_stays_valid() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let (status, _) = app.post_auth("/api/auth/logout", "", &user.token).await;
    assert_eq!(status, StatusCode::OK);

    // No server-side session: the token works until it expires
    let (status, _) = app.get_auth("/api/auth/me", &user.token).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_valid_token_for_unknown_user_rejected() {
    let app = common::TestApp::new().await;

    // Correctly signed, but nobody has this email
    let token = app.state.jwt().issue(&common::unique_email()).unwrap();

    let (status, _) = app.get_auth("/api/auth/me", &token).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_expired_token_rejected() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let expired = JwtService::new(&app.state.config().jwt.secret, -60);
    let token = expired.issue(&user.email).unwrap();

    let (status, _) = app.get_auth("/api/auth/me", &token).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
