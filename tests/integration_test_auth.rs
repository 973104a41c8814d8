mod common;

use axum::http::{Method, StatusCode};
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn test_register_login_and_me() {
    let app = TestApp::new().await;

    let (status, body) = app.request(Method::POST, "/api/auth/register", None, Some(json!({
        "email": "Ada@Campus.edu",
        "password": "s3cret",
        "name": "Ada",
        "role": "student"
    }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token_type"], "bearer");
    assert_eq!(body["user"]["email"], "ada@campus.edu");
    assert_eq!(body["user"]["role"], "student");
    assert_eq!(body["user"]["interests"], json!([]));
    assert!(body["user"].get("password_hash").is_none(), "password digest must never be returned");
    let user_id = body["user"]["id"].as_str().unwrap().to_string();

    let (status, body) = app.request(Method::POST, "/api/auth/login", None, Some(json!({
        "email": "ada@campus.edu",
        "password": "s3cret"
    }))).await;
    assert_eq!(status, StatusCode::OK);
    let token = body["access_token"].as_str().unwrap().to_string();

    let (status, me) = app.request(Method::GET, "/api/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["id"], user_id.as_str());
    assert_eq!(me["name"], "Ada");
}

#[tokio::test]
async fn test_duplicate_email_is_conflict() {
    let app = TestApp::new().await;
    app.register("dup@campus.edu", "student").await;

    let (status, body) = app.request(Method::POST, "/api/auth/register", None, Some(json!({
        "email": "dup@campus.edu",
        "password": "other",
        "name": "Someone Else",
        "role": "admin"
    }))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Email already registered");
}

#[tokio::test]
async fn test_bad_credentials_are_indistinguishable() {
    let app = TestApp::new().await;
    app.register("known@campus.edu", "student").await;

    let (wrong_pw_status, wrong_pw_body) = app.request(Method::POST, "/api/auth/login", None, Some(json!({
        "email": "known@campus.edu",
        "password": "wrong"
    }))).await;
    let (unknown_status, unknown_body) = app.request(Method::POST, "/api/auth/login", None, Some(json!({
        "email": "nobody@campus.edu",
        "password": "wrong"
    }))).await;

    assert_eq!(wrong_pw_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_pw_body, unknown_body);
}

#[tokio::test]
async fn test_protected_routes_require_valid_bearer() {
    let app = TestApp::new().await;

    let (status, _) = app.request(Method::GET, "/api/auth/me", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app.request(Method::GET, "/api/auth/me", Some("not.a.jwt"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app.request(Method::GET, "/api/events", Some("garbage"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_for_vanished_user_is_not_found() {
    let app = TestApp::new().await;
    let user = app.register("ghost@campus.edu", "student").await;

    sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(&user.id)
        .execute(&app.pool)
        .await
        .unwrap();

    let (status, _) = app.request(Method::GET, "/api/auth/me", Some(&user.token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_role_is_rejected() {
    let app = TestApp::new().await;

    let (status, _) = app.request(Method::POST, "/api/auth/register", None, Some(json!({
        "email": "root@campus.edu",
        "password": "pw",
        "name": "Root",
        "role": "superuser"
    }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_profile_and_interests_update() {
    let app = TestApp::new().await;
    let user = app.register("pat@campus.edu", "student").await;

    let (status, body) = app.request(Method::PUT, "/api/users/profile", Some(&user.token), Some(json!({
        "name": "Pat Renamed"
    }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Pat Renamed");

    let (status, body) = app.request(Method::PUT, "/api/users/interests", Some(&user.token), Some(json!([
        "Tech", " Music ", "Tech", ""
    ]))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["interests"], json!(["Tech", "Music"]));

    let (_, me) = app.request(Method::GET, "/api/auth/me", Some(&user.token), None).await;
    assert_eq!(me["interests"], json!(["Tech", "Music"]));
    assert_eq!(me["name"], "Pat Renamed");
}
