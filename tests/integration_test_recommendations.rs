mod common;

use axum::http::{Method, StatusCode};
use common::{FailingLlmService, MockLlmService, SlowLlmService, TestApp, TestUser};
use serde_json::{json, Value};
use std::sync::Arc;

async fn set_interests(app: &TestApp, user: &TestUser, interests: &[&str]) {
    let (status, _) = app.request(Method::PUT, "/api/users/interests", Some(&user.token), Some(json!(interests))).await;
    assert_eq!(status, StatusCode::OK);
}

/// Seeds two matching upcoming events, one non-matching and one past matching event.
async fn seed(app: &TestApp) -> TestUser {
    let admin = app.register("admin@campus.edu", "admin").await;
    let club_id = app.create_club(&admin, "Everything").await;
    app.create_event(&admin, &club_id, "Rust Workshop", &["Tech", "Workshop"], 2).await;
    app.create_event(&admin, &club_id, "Poetry Slam", &["Cultural"], 3).await;
    app.create_event(&admin, &club_id, "Robot Wars", &["Tech"], 4).await;
    app.create_event(&admin, &club_id, "Old Hackathon", &["Tech"], -2).await;

    let student = app.register("s@campus.edu", "student").await;
    set_interests(app, &student, &["Tech"]).await;
    student
}

fn titles(body: &Value) -> Vec<&str> {
    body["recommended_events"].as_array().unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_tag_match_without_llm() {
    let app = TestApp::new().await;
    let student = seed(&app).await;

    let (status, body) = app.request(Method::GET, "/api/recommendations", Some(&student.token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "tag_match");
    assert_eq!(titles(&body), vec!["Rust Workshop", "Robot Wars"]);
}

#[tokio::test]
async fn test_llm_titles_are_used_when_they_match() {
    let llm = Arc::new(MockLlmService { reply: "Poetry Slam\nNot A Real Event\n".to_string() });
    let app = TestApp::with_llm(Some(llm)).await;
    let student = seed(&app).await;

    let (status, body) = app.request(Method::GET, "/api/recommendations", Some(&student.token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "ai");
    assert_eq!(titles(&body), vec!["Poetry Slam"]);
}

#[tokio::test]
async fn test_past_titles_from_llm_are_ignored() {
    let llm = Arc::new(MockLlmService { reply: "Old Hackathon".to_string() });
    let app = TestApp::with_llm(Some(llm)).await;
    let student = seed(&app).await;

    let (_, body) = app.request(Method::GET, "/api/recommendations", Some(&student.token), None).await;
    assert_eq!(body["source"], "tag_match");
    assert_eq!(titles(&body), vec!["Rust Workshop", "Robot Wars"]);
}

#[tokio::test]
async fn test_llm_failure_falls_back() {
    let app = TestApp::with_llm(Some(Arc::new(FailingLlmService))).await;
    let student = seed(&app).await;

    let (status, body) = app.request(Method::GET, "/api/recommendations", Some(&student.token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "tag_match");
    assert_eq!(titles(&body), vec!["Rust Workshop", "Robot Wars"]);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_slow_llm_times_out_to_fallback() {
    let app = TestApp::with_llm(Some(Arc::new(SlowLlmService))).await;
    let student = seed(&app).await;

    let started = std::time::Instant::now();
    let (status, body) = app.request(Method::GET, "/api/recommendations", Some(&student.token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(started.elapsed() < std::time::Duration::from_secs(4));
    assert_eq!(body["source"], "tag_match");
    assert_eq!(titles(&body).len(), 2);
}

#[tokio::test]
async fn test_fallback_is_capped_at_five() {
    let app = TestApp::new().await;
    let admin = app.register("admin@campus.edu", "admin").await;
    let club_id = app.create_club(&admin, "Busy").await;
    for i in 0..7 {
        app.create_event(&admin, &club_id, &format!("Talk {}", i), &["Tech"], i + 1).await;
    }
    let student = app.register("s@campus.edu", "student").await;
    set_interests(&app, &student, &["Tech"]).await;

    let (_, body) = app.request(Method::GET, "/api/recommendations", Some(&student.token), None).await;
    assert_eq!(titles(&body), vec!["Talk 0", "Talk 1", "Talk 2", "Talk 3", "Talk 4"]);
}

#[tokio::test]
async fn test_no_upcoming_events() {
    let app = TestApp::with_llm(Some(Arc::new(MockLlmService { reply: "Anything".to_string() }))).await;
    let admin = app.register("admin@campus.edu", "admin").await;
    let club_id = app.create_club(&admin, "Retro").await;
    app.create_event(&admin, &club_id, "Last Year", &["Tech"], -30).await;

    let (status, body) = app.request(Method::GET, "/api/recommendations", Some(&admin.token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "No upcoming events");
    assert!(body["recommended_events"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_requires_authentication() {
    let app = TestApp::new().await;
    let (status, _) = app.request(Method::GET, "/api/recommendations", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
