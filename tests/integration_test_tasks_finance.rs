mod common;

use axum::http::{Method, StatusCode};
use chrono::{Duration, Utc};
use common::{TestApp, TestUser};
use serde_json::{json, Value};

async fn create_task(app: &TestApp, creator: &TestUser, club_id: &str, assignee: &TestUser, title: &str) -> (StatusCode, Value) {
    app.request(Method::POST, "/api/tasks", Some(&creator.token), Some(json!({
        "club_id": club_id,
        "title": title,
        "description": "Needs doing",
        "assigned_to": assignee.id,
        "deadline": (Utc::now() + Duration::days(3)).to_rfc3339()
    }))).await
}

fn titles(body: &Value) -> Vec<String> {
    let mut out: Vec<String> = body.as_array().unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap().to_string())
        .collect();
    out.sort();
    out
}

#[tokio::test]
async fn test_task_listing_is_scoped_by_role() {
    let app = TestApp::new().await;
    let admin = app.register("admin@campus.edu", "admin").await;
    let coordinator = app.register("coord@campus.edu", "coordinator").await;
    let alice = app.register("alice@campus.edu", "student").await;
    let bob = app.register("bob@campus.edu", "student").await;
    let faculty = app.register("prof@campus.edu", "faculty").await;
    let club_id = app.create_club(&admin, "Press").await;

    let (status, body) = create_task(&app, &coordinator, &club_id, &alice, "Write article").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Task created");
    assert_eq!(body["task"]["status"], "pending");
    create_task(&app, &admin, &club_id, &bob, "Print flyers").await;
    create_task(&app, &admin, &club_id, &coordinator, "Book room").await;

    let (_, body) = app.request(Method::GET, "/api/tasks", Some(&alice.token), None).await;
    assert_eq!(titles(&body), vec!["Write article"]);

    let (_, body) = app.request(Method::GET, "/api/tasks", Some(&coordinator.token), None).await;
    assert_eq!(titles(&body), vec!["Book room", "Write article"]);

    let (_, body) = app.request(Method::GET, "/api/tasks", Some(&faculty.token), None).await;
    assert_eq!(body.as_array().unwrap().len(), 3);

    let (_, body) = app.request(Method::GET, "/api/tasks?club_id=other", Some(&admin.token), None).await;
    assert!(body.as_array().unwrap().is_empty());

    let (status, _) = create_task(&app, &alice, &club_id, &bob, "Sneaky").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = create_task(&app, &faculty, &club_id, &bob, "Sneaky").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_task_status_updates() {
    let app = TestApp::new().await;
    let admin = app.register("admin@campus.edu", "admin").await;
    let student = app.register("s@campus.edu", "student").await;
    let club_id = app.create_club(&admin, "Garden").await;
    let (_, body) = create_task(&app, &admin, &club_id, &student, "Water plants").await;
    let uri = format!("/api/tasks/{}", body["task"]["id"].as_str().unwrap());

    let (status, body) = app.request(Method::PUT, &uri, Some(&student.token), Some(json!({"status": "in-progress"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["task"]["status"], "in-progress");

    // No transition graph: completed may go back to pending.
    for next in ["completed", "pending"] {
        let (status, body) = app.request(Method::PUT, &uri, Some(&student.token), Some(json!({"status": next}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["task"]["status"], next);
    }

    let (status, body) = app.request(Method::PUT, &uri, Some(&student.token), Some(json!({"status": "archived"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("archived"));

    let (status, _) = app.request(Method::PUT, "/api/tasks/missing", Some(&student.token), Some(json!({"status": "completed"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_ledger_totals_and_permissions() {
    let app = TestApp::new().await;
    let admin = app.register("admin@campus.edu", "admin").await;
    let treasurer = app.register("money@campus.edu", "treasurer").await;
    let faculty = app.register("prof@campus.edu", "faculty").await;
    let student = app.register("s@campus.edu", "student").await;
    let club_id = app.create_club(&admin, "Finance Club").await;

    let ledger_uri = format!("/api/finances?club_id={}", club_id);

    let (status, body) = app.request(Method::GET, &ledger_uri, Some(&treasurer.token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["balance"], 0.0);
    assert!(body["transactions"].as_array().unwrap().is_empty());

    let entries = [("income", 500.0, "Sponsorship"), ("expense", 120.5, "Snacks"), ("expense", 79.5, "Posters")];
    for (kind, amount, category) in entries {
        let (status, body) = app.request(Method::POST, "/api/finances", Some(&treasurer.token), Some(json!({
            "club_id": club_id,
            "type": kind,
            "amount": amount,
            "category": category,
            "description": format!("{} entry", category)
        }))).await;
        assert_eq!(status, StatusCode::OK, "{}", body);
        assert_eq!(body["message"], "Transaction added");
        assert_eq!(body["transaction"]["type"], kind);
    }

    let (status, body) = app.request(Method::GET, &ledger_uri, Some(&faculty.token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["transactions"].as_array().unwrap().len(), 3);
    assert_eq!(body["income"], 500.0);
    assert_eq!(body["expense"], 200.0);
    assert_eq!(body["balance"], 300.0);

    let (status, _) = app.request(Method::GET, &ledger_uri, Some(&student.token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let spend = json!({
        "club_id": club_id,
        "type": "expense",
        "amount": 10.0,
        "category": "Misc",
        "description": "Unapproved"
    });
    for user in [&student, &faculty] {
        let (status, _) = app.request(Method::POST, "/api/finances", Some(&user.token), Some(spend.clone())).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    let (status, _) = app.request(Method::POST, "/api/finances", Some(&treasurer.token), Some(json!({
        "club_id": club_id,
        "type": "expense",
        "amount": -5.0,
        "category": "Refund",
        "description": "Negative"
    }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.request(Method::POST, "/api/finances", Some(&treasurer.token), Some(json!({
        "club_id": club_id,
        "type": "donation",
        "amount": 5.0,
        "category": "Gift",
        "description": "Unknown kind"
    }))).await;
    assert!(status.is_client_error());
}
