#![allow(dead_code)]

use club_backend::{
    api::router::create_router,
    config::Config,
    domain::ports::LlmService,
    error::AppError,
    infra::factory::{assemble_state, run_sqlite_migrations},
    state::AppState,
};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use serde_json::{json, Value};
use sqlx::{sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration as StdDuration;
use tower::ServiceExt;
use uuid::Uuid;

/// Replies with a fixed text, e.g. a list of event titles.
pub struct MockLlmService {
    pub reply: String,
}

#[async_trait]
impl LlmService for MockLlmService {
    async fn generate(&self, _prompt: &str, _system_instruction: &str) -> Result<String, AppError> {
        Ok(self.reply.clone())
    }
}

pub struct FailingLlmService;

#[async_trait]
impl LlmService for FailingLlmService {
    async fn generate(&self, _prompt: &str, _system_instruction: &str) -> Result<String, AppError> {
        Err(AppError::InternalWithMsg("AI provider error: 503".to_string()))
    }
}

pub struct SlowLlmService;

#[async_trait]
impl LlmService for SlowLlmService {
    async fn generate(&self, _prompt: &str, _system_instruction: &str) -> Result<String, AppError> {
        tokio::time::sleep(StdDuration::from_secs(5)).await;
        Ok("never seen".to_string())
    }
}

pub struct TestUser {
    pub id: String,
    pub token: String,
}

pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_llm(None).await
    }

    pub async fn with_llm(llm_service: Option<Arc<dyn LlmService>>) -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(StdDuration::from_secs(10));

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        run_sqlite_migrations(&pool).await;

        let config = Config {
            database_url: db_url,
            port: 0,
            jwt_secret: "test-secret".to_string(),
            token_ttl_days: 7,
            gemini_api_key: None,
            ai_timeout: StdDuration::from_millis(300),
            cors_origins: vec!["*".to_string()],
        };

        let state = Arc::new(assemble_state(&config, pool.clone(), llm_service));
        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    pub async fn request(&self, method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let body = match body {
            Some(v) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };

        let response = self.router.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    pub async fn register(&self, email: &str, role: &str) -> TestUser {
        let (status, body) = self.request(Method::POST, "/api/auth/register", None, Some(json!({
            "email": email,
            "password": "correct horse",
            "name": email.split('@').next().unwrap_or("user"),
            "role": role
        }))).await;

        if status != StatusCode::OK {
            panic!("Registration failed in test helper: status {} body {}", status, body);
        }

        TestUser {
            id: body["user"]["id"].as_str().expect("No user id").to_string(),
            token: body["access_token"].as_str().expect("No access_token").to_string(),
        }
    }

    pub async fn create_club(&self, admin: &TestUser, name: &str) -> String {
        let (status, body) = self.request(Method::POST, "/api/clubs", Some(&admin.token), Some(json!({
            "name": name,
            "description": "A test club",
            "category": "Tech"
        }))).await;
        assert_eq!(status, StatusCode::OK, "club creation failed: {}", body);
        body["id"].as_str().unwrap().to_string()
    }

    /// Creates an event `days_ahead` days from now (negative for past events).
    pub async fn create_event(&self, creator: &TestUser, club_id: &str, title: &str, tags: &[&str], days_ahead: i64) -> Value {
        let (status, body) = self.request(Method::POST, "/api/events", Some(&creator.token), Some(json!({
            "club_id": club_id,
            "title": title,
            "description": format!("{} description", title),
            "date": (Utc::now() + Duration::days(days_ahead)).to_rfc3339(),
            "location": "Main Hall",
            "tags": tags,
            "max_attendees": null
        }))).await;
        assert_eq!(status, StatusCode::OK, "event creation failed: {}", body);
        body
    }

    pub async fn get_event(&self, event_id: &str) -> Value {
        let (status, body) = self.request(Method::GET, &format!("/api/events/{}", event_id), None, None).await;
        assert_eq!(status, StatusCode::OK);
        body
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
        let _ = std::fs::remove_file(format!("{}-wal", self.db_filename));
        let _ = std::fs::remove_file(format!("{}-shm", self.db_filename));
    }
}
