use crate::domain::models::transaction::TransactionKind;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct UpdateProfileRequest {
    pub name: String,
}

#[derive(Deserialize)]
pub struct CreateClubRequest {
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub coordinator_ids: Vec<String>,
    #[serde(default)]
    pub treasurer_ids: Vec<String>,
    #[serde(default)]
    pub faculty_mentor_ids: Vec<String>,
}

#[derive(Deserialize)]
pub struct CreateEventRequest {
    pub club_id: String,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub max_attendees: Option<i64>,
}

#[derive(Deserialize)]
pub struct EventListQuery {
    pub tag: Option<String>,
}

#[derive(Deserialize)]
pub struct TaskListQuery {
    pub club_id: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateTaskRequest {
    pub club_id: String,
    pub title: String,
    pub description: String,
    pub assigned_to: String,
    pub deadline: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct UpdateTaskRequest {
    pub status: String,
}

#[derive(Deserialize)]
pub struct LedgerQuery {
    pub club_id: String,
}

#[derive(Deserialize)]
pub struct CreateTransactionRequest {
    pub club_id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub category: String,
    pub description: String,
    pub receipt_url: Option<String>,
}
