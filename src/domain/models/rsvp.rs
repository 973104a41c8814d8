use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum RsvpStatus {
    Confirmed,
    Cancelled,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Rsvp {
    pub id: String,
    pub event_id: String,
    pub user_id: String,
    pub status: RsvpStatus,
    pub created_at: DateTime<Utc>,
}

impl Rsvp {
    pub fn confirmed(event_id: String, user_id: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            event_id,
            user_id,
            status: RsvpStatus::Confirmed,
            created_at: Utc::now(),
        }
    }
}
