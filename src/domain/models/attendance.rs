use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use crate::domain::models::achievement::Achievement;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Attendance {
    pub id: String,
    pub event_id: String,
    pub user_id: String,
    pub checked_in_at: DateTime<Utc>,
}

impl Attendance {
    pub fn new(event_id: String, user_id: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            event_id,
            user_id,
            checked_in_at: Utc::now(),
        }
    }
}

/// A stored check-in with the user's attendance total at commit time and the
/// badge that total earned, if any.
#[derive(Debug, Serialize)]
pub struct CheckInOutcome {
    pub attendance: Attendance,
    pub total_attendance: i64,
    pub achievement: Option<Achievement>,
}
