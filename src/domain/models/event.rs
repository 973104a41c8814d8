use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::{types::Json, FromRow};

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Event {
    pub id: String,
    pub club_id: String,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub tags: Json<Vec<String>>,
    pub qr_code: String,
    pub max_attendees: Option<i64>,
    pub rsvp_count: i64,
    pub attendance_count: i64,
    pub created_at: DateTime<Utc>,
}

pub struct NewEventParams {
    pub club_id: String,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub tags: Vec<String>,
    pub max_attendees: Option<i64>,
}

impl Event {
    /// Builds an event with a fresh id. The QR code is attached afterwards,
    /// since its payload depends on the id.
    pub fn new(params: NewEventParams) -> Self {
        let mut tags: Vec<String> = Vec::with_capacity(params.tags.len());
        for tag in params.tags {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }

        Self {
            id: Uuid::new_v4().to_string(),
            club_id: params.club_id,
            title: params.title,
            description: params.description,
            date: params.date,
            location: params.location,
            tags: Json(tags),
            qr_code: String::new(),
            max_attendees: params.max_attendees,
            rsvp_count: 0,
            attendance_count: 0,
            created_at: Utc::now(),
        }
    }

    pub fn qr_payload(&self) -> String {
        format!("event:{}", self.id)
    }

    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.date > now
    }

    pub fn has_any_tag(&self, wanted: &[String]) -> bool {
        self.tags.iter().any(|t| wanted.contains(t))
    }
}
