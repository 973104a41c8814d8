use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::{types::Json, FromRow};

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Club {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub coordinator_ids: Json<Vec<String>>,
    pub treasurer_ids: Json<Vec<String>>,
    pub faculty_mentor_ids: Json<Vec<String>>,
    pub member_count: i64,
    pub created_at: DateTime<Utc>,
}

pub struct NewClubParams {
    pub name: String,
    pub description: String,
    pub category: String,
    pub coordinator_ids: Vec<String>,
    pub treasurer_ids: Vec<String>,
    pub faculty_mentor_ids: Vec<String>,
}

/// Keeps the first occurrence of each id; the id lists behave as sets.
fn dedup(ids: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(ids.len());
    for id in ids {
        if !out.contains(&id) {
            out.push(id);
        }
    }
    out
}

impl Club {
    pub fn new(params: NewClubParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: params.name,
            description: params.description,
            category: params.category,
            coordinator_ids: Json(dedup(params.coordinator_ids)),
            treasurer_ids: Json(dedup(params.treasurer_ids)),
            faculty_mentor_ids: Json(dedup(params.faculty_mentor_ids)),
            member_count: 0,
            created_at: Utc::now(),
        }
    }
}
