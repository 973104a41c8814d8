use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum BadgeType {
    Bronze,
    Silver,
    Gold,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Achievement {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub badge_type: BadgeType,
    pub earned_at: DateTime<Utc>,
}

impl Achievement {
    pub fn new(user_id: String, title: &str, description: &str, badge_type: BadgeType) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            title: title.to_string(),
            description: description.to_string(),
            badge_type,
            earned_at: Utc::now(),
        }
    }
}
