use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
#[sqlx(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Task {
    pub id: String,
    pub club_id: String,
    pub title: String,
    pub description: String,
    pub assigned_to: String,
    pub deadline: DateTime<Utc>,
    pub status: TaskStatus,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

pub struct NewTaskParams {
    pub club_id: String,
    pub title: String,
    pub description: String,
    pub assigned_to: String,
    pub deadline: DateTime<Utc>,
    pub created_by: String,
}

impl Task {
    pub fn new(params: NewTaskParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            club_id: params.club_id,
            title: params.title,
            description: params.description,
            assigned_to: params.assigned_to,
            deadline: params.deadline,
            status: TaskStatus::Pending,
            created_by: params.created_by,
            created_at: Utc::now(),
        }
    }
}

/// Which tasks a listing is allowed to see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskScope {
    All,
    AssignedTo(String),
    CreatedByOrAssignedTo(String),
}

#[derive(Debug, Clone)]
pub struct TaskFilter {
    pub club_id: Option<String>,
    pub scope: TaskScope,
}
