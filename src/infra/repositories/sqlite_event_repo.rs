use crate::domain::{models::event::Event, ports::EventRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteEventRepo {
    pool: SqlitePool,
}

impl SqliteEventRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for SqliteEventRepo {
    async fn create(&self, event: &Event) -> Result<Event, AppError> {
        sqlx::query_as::<_, Event>(
            "INSERT INTO events (id, club_id, title, description, date, location, tags, qr_code, max_attendees, rsvp_count, attendance_count, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&event.id).bind(&event.club_id).bind(&event.title).bind(&event.description)
            .bind(event.date).bind(&event.location).bind(&event.tags).bind(&event.qr_code)
            .bind(event.max_attendees).bind(event.rsvp_count).bind(event.attendance_count).bind(event.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Event>, AppError> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, tag: Option<&str>) -> Result<Vec<Event>, AppError> {
        match tag {
            Some(tag) => sqlx::query_as::<_, Event>(
                "SELECT * FROM events WHERE EXISTS (SELECT 1 FROM json_each(events.tags) WHERE json_each.value = ?) ORDER BY date ASC"
            )
                .bind(tag)
                .fetch_all(&self.pool)
                .await
                .map_err(AppError::Database),
            None => sqlx::query_as::<_, Event>("SELECT * FROM events ORDER BY date ASC")
                .fetch_all(&self.pool)
                .await
                .map_err(AppError::Database),
        }
    }

    async fn list_by_club(&self, club_id: &str) -> Result<Vec<Event>, AppError> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE club_id = ? ORDER BY date ASC")
            .bind(club_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
