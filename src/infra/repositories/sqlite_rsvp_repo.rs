use crate::domain::{models::rsvp::Rsvp, ports::RsvpRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteRsvpRepo {
    pool: SqlitePool,
}

impl SqliteRsvpRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RsvpRepository for SqliteRsvpRepo {
    async fn confirm(&self, rsvp: &Rsvp) -> Result<Rsvp, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let created = sqlx::query_as::<_, Rsvp>(
            "INSERT INTO rsvps (id, event_id, user_id, status, created_at) VALUES (?, ?, ?, ?, ?) RETURNING *"
        )
            .bind(&rsvp.id).bind(&rsvp.event_id).bind(&rsvp.user_id).bind(rsvp.status).bind(rsvp.created_at)
            .fetch_one(&mut *tx).await
            .map_err(AppError::conflict_on_unique("Already RSVP'd"))?;

        // Capacity check and increment in one statement so concurrent RSVPs cannot overshoot.
        let result = sqlx::query(
            "UPDATE events SET rsvp_count = rsvp_count + 1
             WHERE id = ? AND (max_attendees IS NULL OR rsvp_count < max_attendees)"
        )
            .bind(&rsvp.event_id)
            .execute(&mut *tx).await.map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            let exists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM events WHERE id = ?")
                .bind(&rsvp.event_id)
                .fetch_one(&mut *tx).await.map_err(AppError::Database)?;
            return if exists == 0 {
                Err(AppError::NotFound("Event not found".into()))
            } else {
                Err(AppError::Conflict("Event is full".into()))
            };
        }

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }

    async fn find_active(&self, event_id: &str, user_id: &str) -> Result<Option<Rsvp>, AppError> {
        sqlx::query_as::<_, Rsvp>("SELECT * FROM rsvps WHERE event_id = ? AND user_id = ? AND status = 'confirmed'")
            .bind(event_id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn cancel(&self, event_id: &str, user_id: &str) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let deleted = sqlx::query("DELETE FROM rsvps WHERE event_id = ? AND user_id = ? AND status = 'confirmed'")
            .bind(event_id)
            .bind(user_id)
            .execute(&mut *tx).await.map_err(AppError::Database)?;

        if deleted.rows_affected() == 0 {
            return Ok(false);
        }

        sqlx::query("UPDATE events SET rsvp_count = MAX(rsvp_count - 1, 0) WHERE id = ?")
            .bind(event_id)
            .execute(&mut *tx).await.map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(true)
    }
}
