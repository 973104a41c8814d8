use crate::domain::{
    models::{achievement::Achievement, attendance::{Attendance, CheckInOutcome}},
    ports::{AttendanceRepository, AwardFn},
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteAttendanceRepo {
    pool: SqlitePool,
}

impl SqliteAttendanceRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AttendanceRepository for SqliteAttendanceRepo {
    async fn record_with_achievement(&self, attendance: &Attendance, award: &AwardFn<'_>) -> Result<CheckInOutcome, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let created = sqlx::query_as::<_, Attendance>(
            "INSERT INTO attendance (id, event_id, user_id, checked_in_at) VALUES (?, ?, ?, ?) RETURNING *"
        )
            .bind(&attendance.id).bind(&attendance.event_id).bind(&attendance.user_id).bind(attendance.checked_in_at)
            .fetch_one(&mut *tx).await
            .map_err(AppError::conflict_on_unique("Already checked in"))?;

        let result = sqlx::query("UPDATE events SET attendance_count = attendance_count + 1 WHERE id = ?")
            .bind(&attendance.event_id)
            .execute(&mut *tx).await.map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Event not found".into()));
        }

        // Counted under the write lock, so concurrent check-ins see distinct totals.
        let total_attendance: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM attendance WHERE user_id = ?")
            .bind(&attendance.user_id)
            .fetch_one(&mut *tx).await.map_err(AppError::Database)?;

        let achievement = match award(total_attendance) {
            Some(badge) => Some(
                sqlx::query_as::<_, Achievement>(
                    "INSERT INTO achievements (id, user_id, title, description, badge_type, earned_at) VALUES (?, ?, ?, ?, ?, ?) RETURNING *"
                )
                    .bind(&badge.id).bind(&badge.user_id).bind(&badge.title).bind(&badge.description)
                    .bind(badge.badge_type).bind(badge.earned_at)
                    .fetch_one(&mut *tx).await
                    .map_err(AppError::conflict_on_unique("Achievement already earned"))?
            ),
            None => None,
        };

        tx.commit().await.map_err(AppError::Database)?;
        Ok(CheckInOutcome { attendance: created, total_attendance, achievement })
    }

    async fn find(&self, event_id: &str, user_id: &str) -> Result<Option<Attendance>, AppError> {
        sqlx::query_as::<_, Attendance>("SELECT * FROM attendance WHERE event_id = ? AND user_id = ?")
            .bind(event_id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Attendance>, AppError> {
        sqlx::query_as::<_, Attendance>("SELECT * FROM attendance WHERE user_id = ? ORDER BY checked_in_at ASC")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
