use crate::domain::{models::achievement::Achievement, ports::AchievementRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteAchievementRepo {
    pool: SqlitePool,
}

impl SqliteAchievementRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AchievementRepository for SqliteAchievementRepo {
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Achievement>, AppError> {
        sqlx::query_as::<_, Achievement>("SELECT * FROM achievements WHERE user_id = ? ORDER BY earned_at ASC")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
