use crate::domain::{models::club::Club, ports::ClubRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteClubRepo {
    pool: SqlitePool,
}

impl SqliteClubRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClubRepository for SqliteClubRepo {
    async fn create(&self, club: &Club) -> Result<Club, AppError> {
        sqlx::query_as::<_, Club>(
            "INSERT INTO clubs (id, name, description, category, coordinator_ids, treasurer_ids, faculty_mentor_ids, member_count, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&club.id)
            .bind(&club.name)
            .bind(&club.description)
            .bind(&club.category)
            .bind(&club.coordinator_ids)
            .bind(&club.treasurer_ids)
            .bind(&club.faculty_mentor_ids)
            .bind(club.member_count)
            .bind(club.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Club>, AppError> {
        sqlx::query_as::<_, Club>("SELECT * FROM clubs WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Club>, AppError> {
        sqlx::query_as::<_, Club>("SELECT * FROM clubs ORDER BY created_at ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
