use crate::domain::{
    models::task::{Task, TaskFilter, TaskScope, TaskStatus},
    ports::TaskRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

pub struct SqliteTaskRepo {
    pool: SqlitePool,
}

impl SqliteTaskRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for SqliteTaskRepo {
    async fn create(&self, task: &Task) -> Result<Task, AppError> {
        sqlx::query_as::<_, Task>(
            "INSERT INTO tasks (id, club_id, title, description, assigned_to, deadline, status, created_by, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&task.id).bind(&task.club_id).bind(&task.title).bind(&task.description)
            .bind(&task.assigned_to).bind(task.deadline).bind(task.status).bind(&task.created_by)
            .bind(task.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Task>, AppError> {
        sqlx::query_as::<_, Task>("SELECT * FROM tasks WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update_status(&self, id: &str, status: TaskStatus) -> Result<Task, AppError> {
        sqlx::query_as::<_, Task>("UPDATE tasks SET status = ? WHERE id = ? RETURNING *")
            .bind(status)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or(AppError::NotFound("Task not found".into()))
    }

    async fn list(&self, filter: &TaskFilter) -> Result<Vec<Task>, AppError> {
        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT * FROM tasks WHERE 1 = 1");

        if let Some(club_id) = &filter.club_id {
            qb.push(" AND club_id = ").push_bind(club_id.clone());
        }

        match &filter.scope {
            TaskScope::All => {}
            TaskScope::AssignedTo(user_id) => {
                qb.push(" AND assigned_to = ").push_bind(user_id.clone());
            }
            TaskScope::CreatedByOrAssignedTo(user_id) => {
                qb.push(" AND (created_by = ").push_bind(user_id.clone())
                    .push(" OR assigned_to = ").push_bind(user_id.clone())
                    .push(")");
            }
        }

        qb.push(" ORDER BY deadline ASC");

        qb.build_query_as::<Task>()
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
