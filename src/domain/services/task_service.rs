use std::sync::Arc;
use crate::domain::{
    models::{
        task::{NewTaskParams, Task, TaskFilter, TaskScope, TaskStatus},
        user::{Role, User},
    },
    ports::{ClubRepository, TaskRepository},
    services::policy::{authorize, Action},
};
use crate::error::AppError;
use tracing::info;

pub struct TaskService {
    clubs: Arc<dyn ClubRepository>,
    tasks: Arc<dyn TaskRepository>,
}

/// Coordinators see what they created or were given, students only what they were given.
pub fn scope_for(role: Role, user_id: &str) -> TaskScope {
    match role {
        Role::Coordinator => TaskScope::CreatedByOrAssignedTo(user_id.to_string()),
        Role::Student => TaskScope::AssignedTo(user_id.to_string()),
        Role::Treasurer | Role::Faculty | Role::Admin => TaskScope::All,
    }
}

impl TaskService {
    pub fn new(clubs: Arc<dyn ClubRepository>, tasks: Arc<dyn TaskRepository>) -> Self {
        Self { clubs, tasks }
    }

    pub async fn create(&self, actor: &User, params: NewTaskParams) -> Result<Task, AppError> {
        authorize(actor.role, Action::CreateTask)?;

        if params.title.trim().is_empty() {
            return Err(AppError::Validation("Task title must not be empty".into()));
        }
        self.clubs.find_by_id(&params.club_id).await?
            .ok_or(AppError::NotFound("Club not found".into()))?;

        let created = self.tasks.create(&Task::new(params)).await?;
        info!(task_id = %created.id, assigned_to = %created.assigned_to, "Task created");
        Ok(created)
    }

    /// Any status may follow any other; there is no transition graph.
    pub async fn update_status(&self, actor: &User, task_id: &str, status: TaskStatus) -> Result<Task, AppError> {
        authorize(actor.role, Action::UpdateTaskStatus)?;

        self.tasks.find_by_id(task_id).await?
            .ok_or(AppError::NotFound("Task not found".into()))?;

        let updated = self.tasks.update_status(task_id, status).await?;
        info!(task_id, status = ?updated.status, user_id = %actor.id, "Task status updated");
        Ok(updated)
    }

    pub async fn list(&self, actor: &User, club_id: Option<String>) -> Result<Vec<Task>, AppError> {
        let filter = TaskFilter {
            club_id,
            scope: scope_for(actor.role, &actor.id),
        };
        self.tasks.list(&filter).await
    }
}
