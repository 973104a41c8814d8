use axum::{extract::{Path, Query, State}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use crate::api::dtos::requests::{CreateTaskRequest, TaskListQuery, UpdateTaskRequest};
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::task::{NewTaskParams, TaskStatus};
use std::sync::Arc;
use serde_json::json;

pub async fn list_tasks(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Query(query): Query<TaskListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let tasks = state.task_service.list(&user, query.club_id.filter(|c| !c.is_empty())).await?;
    Ok(Json(tasks))
}

pub async fn create_task(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateTaskRequest>,
) -> Result<impl IntoResponse, AppError> {
    let task = state.task_service.create(&user, NewTaskParams {
        club_id: payload.club_id,
        title: payload.title,
        description: payload.description,
        assigned_to: payload.assigned_to,
        deadline: payload.deadline,
        created_by: user.id.clone(),
    }).await?;

    Ok(Json(json!({
        "message": "Task created",
        "task": task
    })))
}

pub async fn update_task(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(task_id): Path<String>,
    Json(payload): Json<UpdateTaskRequest>,
) -> Result<impl IntoResponse, AppError> {
    let status = parse_status(&payload.status)?;
    let task = state.task_service.update_status(&user, &task_id, status).await?;

    Ok(Json(json!({
        "message": "Task updated",
        "task": task
    })))
}

fn parse_status(raw: &str) -> Result<TaskStatus, AppError> {
    serde_json::from_value(serde_json::Value::String(raw.to_string()))
        .map_err(|_| AppError::Validation(format!(
            "Unknown task status '{}' (expected pending, in-progress or completed)", raw
        )))
}
