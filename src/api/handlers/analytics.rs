use axum::{extract::{Path, State}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use crate::api::dtos::responses::{ClubAnalytics, StudentAnalytics};
use crate::api::extractors::auth::AuthUser;
use std::sync::Arc;

pub async fn student_analytics(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let attendance_history = state.attendance_repo.list_by_user(&user_id).await?;
    let achievements = state.achievement_repo.list_by_user(&user_id).await?;

    Ok(Json(StudentAnalytics {
        attendance_count: attendance_history.len(),
        achievements,
        attendance_history,
    }))
}

pub async fn club_analytics(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(club_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let events = state.event_repo.list_by_club(&club_id).await?;
    Ok(Json(ClubAnalytics::from_events(events)))
}
