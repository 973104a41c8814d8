use axum::{extract::{Path, State}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use crate::api::dtos::requests::CreateClubRequest;
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::club::NewClubParams;
use std::sync::Arc;

pub async fn list_clubs(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let clubs = state.club_repo.list().await?;
    Ok(Json(clubs))
}

pub async fn get_club(
    State(state): State<Arc<AppState>>,
    Path(club_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let club = state.club_repo.find_by_id(&club_id).await?
        .ok_or(AppError::NotFound("Club not found".into()))?;
    Ok(Json(club))
}

pub async fn create_club(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateClubRequest>,
) -> Result<impl IntoResponse, AppError> {
    let club = state.club_service.create(&user, NewClubParams {
        name: payload.name,
        description: payload.description,
        category: payload.category,
        coordinator_ids: payload.coordinator_ids,
        treasurer_ids: payload.treasurer_ids,
        faculty_mentor_ids: payload.faculty_mentor_ids,
    }).await?;

    Ok(Json(club))
}
