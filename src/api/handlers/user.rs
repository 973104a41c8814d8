use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use crate::api::dtos::requests::UpdateProfileRequest;
use crate::api::extractors::auth::AuthUser;
use std::sync::Arc;
use tracing::info;

pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<impl IntoResponse, AppError> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Name must not be empty".into()));
    }

    let updated = state.user_repo.update_name(&user.id, name).await?;
    info!(user_id = %user.id, "Profile updated");
    Ok(Json(updated))
}

pub async fn update_interests(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(interests): Json<Vec<String>>,
) -> Result<impl IntoResponse, AppError> {
    let mut cleaned: Vec<String> = Vec::with_capacity(interests.len());
    for tag in interests.into_iter().map(|t| t.trim().to_string()).filter(|t| !t.is_empty()) {
        if !cleaned.contains(&tag) {
            cleaned.push(tag);
        }
    }

    let updated = state.user_repo.update_interests(&user.id, &cleaned).await?;
    info!(user_id = %user.id, count = cleaned.len(), "Interests updated");
    Ok(Json(updated))
}
