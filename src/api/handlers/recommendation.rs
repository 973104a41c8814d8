use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use crate::api::extractors::auth::AuthUser;
use chrono::Utc;
use std::sync::Arc;

pub async fn get_recommendations(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let recommendation = state.recommendation_service.recommend(&user, Utc::now()).await?;
    Ok(Json(recommendation))
}
