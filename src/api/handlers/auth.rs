use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use crate::api::dtos::requests::{LoginRequest, RegisterRequest};
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::{auth::AuthResponse, user::Role};
use std::sync::Arc;

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    let role: Role = payload.role.parse().map_err(AppError::Validation)?;

    let (user, token) = state.auth_service
        .register(&payload.email, &payload.password, &payload.name, role)
        .await?;

    Ok(Json(AuthResponse::bearer(token, user)))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (user, token) = state.auth_service.login(&payload.email, &payload.password).await?;
    Ok(Json(AuthResponse::bearer(token, user)))
}

pub async fn me(AuthUser(user): AuthUser) -> impl IntoResponse {
    Json(user)
}
