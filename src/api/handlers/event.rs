use axum::{extract::{Path, Query, State}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use crate::api::dtos::requests::{CreateEventRequest, EventListQuery};
use crate::api::dtos::responses::MessageResponse;
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::event::NewEventParams;
use std::sync::Arc;
use serde_json::json;

pub async fn list_events(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Query(query): Query<EventListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let tag = query.tag.as_deref().filter(|t| !t.is_empty());
    let events = state.event_repo.list(tag).await?;
    Ok(Json(events))
}

pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let event = state.event_repo.find_by_id(&event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;
    Ok(Json(event))
}

pub async fn create_event(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    let event = state.event_lifecycle.create_event(&user, NewEventParams {
        club_id: payload.club_id,
        title: payload.title,
        description: payload.description,
        date: payload.date,
        location: payload.location,
        tags: payload.tags,
        max_attendees: payload.max_attendees,
    }).await?;

    Ok(Json(event))
}

pub async fn rsvp(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let rsvp = state.event_lifecycle.rsvp(&event_id, &user).await?;
    Ok(Json(json!({
        "message": "RSVP successful",
        "rsvp": rsvp
    })))
}

pub async fn cancel_rsvp(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.event_lifecycle.cancel_rsvp(&event_id, &user).await?;
    Ok(Json(MessageResponse::new("RSVP cancelled")))
}

pub async fn check_in(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let outcome = state.event_lifecycle.check_in(&event_id, &user).await?;
    Ok(Json(json!({
        "message": "Checked in successfully",
        "attendance": outcome.attendance,
        "total_attendance": outcome.total_attendance,
        "achievement": outcome.achievement
    })))
}
