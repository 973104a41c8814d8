use std::sync::Arc;
use crate::domain::{
    models::{
        attendance::{Attendance, CheckInOutcome},
        event::{Event, NewEventParams}, rsvp::Rsvp, user::User,
    },
    ports::{AttendanceRepository, ClubRepository, EventRepository, QrRenderer, RsvpRepository},
    services::{achievement_engine::award_for, policy::{authorize, Action}},
};
use crate::error::AppError;
use tracing::info;

pub struct EventLifecycle {
    clubs: Arc<dyn ClubRepository>,
    events: Arc<dyn EventRepository>,
    rsvps: Arc<dyn RsvpRepository>,
    attendance: Arc<dyn AttendanceRepository>,
    qr: Arc<dyn QrRenderer>,
}

impl EventLifecycle {
    pub fn new(
        clubs: Arc<dyn ClubRepository>,
        events: Arc<dyn EventRepository>,
        rsvps: Arc<dyn RsvpRepository>,
        attendance: Arc<dyn AttendanceRepository>,
        qr: Arc<dyn QrRenderer>,
    ) -> Self {
        Self { clubs, events, rsvps, attendance, qr }
    }

    pub async fn create_event(&self, actor: &User, params: NewEventParams) -> Result<Event, AppError> {
        authorize(actor.role, Action::CreateEvent)?;

        if params.title.trim().is_empty() {
            return Err(AppError::Validation("Event title must not be empty".into()));
        }
        if matches!(params.max_attendees, Some(n) if n < 0) {
            return Err(AppError::Validation("max_attendees must not be negative".into()));
        }
        self.clubs.find_by_id(&params.club_id).await?
            .ok_or(AppError::NotFound("Club not found".into()))?;

        let mut event = Event::new(params);
        event.qr_code = self.qr.render(&event.qr_payload())?;

        let created = self.events.create(&event).await?;
        info!(event_id = %created.id, club_id = %created.club_id, "Event created");
        Ok(created)
    }

    pub async fn rsvp(&self, event_id: &str, user: &User) -> Result<Rsvp, AppError> {
        authorize(user.role, Action::Rsvp)?;

        self.events.find_by_id(event_id).await?
            .ok_or(AppError::NotFound("Event not found".into()))?;

        if self.rsvps.find_active(event_id, &user.id).await?.is_some() {
            return Err(AppError::Conflict("Already RSVP'd".into()));
        }

        let rsvp = self.rsvps.confirm(&Rsvp::confirmed(event_id.to_string(), user.id.clone())).await?;
        info!(event_id, user_id = %user.id, "RSVP confirmed");
        Ok(rsvp)
    }

    pub async fn cancel_rsvp(&self, event_id: &str, user: &User) -> Result<(), AppError> {
        authorize(user.role, Action::CancelRsvp)?;

        if !self.rsvps.cancel(event_id, &user.id).await? {
            return Err(AppError::NotFound("RSVP not found".into()));
        }

        info!(event_id, user_id = %user.id, "RSVP cancelled");
        Ok(())
    }

    pub async fn check_in(&self, event_id: &str, user: &User) -> Result<CheckInOutcome, AppError> {
        authorize(user.role, Action::CheckIn)?;

        self.events.find_by_id(event_id).await?
            .ok_or(AppError::NotFound("Event not found".into()))?;

        if self.attendance.find(event_id, &user.id).await?.is_some() {
            return Err(AppError::Conflict("Already checked in".into()));
        }

        let award = |total: i64| award_for(&user.id, total);
        let outcome = self.attendance
            .record_with_achievement(&Attendance::new(event_id.to_string(), user.id.clone()), &award)
            .await?;

        if let Some(badge) = &outcome.achievement {
            info!(user_id = %user.id, badge = ?badge.badge_type, title = %badge.title, "Achievement unlocked");
        }
        info!(event_id, user_id = %user.id, total_attendance = outcome.total_attendance, "Checked in");
        Ok(outcome)
    }
}
