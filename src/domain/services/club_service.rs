use std::sync::Arc;
use crate::domain::{
    models::{club::{Club, NewClubParams}, user::User},
    ports::ClubRepository,
    services::policy::{authorize, Action},
};
use crate::error::AppError;
use tracing::info;

pub struct ClubService {
    clubs: Arc<dyn ClubRepository>,
}

impl ClubService {
    pub fn new(clubs: Arc<dyn ClubRepository>) -> Self {
        Self { clubs }
    }

    pub async fn create(&self, actor: &User, params: NewClubParams) -> Result<Club, AppError> {
        authorize(actor.role, Action::CreateClub)?;

        if params.name.trim().is_empty() {
            return Err(AppError::Validation("Club name must not be empty".into()));
        }

        let created = self.clubs.create(&Club::new(params)).await?;
        info!(club_id = %created.id, created_by = %actor.id, "Club created");
        Ok(created)
    }
}
