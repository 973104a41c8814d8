use std::sync::Arc;
use crate::domain::ports::{
    AchievementRepository, AttendanceRepository, ClubRepository, EventRepository,
    UserRepository,
};
use crate::domain::services::{
    auth_service::AuthService, club_service::ClubService, event_lifecycle::EventLifecycle, ledger::LedgerService,
    recommendation::RecommendationService, task_service::TaskService,
};
use crate::config::Config;

/// Request-independent context, built once at startup and shared read-only.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub club_repo: Arc<dyn ClubRepository>,
    pub event_repo: Arc<dyn EventRepository>,
    pub attendance_repo: Arc<dyn AttendanceRepository>,
    pub achievement_repo: Arc<dyn AchievementRepository>,
    pub auth_service: Arc<AuthService>,
    pub club_service: Arc<ClubService>,
    pub event_lifecycle: Arc<EventLifecycle>,
    pub task_service: Arc<TaskService>,
    pub ledger_service: Arc<LedgerService>,
    pub recommendation_service: Arc<RecommendationService>,
}
