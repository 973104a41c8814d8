use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{ConnectOptions, SqlitePool};
use tracing::{info, warn};
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::state::AppState;
use crate::domain::ports::LlmService;
use crate::domain::services::{
    auth_service::AuthService, club_service::ClubService,
    event_lifecycle::EventLifecycle, ledger::LedgerService,
    recommendation::RecommendationService, task_service::TaskService,
};
use crate::infra::ai::gemini_service::GeminiService;
use crate::infra::credentials::jwt_credential_service::JwtCredentialService;
use crate::infra::qr::svg_qr_renderer::SvgQrRenderer;
use crate::infra::repositories::{
    sqlite_achievement_repo::SqliteAchievementRepo, sqlite_attendance_repo::SqliteAttendanceRepo,
    sqlite_club_repo::SqliteClubRepo, sqlite_event_repo::SqliteEventRepo,
    sqlite_rsvp_repo::SqliteRsvpRepo, sqlite_task_repo::SqliteTaskRepo,
    sqlite_transaction_repo::SqliteTransactionRepo, sqlite_user_repo::SqliteUserRepo,
};

pub async fn bootstrap_state(config: &Config) -> AppState {
    info!("Initializing SQLite connection with WAL Mode...");

    let opts = SqliteConnectOptions::from_str(&config.database_url)
        .expect("Invalid SQLite connection string")
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .log_statements(LevelFilter::Debug)
        .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await
        .expect("Failed to connect to SQLite");

    run_sqlite_migrations(&pool).await;

    let llm_service: Option<Arc<dyn LlmService>> = match &config.gemini_api_key {
        Some(key) => {
            info!("AI recommendations enabled (Gemini)");
            Some(Arc::new(GeminiService::new(key.clone(), config.ai_timeout)) as Arc<dyn LlmService>)
        }
        None => {
            warn!("GEMINI_API_KEY not set; recommendations will use tag matching only");
            None
        }
    };

    assemble_state(config, pool, llm_service)
}

/// Wires repositories and services over an already-migrated pool.
pub fn assemble_state(config: &Config, pool: SqlitePool, llm_service: Option<Arc<dyn LlmService>>) -> AppState {
    let user_repo = Arc::new(SqliteUserRepo::new(pool.clone()));
    let club_repo = Arc::new(SqliteClubRepo::new(pool.clone()));
    let event_repo = Arc::new(SqliteEventRepo::new(pool.clone()));
    let rsvp_repo = Arc::new(SqliteRsvpRepo::new(pool.clone()));
    let attendance_repo = Arc::new(SqliteAttendanceRepo::new(pool.clone()));
    let achievement_repo = Arc::new(SqliteAchievementRepo::new(pool.clone()));
    let task_repo = Arc::new(SqliteTaskRepo::new(pool.clone()));
    let transaction_repo = Arc::new(SqliteTransactionRepo::new(pool));

    let credentials = Arc::new(JwtCredentialService::new(&config.jwt_secret, config.token_ttl_days));
    let auth_service = Arc::new(AuthService::new(user_repo.clone(), credentials));

    let event_lifecycle = Arc::new(EventLifecycle::new(
        club_repo.clone(),
        event_repo.clone(),
        rsvp_repo,
        attendance_repo.clone(),
        Arc::new(SvgQrRenderer),
    ));

    AppState {
        config: config.clone(),
        user_repo,
        club_repo: club_repo.clone(),
        event_repo: event_repo.clone(),
        attendance_repo,
        achievement_repo,
        auth_service,
        club_service: Arc::new(ClubService::new(club_repo.clone())),
        event_lifecycle,
        task_service: Arc::new(TaskService::new(club_repo.clone(), task_repo)),
        ledger_service: Arc::new(LedgerService::new(club_repo, transaction_repo)),
        recommendation_service: Arc::new(RecommendationService::new(event_repo, llm_service, config.ai_timeout)),
    }
}

pub async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
