use crate::domain::models::{
    user::User, club::Club, event::Event, rsvp::Rsvp, attendance::{Attendance, CheckInOutcome},
    task::{Task, TaskFilter, TaskStatus}, transaction::Transaction, achievement::Achievement,
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn update_name(&self, id: &str, name: &str) -> Result<User, AppError>;
    async fn update_interests(&self, id: &str, interests: &[String]) -> Result<User, AppError>;
}

#[async_trait]
pub trait ClubRepository: Send + Sync {
    async fn create(&self, club: &Club) -> Result<Club, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Club>, AppError>;
    async fn list(&self) -> Result<Vec<Club>, AppError>;
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, event: &Event) -> Result<Event, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Event>, AppError>;
    async fn list(&self, tag: Option<&str>) -> Result<Vec<Event>, AppError>;
    async fn list_by_club(&self, club_id: &str) -> Result<Vec<Event>, AppError>;
}

/// RSVP persistence. Record writes and the matching `rsvp_count` delta on the
/// event are committed together.
#[async_trait]
pub trait RsvpRepository: Send + Sync {
    /// Inserts a confirmed RSVP and increments the event's `rsvp_count`.
    /// Fails with `Conflict` on a duplicate pair or when the event is at capacity.
    async fn confirm(&self, rsvp: &Rsvp) -> Result<Rsvp, AppError>;
    async fn find_active(&self, event_id: &str, user_id: &str) -> Result<Option<Rsvp>, AppError>;
    /// Deletes the pair's RSVP and decrements `rsvp_count`. Returns false when none existed.
    async fn cancel(&self, event_id: &str, user_id: &str) -> Result<bool, AppError>;
}

/// Maps a user's attendance total to the badge it earns.
pub type AwardFn<'a> = dyn Fn(i64) -> Option<Achievement> + Send + Sync + 'a;

#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    /// Inserts the record, increments the event's `attendance_count`, recounts the
    /// user's attendance and stores whatever `award` yields for that total, all in
    /// one transaction. Fails with `Conflict` if the pair is already checked in.
    async fn record_with_achievement(&self, attendance: &Attendance, award: &AwardFn<'_>) -> Result<CheckInOutcome, AppError>;
    async fn find(&self, event_id: &str, user_id: &str) -> Result<Option<Attendance>, AppError>;
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Attendance>, AppError>;
}

#[async_trait]
pub trait AchievementRepository: Send + Sync {
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Achievement>, AppError>;
}

#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn create(&self, task: &Task) -> Result<Task, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Task>, AppError>;
    async fn update_status(&self, id: &str, status: TaskStatus) -> Result<Task, AppError>;
    async fn list(&self, filter: &TaskFilter) -> Result<Vec<Task>, AppError>;
}

#[async_trait]
pub trait TransactionRepository: Send + Sync {
    async fn create(&self, transaction: &Transaction) -> Result<Transaction, AppError>;
    async fn list_by_club(&self, club_id: &str) -> Result<Vec<Transaction>, AppError>;
}

/// Password digests and bearer tokens.
pub trait CredentialService: Send + Sync {
    fn hash_secret(&self, secret: &str) -> Result<String, AppError>;
    fn verify_secret(&self, secret: &str, digest: &str) -> bool;
    fn issue(&self, subject: &str) -> Result<String, AppError>;
    /// Returns the token subject, or `Unauthorized` if malformed, forged or expired.
    fn verify_token(&self, token: &str) -> Result<String, AppError>;
}

pub trait QrRenderer: Send + Sync {
    fn render(&self, payload: &str) -> Result<String, AppError>;
}

#[async_trait]
pub trait LlmService: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        system_instruction: &str
    ) -> Result<String, AppError>;
}
