pub mod sqlite_achievement_repo;
pub mod sqlite_attendance_repo;
pub mod sqlite_club_repo;
pub mod sqlite_event_repo;
pub mod sqlite_rsvp_repo;
pub mod sqlite_task_repo;
pub mod sqlite_transaction_repo;
pub mod sqlite_user_repo;
