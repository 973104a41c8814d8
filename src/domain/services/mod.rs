pub mod achievement_engine;
pub mod auth_service;
pub mod club_service;
pub mod event_lifecycle;
pub mod ledger;
pub mod policy;
pub mod recommendation;
pub mod task_service;
