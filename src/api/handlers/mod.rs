pub mod analytics;
pub mod auth;
pub mod club;
pub mod event;
pub mod finance;
pub mod health;
pub mod recommendation;
pub mod task;
pub mod user;
