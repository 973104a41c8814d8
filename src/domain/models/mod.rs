pub mod achievement;
pub mod attendance;
pub mod auth;
pub mod club;
pub mod event;
pub mod rsvp;
pub mod task;
pub mod transaction;
pub mod user;
