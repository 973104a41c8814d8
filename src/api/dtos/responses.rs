use crate::domain::models::{achievement::Achievement, attendance::Attendance, event::Event};
use serde::Serialize;

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self { message: message.to_string() }
    }
}

#[derive(Serialize)]
pub struct StudentAnalytics {
    pub attendance_count: usize,
    pub achievements: Vec<Achievement>,
    pub attendance_history: Vec<Attendance>,
}

#[derive(Serialize)]
pub struct ClubAnalytics {
    pub total_events: usize,
    pub total_rsvps: i64,
    pub total_attendance: i64,
    pub events: Vec<Event>,
}

impl ClubAnalytics {
    pub fn from_events(events: Vec<Event>) -> Self {
        Self {
            total_events: events.len(),
            total_rsvps: events.iter().map(|e| e.rsvp_count).sum(),
            total_attendance: events.iter().map(|e| e.attendance_count).sum(),
            events,
        }
    }
}
