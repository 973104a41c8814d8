use crate::domain::models::achievement::{Achievement, BadgeType};

pub struct Milestone {
    pub count: i64,
    pub badge: BadgeType,
    pub title: &'static str,
    pub description: &'static str,
}

pub const MILESTONES: [Milestone; 3] = [
    Milestone { count: 1, badge: BadgeType::Bronze, title: "First Event", description: "Attended your first event!" },
    Milestone { count: 10, badge: BadgeType::Silver, title: "Active Participant", description: "Attended 10 events!" },
    Milestone { count: 50, badge: BadgeType::Gold, title: "Campus Legend", description: "Attended 50 events!" },
];

/// Exact match only: counts past a milestone never re-award it.
pub fn milestone_for(total_attendance: i64) -> Option<&'static Milestone> {
    MILESTONES.iter().find(|m| m.count == total_attendance)
}

/// The badge a check-in earns when it brings the user's total to `total_attendance`.
pub fn award_for(user_id: &str, total_attendance: i64) -> Option<Achievement> {
    milestone_for(total_attendance)
        .map(|m| Achievement::new(user_id.to_string(), m.title, m.description, m.badge))
}
