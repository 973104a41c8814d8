use crate::domain::models::user::Role;
use crate::error::AppError;

/// Role-gated operations. Read endpoints that need no role are not listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CreateClub,
    CreateEvent,
    CreateTask,
    UpdateTaskStatus,
    ViewFinances,
    CreateTransaction,
    Rsvp,
    CancelRsvp,
    CheckIn,
}

impl Action {
    fn describe(&self) -> &'static str {
        match self {
            Action::CreateClub => "create clubs",
            Action::CreateEvent => "create events",
            Action::CreateTask => "create tasks",
            Action::UpdateTaskStatus => "update tasks",
            Action::ViewFinances => "view finances",
            Action::CreateTransaction => "add transactions",
            Action::Rsvp => "RSVP to events",
            Action::CancelRsvp => "cancel RSVPs",
            Action::CheckIn => "check in to events",
        }
    }
}

pub fn can_perform(role: Role, action: Action) -> bool {
    use Role::*;

    match action {
        Action::CreateClub => matches!(role, Admin),
        Action::CreateEvent | Action::CreateTask => matches!(role, Coordinator | Admin),
        Action::ViewFinances => matches!(role, Treasurer | Coordinator | Faculty | Admin),
        Action::CreateTransaction => matches!(role, Treasurer | Coordinator | Admin),
        Action::UpdateTaskStatus | Action::Rsvp | Action::CancelRsvp | Action::CheckIn => true,
    }
}

pub fn authorize(role: Role, action: Action) -> Result<(), AppError> {
    if can_perform(role, action) {
        Ok(())
    } else {
        Err(AppError::Forbidden(format!("Role '{}' cannot {}", role, action.describe())))
    }
}
