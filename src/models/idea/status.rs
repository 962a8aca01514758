use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Idea lifecycle states. `Submitted` is initial; `Completed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdeaStatus {
    Submitted,
    #[serde(rename = "In Progress")]
    InProgress,
    Approved,
    Rejected,
    Completed,
}

impl IdeaStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdeaStatus::Submitted => "Submitted",
            IdeaStatus::InProgress => "In Progress",
            IdeaStatus::Approved => "Approved",
            IdeaStatus::Rejected => "Rejected",
            IdeaStatus::Completed => "Completed",
        }
    }

    pub fn parse(s: &str) -> Option<IdeaStatus> {
        match s {
            "Submitted" => Some(IdeaStatus::Submitted),
            "In Progress" => Some(IdeaStatus::InProgress),
            "Approved" => Some(IdeaStatus::Approved),
            "Rejected" => Some(IdeaStatus::Rejected),
            "Completed" => Some(IdeaStatus::Completed),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, IdeaStatus::Completed)
    }
}

/// A mutation attempted against an idea in a given lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleAction {
    Edit,
    Delete,
    /// Unconditional overwrite; any target state is accepted.
    SetStatus(IdeaStatus),
    /// Terminal grant; rejected only once the idea is already Completed.
    GrantReward,
}

/// Single transition guard consulted by every mutating operation.
pub fn check(current: IdeaStatus, action: LifecycleAction) -> Result<(), AppError> {
    match action {
        LifecycleAction::Edit => {
            if current == IdeaStatus::Submitted {
                Ok(())
            } else {
                Err(AppError::Policy(
                    "Only ideas in \"Submitted\" status can be edited".to_string(),
                ))
            }
        }
        LifecycleAction::Delete => {
            if current == IdeaStatus::Submitted {
                Ok(())
            } else {
                Err(AppError::Policy(
                    "Only ideas in \"Submitted\" status can be deleted".to_string(),
                ))
            }
        }
        LifecycleAction::SetStatus(_) => Ok(()),
        LifecycleAction::GrantReward => {
            if current.is_terminal() {
                Err(AppError::Policy("Idea is already completed.".to_string()))
            } else {
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_and_delete_only_while_submitted() {
        assert!(check(IdeaStatus::Submitted, LifecycleAction::Edit).is_ok());
        assert!(check(IdeaStatus::Submitted, LifecycleAction::Delete).is_ok());

        for status in [
            IdeaStatus::InProgress,
            IdeaStatus::Approved,
            IdeaStatus::Rejected,
            IdeaStatus::Completed,
        ] {
            let edit = check(status, LifecycleAction::Edit);
            assert!(matches!(
                edit,
                Err(AppError::Policy(ref msg)) if msg == "Only ideas in \"Submitted\" status can be edited"
            ));
            let delete = check(status, LifecycleAction::Delete);
            assert!(matches!(
                delete,
                Err(AppError::Policy(ref msg)) if msg == "Only ideas in \"Submitted\" status can be deleted"
            ));
        }
    }

    #[test]
    fn status_overwrite_is_unconditional() {
        for current in [
            IdeaStatus::Submitted,
            IdeaStatus::InProgress,
            IdeaStatus::Approved,
            IdeaStatus::Rejected,
            IdeaStatus::Completed,
        ] {
            assert!(check(current, LifecycleAction::SetStatus(IdeaStatus::Rejected)).is_ok());
        }
    }

    #[test]
    fn reward_rejected_only_when_completed() {
        for current in [
            IdeaStatus::Submitted,
            IdeaStatus::InProgress,
            IdeaStatus::Approved,
            IdeaStatus::Rejected,
        ] {
            assert!(check(current, LifecycleAction::GrantReward).is_ok());
        }
        let denied = check(IdeaStatus::Completed, LifecycleAction::GrantReward);
        assert!(matches!(
            denied,
            Err(AppError::Policy(ref msg)) if msg == "Idea is already completed."
        ));
    }

    #[test]
    fn status_round_trips_through_strings() {
        for status in [
            IdeaStatus::Submitted,
            IdeaStatus::InProgress,
            IdeaStatus::Approved,
            IdeaStatus::Rejected,
            IdeaStatus::Completed,
        ] {
            assert_eq!(IdeaStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(IdeaStatus::parse("Archived"), None);
    }
}
