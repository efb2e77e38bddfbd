//! Checked transitions that reject actions which would break an invariant.
//!
//! [`try_transition`] applies exactly the semantics of
//! [`transition`](super::transition) once an action has been accepted. It
//! rejects instead of silently ignoring:
//!
//! - remaining seats above capacity
//! - time windows pointing at a date that does not exist
//! - ids that are already taken
//! - updates and deletes of ids that do not exist
//! - [`Action::Unrecognized`]

use std::collections::HashSet;

use thiserror::Error;

use crate::models::WorkshopTime;
use crate::types::{WorkshopDateId, WorkshopTimeId};

use super::action::Action;
use super::reducer::transition;
use super::state::AppState;

/// Why a checked transition refused an action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectedAction {
    /// A time window would have more remaining seats than capacity.
    #[error("time slot {time_id}: remaining slots ({remain_slot}) exceed total slots ({total_slot})")]
    CapacityExceeded {
        time_id: WorkshopTimeId,
        remain_slot: u32,
        total_slot: u32,
    },

    /// A time window references a date that is not in the store.
    #[error("time slot {time_id} references unknown workshop date {date_id}")]
    UnknownDate {
        time_id: WorkshopTimeId,
        date_id: WorkshopDateId,
    },

    /// A date with this id already exists.
    #[error("workshop date {0} already exists")]
    DuplicateDate(WorkshopDateId),

    /// A time window with this id already exists (or repeats in the payload).
    #[error("time slot {0} already exists")]
    DuplicateTime(WorkshopTimeId),

    /// No date with this id exists.
    #[error("workshop date {0} not found")]
    DateNotFound(WorkshopDateId),

    /// No time window with this id exists.
    #[error("time slot {0} not found")]
    TimeNotFound(WorkshopTimeId),

    /// The action type is not known to this build.
    #[error("unrecognized action")]
    Unrecognized,
}

/// Compute the next state, or explain why `action` is refused.
///
/// # Errors
///
/// Returns a [`RejectedAction`] when the action would break a capacity bound,
/// a date reference or id uniqueness, or when it targets a missing id.
pub fn try_transition(state: &AppState, action: Action) -> Result<AppState, RejectedAction> {
    validate(state, &action)?;
    Ok(transition(state, action))
}

fn validate(state: &AppState, action: &Action) -> Result<(), RejectedAction> {
    match action {
        Action::Login { .. } | Action::Logout => Ok(()),
        Action::AddDate(date) => {
            if state.has_date(&date.id) {
                return Err(RejectedAction::DuplicateDate(date.id.clone()));
            }
            Ok(())
        }
        Action::UpdateDate(date) => require_date(state, &date.id),
        Action::DeleteDate(id) => require_date(state, id),
        Action::AddTime(time) => {
            if state.has_time(&time.id) {
                return Err(RejectedAction::DuplicateTime(time.id.clone()));
            }
            validate_time(state, time)
        }
        Action::UpdateTime(time) => {
            require_time(state, &time.id)?;
            validate_time(state, time)
        }
        Action::DeleteTime(id) => require_time(state, id),
        Action::SetTimes(times) => {
            let mut seen = HashSet::with_capacity(times.len());
            for time in times {
                if !seen.insert(&time.id) {
                    return Err(RejectedAction::DuplicateTime(time.id.clone()));
                }
                validate_time(state, time)?;
            }
            Ok(())
        }
        Action::AdjustRemaining {
            time_id,
            remain_slot,
        } => {
            let time = state
                .time(time_id)
                .ok_or_else(|| RejectedAction::TimeNotFound(time_id.clone()))?;
            if *remain_slot > time.total_slot {
                return Err(RejectedAction::CapacityExceeded {
                    time_id: time_id.clone(),
                    remain_slot: *remain_slot,
                    total_slot: time.total_slot,
                });
            }
            Ok(())
        }
        Action::Unrecognized => Err(RejectedAction::Unrecognized),
    }
}

fn validate_time(state: &AppState, time: &WorkshopTime) -> Result<(), RejectedAction> {
    if !time.within_capacity() {
        return Err(RejectedAction::CapacityExceeded {
            time_id: time.id.clone(),
            remain_slot: time.remain_slot,
            total_slot: time.total_slot,
        });
    }
    if !state.has_date(&time.date_id) {
        return Err(RejectedAction::UnknownDate {
            time_id: time.id.clone(),
            date_id: time.date_id.clone(),
        });
    }
    Ok(())
}

fn require_date(state: &AppState, id: &WorkshopDateId) -> Result<(), RejectedAction> {
    if state.has_date(id) {
        Ok(())
    } else {
        Err(RejectedAction::DateNotFound(id.clone()))
    }
}

fn require_time(state: &AppState, id: &WorkshopTimeId) -> Result<(), RejectedAction> {
    if state.has_time(id) {
        Ok(())
    } else {
        Err(RejectedAction::TimeNotFound(id.clone()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::models::WorkshopDate;

    fn time(id: &str, date_id: &str, total: u32, remain: u32) -> WorkshopTime {
        WorkshopTime {
            id: WorkshopTimeId::new(id),
            date_id: WorkshopDateId::new(date_id),
            label: "15:00-16:00".to_owned(),
            total_slot: total,
            remain_slot: remain,
        }
    }

    #[test]
    fn test_accepted_action_matches_plain_transition() {
        let seeded = AppState::seeded();
        let action = Action::AddTime(time("5", "2", 4, 4));
        assert_eq!(
            try_transition(&seeded, action.clone()).unwrap(),
            transition(&seeded, action)
        );
    }

    #[test]
    fn test_rejects_capacity_exceeded() {
        let seeded = AppState::seeded();
        let err = try_transition(&seeded, Action::AddTime(time("5", "2", 4, 5))).unwrap_err();
        assert_eq!(
            err,
            RejectedAction::CapacityExceeded {
                time_id: WorkshopTimeId::new("5"),
                remain_slot: 5,
                total_slot: 4,
            }
        );

        let err = try_transition(
            &seeded,
            Action::AdjustRemaining {
                time_id: WorkshopTimeId::new("3"),
                remain_slot: 9,
            },
        )
        .unwrap_err();
        assert!(matches!(err, RejectedAction::CapacityExceeded { total_slot: 8, .. }));
    }

    #[test]
    fn test_rejects_unknown_date_reference() {
        let err =
            try_transition(&AppState::seeded(), Action::AddTime(time("5", "42", 4, 4))).unwrap_err();
        assert!(matches!(err, RejectedAction::UnknownDate { .. }));
    }

    #[test]
    fn test_rejects_duplicates() {
        let seeded = AppState::seeded();
        let date = WorkshopDate::new("1", NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());
        assert_eq!(
            try_transition(&seeded, Action::AddDate(date)).unwrap_err(),
            RejectedAction::DuplicateDate(WorkshopDateId::new("1"))
        );
        assert_eq!(
            try_transition(&seeded, Action::AddTime(time("1", "1", 4, 4))).unwrap_err(),
            RejectedAction::DuplicateTime(WorkshopTimeId::new("1"))
        );
        assert_eq!(
            try_transition(
                &seeded,
                Action::SetTimes(vec![time("7", "1", 4, 4), time("7", "2", 4, 4)])
            )
            .unwrap_err(),
            RejectedAction::DuplicateTime(WorkshopTimeId::new("7"))
        );
    }

    #[test]
    fn test_rejects_missing_ids() {
        let seeded = AppState::seeded();
        assert_eq!(
            try_transition(&seeded, Action::DeleteDate(WorkshopDateId::new("9"))).unwrap_err(),
            RejectedAction::DateNotFound(WorkshopDateId::new("9"))
        );
        assert_eq!(
            try_transition(&seeded, Action::DeleteTime(WorkshopTimeId::new("9"))).unwrap_err(),
            RejectedAction::TimeNotFound(WorkshopTimeId::new("9"))
        );
        assert_eq!(
            try_transition(&seeded, Action::UpdateTime(time("9", "1", 4, 4))).unwrap_err(),
            RejectedAction::TimeNotFound(WorkshopTimeId::new("9"))
        );
    }

    #[test]
    fn test_rejects_unrecognized() {
        assert_eq!(
            try_transition(&AppState::seeded(), Action::Unrecognized).unwrap_err(),
            RejectedAction::Unrecognized
        );
    }

    #[test]
    fn test_error_messages() {
        let err = RejectedAction::CapacityExceeded {
            time_id: WorkshopTimeId::new("3"),
            remain_slot: 9,
            total_slot: 8,
        };
        assert_eq!(
            err.to_string(),
            "time slot 3: remaining slots (9) exceed total slots (8)"
        );
    }
}
