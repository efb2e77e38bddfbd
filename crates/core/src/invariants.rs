//! Consistency checks over a whole snapshot.
//!
//! A state reached only through form-validated actions has no violations.
//! Snapshots loaded from files, or built through [`Action::SetTimes`] and
//! other unchecked actions, may.
//!
//! [`Action::SetTimes`]: crate::store::Action::SetTimes

use std::collections::HashSet;
use std::hash::Hash;

use thiserror::Error;

use crate::store::AppState;
use crate::types::{RegistrationId, WorkshopDateId, WorkshopTimeId};

/// One broken invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// `remain_slot > total_slot`.
    #[error("time slot {time_id} has {remain_slot} remaining of {total_slot} total")]
    RemainExceedsTotal {
        time_id: WorkshopTimeId,
        remain_slot: u32,
        total_slot: u32,
    },

    /// A time window points at a date that is not in the store.
    #[error("time slot {time_id} references missing workshop date {date_id}")]
    DanglingTime {
        time_id: WorkshopTimeId,
        date_id: WorkshopDateId,
    },

    #[error("workshop date id {0} is used more than once")]
    DuplicateDateId(WorkshopDateId),

    #[error("time slot id {0} is used more than once")]
    DuplicateTimeId(WorkshopTimeId),

    #[error("registration id {0} is used more than once")]
    DuplicateRegistrationId(RegistrationId),
}

/// List every invariant `state` breaks, in collection order.
#[must_use]
pub fn check_invariants(state: &AppState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    violations.extend(
        duplicates(state.workshop_dates.iter().map(|d| &d.id))
            .map(|id| InvariantViolation::DuplicateDateId(id.clone())),
    );
    violations.extend(
        duplicates(state.workshop_times.iter().map(|t| &t.id))
            .map(|id| InvariantViolation::DuplicateTimeId(id.clone())),
    );
    violations.extend(
        duplicates(state.customer_registrations.iter().map(|r| &r.id))
            .map(|id| InvariantViolation::DuplicateRegistrationId(id.clone())),
    );

    let date_ids: HashSet<&WorkshopDateId> = state.workshop_dates.iter().map(|d| &d.id).collect();

    for time in &state.workshop_times {
        if !time.within_capacity() {
            violations.push(InvariantViolation::RemainExceedsTotal {
                time_id: time.id.clone(),
                remain_slot: time.remain_slot,
                total_slot: time.total_slot,
            });
        }
        if !date_ids.contains(&time.date_id) {
            violations.push(InvariantViolation::DanglingTime {
                time_id: time.id.clone(),
                date_id: time.date_id.clone(),
            });
        }
    }

    violations
}

impl AppState {
    /// Whether `state` satisfies every invariant.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        check_invariants(self).is_empty()
    }
}

/// Ids that appear more than once, each reported once.
fn duplicates<'a, T: Eq + Hash + 'a>(ids: impl Iterator<Item = &'a T>) -> impl Iterator<Item = &'a T> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    ids.filter(move |id| !seen.insert(*id) && reported.insert(*id))
}
