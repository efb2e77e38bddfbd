//! The transition function.
//!
//! [`transition`] trusts its caller: capacity bounds and id uniqueness are
//! enforced at the form boundary (see [`crate::forms`]), and a missing id on
//! update or delete is a no-op. Use [`crate::store::try_transition`] when the
//! caller cannot be trusted.

use crate::models::Session;

use super::action::Action;
use super::state::AppState;

/// Compute the state that follows `state` after `action`.
///
/// Pure and total: `state` is never modified, and every action yields a new
/// snapshot. Actions that change nothing (unknown ids, [`Action::Unrecognized`])
/// return a value equal to `state`.
#[must_use]
pub fn transition(state: &AppState, action: Action) -> AppState {
    match action {
        Action::Login { email } => AppState {
            session: Session::logged_in(email),
            ..state.clone()
        },
        Action::Logout => AppState {
            session: Session::default(),
            ..state.clone()
        },
        Action::AddDate(date) => AppState {
            workshop_dates: appended(&state.workshop_dates, date),
            ..state.clone()
        },
        Action::UpdateDate(date) => AppState {
            workshop_dates: replaced(&state.workshop_dates, |d| d.id == date.id, &date),
            ..state.clone()
        },
        Action::DeleteDate(id) => AppState {
            workshop_dates: retained(&state.workshop_dates, |d| d.id != id),
            workshop_times: retained(&state.workshop_times, |t| t.date_id != id),
            ..state.clone()
        },
        Action::AddTime(time) => AppState {
            workshop_times: appended(&state.workshop_times, time),
            ..state.clone()
        },
        Action::UpdateTime(time) => AppState {
            workshop_times: replaced(&state.workshop_times, |t| t.id == time.id, &time),
            ..state.clone()
        },
        Action::DeleteTime(id) => AppState {
            workshop_times: retained(&state.workshop_times, |t| t.id != id),
            ..state.clone()
        },
        Action::SetTimes(times) => AppState {
            workshop_times: times,
            ..state.clone()
        },
        Action::AdjustRemaining {
            time_id,
            remain_slot,
        } => AppState {
            workshop_times: state
                .workshop_times
                .iter()
                .map(|time| {
                    if time.id == time_id {
                        let mut adjusted = time.clone();
                        adjusted.remain_slot = remain_slot;
                        adjusted
                    } else {
                        time.clone()
                    }
                })
                .collect(),
            ..state.clone()
        },
        Action::Unrecognized => state.clone(),
    }
}

fn appended<T: Clone>(items: &[T], item: T) -> Vec<T> {
    let mut next = Vec::with_capacity(items.len() + 1);
    next.extend_from_slice(items);
    next.push(item);
    next
}

fn replaced<T: Clone>(items: &[T], matches: impl Fn(&T) -> bool, replacement: &T) -> Vec<T> {
    items
        .iter()
        .map(|item| {
            if matches(item) {
                replacement.clone()
            } else {
                item.clone()
            }
        })
        .collect()
}

fn retained<T: Clone>(items: &[T], keep: impl Fn(&T) -> bool) -> Vec<T> {
    items.iter().filter(|item| keep(item)).cloned().collect()
}
