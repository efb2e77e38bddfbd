//! Registrations whose labels no longer match the schedule.
//!
//! Registrations keep the date and time labels they were booked under. After
//! a date is edited or deleted those labels can point at nothing; this view
//! lists such registrations so staff can follow up.

use std::collections::HashSet;

use crate::models::CustomerRegistration;
use crate::store::AppState;

/// Registrations with no matching (date label, time label) pair in `state`.
#[must_use]
pub fn orphaned_registrations(state: &AppState) -> Vec<&CustomerRegistration> {
    let scheduled: HashSet<(String, &str)> = state
        .workshop_times
        .iter()
        .filter_map(|time| {
            state
                .date(&time.date_id)
                .map(|date| (date.label(), time.label.as_str()))
        })
        .collect();

    state
        .customer_registrations
        .iter()
        .filter(|r| {
            !scheduled.contains(&(
                r.workshop_date_label.clone(),
                r.workshop_time_label.as_str(),
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::models::WorkshopDate;
    use crate::store::{Action, transition};
    use crate::types::WorkshopDateId;

    fn ids(rows: &[&CustomerRegistration]) -> Vec<String> {
        rows.iter().map(|r| r.id.to_string()).collect()
    }

    #[test]
    fn test_seeded_has_no_orphans() {
        assert!(orphaned_registrations(&AppState::seeded()).is_empty());
    }

    #[test]
    fn test_deleting_a_date_orphans_its_registrations() {
        let state = transition(
            &AppState::seeded(),
            Action::DeleteDate(WorkshopDateId::new("1")),
        );
        assert_eq!(ids(&orphaned_registrations(&state)), ["1", "2"]);
    }

    #[test]
    fn test_editing_a_date_label_orphans_its_registrations() {
        let moved = WorkshopDate::new("2", NaiveDate::from_ymd_opt(2025, 8, 29).unwrap_or_default());
        let state = transition(&AppState::seeded(), Action::UpdateDate(moved));
        assert_eq!(ids(&orphaned_registrations(&state)), ["3"]);
        assert_eq!(state.customer_registrations[2].workshop_date_label, "2025-08-21");
    }
}
