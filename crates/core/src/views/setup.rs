//! Workshop setup page: each date with its time slots.

use crate::models::{WorkshopDate, WorkshopTime};
use crate::store::AppState;
use crate::types::WorkshopDateId;

/// All time windows attached to `date_id`, in store order.
#[must_use]
pub fn times_for_date<'a>(state: &'a AppState, date_id: &WorkshopDateId) -> Vec<&'a WorkshopTime> {
    state
        .workshop_times
        .iter()
        .filter(|time| &time.date_id == date_id)
        .collect()
}

/// The date a time window belongs to, if it still exists.
#[must_use]
pub fn date_for_time<'a>(state: &'a AppState, time: &WorkshopTime) -> Option<&'a WorkshopDate> {
    state.date(&time.date_id)
}

/// One card on the setup page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateSlots<'a> {
    pub date: &'a WorkshopDate,
    pub times: Vec<&'a WorkshopTime>,
}

impl DateSlots<'_> {
    /// "1 time slot", "3 time slots".
    #[must_use]
    pub fn summary(&self) -> String {
        let count = self.times.len();
        if count == 1 {
            "1 time slot".to_owned()
        } else {
            format!("{count} time slots")
        }
    }
}

/// Every date, in store order, with its slots.
#[must_use]
pub fn setup_view(state: &AppState) -> Vec<DateSlots<'_>> {
    state
        .workshop_dates
        .iter()
        .map(|date| DateSlots {
            date,
            times: times_for_date(state, &date.id),
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::WorkshopTimeId;

    #[test]
    fn test_times_for_date() {
        let state = AppState::seeded();
        let labels: Vec<&str> = times_for_date(&state, &WorkshopDateId::new("1"))
            .iter()
            .map(|t| t.label.as_str())
            .collect();
        assert_eq!(labels, ["09:00-10:00", "10:00-11:00"]);
        assert!(times_for_date(&state, &WorkshopDateId::new("9")).is_empty());
    }

    #[test]
    fn test_date_for_time() {
        let state = AppState::seeded();
        let time = state.time(&WorkshopTimeId::new("3")).unwrap();
        assert_eq!(date_for_time(&state, time).unwrap().label(), "2025-08-21");
    }

    #[test]
    fn test_setup_view_summaries() {
        let state = AppState::seeded();
        let summaries: Vec<String> = setup_view(&state).iter().map(DateSlots::summary).collect();
        assert_eq!(summaries, ["2 time slots", "1 time slot", "1 time slot"]);

        let empty = crate::store::transition(&state, crate::store::Action::SetTimes(Vec::new()));
        assert_eq!(setup_view(&empty)[0].summary(), "0 time slots");
    }
}
