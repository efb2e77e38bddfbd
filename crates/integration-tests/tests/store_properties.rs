//! Property tests for the store transition.
//!
//! States are generated with a handful of dates, time slots attached to
//! them (a few dangling), and arbitrary actions drawn from the full set.

#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use proptest::prelude::*;
use workshop_console_core::forms::TimeForm;
use workshop_console_core::{
    Action, AppState, Email, Session, WorkshopDate, WorkshopDateId, WorkshopTime, WorkshopTimeId,
    transition,
};

// ============================================================================
// Strategies
// ============================================================================

fn date_id() -> impl Strategy<Value = WorkshopDateId> {
    (0u8..6).prop_map(|n| WorkshopDateId::new(format!("d{n}")))
}

fn time_id() -> impl Strategy<Value = WorkshopTimeId> {
    (0u8..10).prop_map(|n| WorkshopTimeId::new(format!("t{n}")))
}

fn workshop_date(id: WorkshopDateId) -> impl Strategy<Value = WorkshopDate> {
    (1u32..=28).prop_map(move |day| {
        WorkshopDate::new(
            id.clone(),
            NaiveDate::from_ymd_opt(2025, 8, day).unwrap(),
        )
    })
}

fn any_date() -> impl Strategy<Value = WorkshopDate> {
    date_id().prop_flat_map(workshop_date)
}

fn workshop_time(id: WorkshopTimeId) -> impl Strategy<Value = WorkshopTime> {
    (date_id(), 0u8..12, 1u32..20)
        .prop_flat_map(|(date_id, hour, total)| (Just(date_id), Just(hour), Just(total), 0..=total))
        .prop_map(move |(date_id, hour, total_slot, remain_slot)| WorkshopTime {
            id: id.clone(),
            date_id,
            label: format!("{:02}:00-{:02}:00", hour + 8, hour + 9),
            total_slot,
            remain_slot,
        })
}

fn any_time() -> impl Strategy<Value = WorkshopTime> {
    time_id().prop_flat_map(workshop_time)
}

fn state() -> impl Strategy<Value = AppState> {
    let dates = proptest::sample::subsequence((0u8..6).collect::<Vec<_>>(), 0..=6)
        .prop_flat_map(|ns| {
            ns.into_iter()
                .map(|n| workshop_date(WorkshopDateId::new(format!("d{n}"))))
                .collect::<Vec<_>>()
        });
    let times = proptest::sample::subsequence((0u8..10).collect::<Vec<_>>(), 0..=10)
        .prop_flat_map(|ns| {
            ns.into_iter()
                .map(|n| workshop_time(WorkshopTimeId::new(format!("t{n}"))))
                .collect::<Vec<_>>()
        });
    (dates, times, any::<bool>()).prop_map(|(workshop_dates, workshop_times, logged_in)| {
        let seeded = AppState::seeded();
        AppState {
            session: if logged_in {
                Session::logged_in(Email::parse("staff@workshop.vn").unwrap())
            } else {
                Session::default()
            },
            workshop_dates,
            workshop_times,
            customer_registrations: seeded.customer_registrations,
        }
    })
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Logout),
        Just(Action::Login {
            email: Email::parse("staff@workshop.vn").unwrap()
        }),
        any_date().prop_map(Action::AddDate),
        any_date().prop_map(Action::UpdateDate),
        date_id().prop_map(Action::DeleteDate),
        any_time().prop_map(Action::AddTime),
        any_time().prop_map(Action::UpdateTime),
        time_id().prop_map(Action::DeleteTime),
        proptest::collection::vec(any_time(), 0..4).prop_map(Action::SetTimes),
        (time_id(), 0u32..30).prop_map(|(time_id, remain_slot)| Action::AdjustRemaining {
            time_id,
            remain_slot
        }),
        Just(Action::Unrecognized),
    ]
}

fn time_ids(state: &AppState) -> Vec<WorkshopTimeId> {
    state.workshop_times.iter().map(|t| t.id.clone()).collect()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn delete_date_cascades_to_its_times(state in state(), id in date_id()) {
        let next = transition(&state, Action::DeleteDate(id.clone()));

        prop_assert!(next.workshop_times.iter().all(|t| t.date_id != id));
        prop_assert!(next.workshop_dates.iter().all(|d| d.id != id));

        let kept: Vec<WorkshopTimeId> = state
            .workshop_times
            .iter()
            .filter(|t| t.date_id != id)
            .map(|t| t.id.clone())
            .collect();
        prop_assert_eq!(time_ids(&next), kept);
    }

    #[test]
    fn logout_is_idempotent(state in state()) {
        let once = transition(&state, Action::Logout);
        let twice = transition(&once, Action::Logout);
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once.session, Session::default());
    }

    #[test]
    fn deleting_a_missing_time_changes_nothing(state in state()) {
        let missing = WorkshopTimeId::new("missing");
        let once = transition(&state, Action::DeleteTime(missing.clone()));
        let twice = transition(&once, Action::DeleteTime(missing));
        prop_assert_eq!(&once, &state);
        prop_assert_eq!(&once, &twice);
    }

    #[test]
    fn transition_never_mutates_its_input(state in state(), action in action()) {
        let before = state.clone();
        let _ = transition(&state, action);
        prop_assert_eq!(state, before);
    }

    #[test]
    fn unrecognized_action_yields_an_equal_state(state in state()) {
        prop_assert_eq!(transition(&state, Action::Unrecognized), state);
    }

    #[test]
    fn add_date_appends(state in state(), date in any_date()) {
        let next = transition(&state, Action::AddDate(date.clone()));
        prop_assert_eq!(next.workshop_dates.len(), state.workshop_dates.len() + 1);
        prop_assert_eq!(next.workshop_dates.last(), Some(&date));
        prop_assert_eq!(&next.workshop_dates[..state.workshop_dates.len()], &state.workshop_dates[..]);
    }

    #[test]
    fn update_date_keeps_position(state in state(), day in 1u32..=28, pick in any::<prop::sample::Index>()) {
        prop_assume!(!state.workshop_dates.is_empty());
        let index = pick.index(state.workshop_dates.len());
        let edited = WorkshopDate::new(
            state.workshop_dates[index].id.clone(),
            NaiveDate::from_ymd_opt(2025, 9, day).unwrap(),
        );

        let next = transition(&state, Action::UpdateDate(edited.clone()));

        prop_assert_eq!(next.workshop_dates.len(), state.workshop_dates.len());
        prop_assert_eq!(&next.workshop_dates[index], &edited);
        for (i, date) in next.workshop_dates.iter().enumerate() {
            if i != index {
                prop_assert_eq!(date, &state.workshop_dates[i]);
            }
        }
    }

    #[test]
    fn form_validated_time_edits_stay_within_capacity(
        total in "[0-9]{1,3}",
        remain in "[0-9]{1,3}",
    ) {
        let state = AppState::seeded();
        let existing = state.workshop_times[0].clone();
        let date = state.date(&existing.date_id);

        if let Ok(submission) = TimeForm::new("09:00-10:00", total, remain).submit_edit(date, &existing) {
            let next = transition(&state, submission.action);
            prop_assert!(next.workshop_times.iter().all(WorkshopTime::within_capacity));
        }
    }
}
