//! Dashboard statistics and chart groupings.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::CustomerRegistration;
use crate::store::AppState;

/// Headline numbers shown on the dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    /// Number of registrations.
    pub total_customers: usize,
    /// Sum of capacity over all time windows.
    pub total_slots: u64,
    /// Sum of remaining seats over all time windows.
    pub remaining_slots: u64,
    /// Number of time windows.
    pub total_sessions: usize,
}

impl DashboardStats {
    #[must_use]
    pub fn from_state(state: &AppState) -> Self {
        Self {
            total_customers: state.customer_registrations.len(),
            total_slots: state
                .workshop_times
                .iter()
                .map(|t| u64::from(t.total_slot))
                .sum(),
            remaining_slots: state
                .workshop_times
                .iter()
                .map(|t| u64::from(t.remain_slot))
                .sum(),
            total_sessions: state.workshop_times.len(),
        }
    }

    /// Filled fraction `(total - remaining) / total`.
    ///
    /// `None` when there is no capacity at all. Negative if remaining seats
    /// were over-reported.
    #[must_use]
    pub fn occupancy_rate(&self) -> Option<Decimal> {
        let total = Decimal::from(self.total_slots);
        let filled = total - Decimal::from(self.remaining_slots);
        filled.checked_div(total)
    }

    /// [`occupancy_rate`](Self::occupancy_rate) as a whole percentage,
    /// halves rounded up (`-2.5` becomes `-2`).
    #[must_use]
    pub fn occupancy_percent(&self) -> Option<Decimal> {
        let half = Decimal::new(5, 1);
        self.occupancy_rate()
            .map(|rate| (rate * Decimal::ONE_HUNDRED + half).floor())
    }
}

/// Number of registrations under one label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub registrations: usize,
}

/// Registrations per date label, in first-seen order.
#[must_use]
pub fn registrations_by_date(state: &AppState) -> Vec<LabelCount> {
    count_by_label(
        state
            .customer_registrations
            .iter()
            .map(|r| r.workshop_date_label.as_str()),
    )
}

/// Registrations per time label, in first-seen order.
#[must_use]
pub fn registrations_by_time(state: &AppState) -> Vec<LabelCount> {
    count_by_label(
        state
            .customer_registrations
            .iter()
            .map(|r| r.workshop_time_label.as_str()),
    )
}

/// Distinct date labels on registrations, for the date filter.
#[must_use]
pub fn registration_date_labels(state: &AppState) -> Vec<&str> {
    distinct_labels(state, |r| &r.workshop_date_label)
}

/// Distinct time labels on registrations, for the time filter.
#[must_use]
pub fn registration_time_labels(state: &AppState) -> Vec<&str> {
    distinct_labels(state, |r| &r.workshop_time_label)
}

fn distinct_labels<'a>(
    state: &'a AppState,
    label_of: impl Fn(&'a CustomerRegistration) -> &'a String,
) -> Vec<&'a str> {
    let mut labels: Vec<&str> = Vec::new();
    for registration in &state.customer_registrations {
        let label = label_of(registration).as_str();
        if !labels.contains(&label) {
            labels.push(label);
        }
    }
    labels
}

fn count_by_label<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<LabelCount> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<LabelCount> = Vec::new();
    for label in labels {
        if let Some(count) = positions.get(label).and_then(|&i| counts.get_mut(i)) {
            count.registrations += 1;
        } else {
            positions.insert(label, counts.len());
            counts.push(LabelCount {
                label: label.to_owned(),
                registrations: 1,
            });
        }
    }
    counts
}
