//! The state snapshot and its seeded starting value.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{CustomerRegistration, Session, WorkshopDate, WorkshopTime};
use crate::types::{RegistrationId, WorkshopDateId, WorkshopTimeId};

/// Bill image attached to every seeded registration.
const SEED_BILL_IMAGE: &str =
    "https://media-cdn.tripadvisor.com/media/photo-s/12/d6/34/cc/our-bill.jpg";

/// Complete console state at one point in time.
///
/// Collections are ordered: display order is insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppState {
    /// Login state.
    pub session: Session,
    /// Bookable workshop days.
    pub workshop_dates: Vec<WorkshopDate>,
    /// Time windows, each attached to one workshop date.
    pub workshop_times: Vec<WorkshopTime>,
    /// Completed bookings.
    pub customer_registrations: Vec<CustomerRegistration>,
}

impl AppState {
    /// The deterministic starting snapshot: three dates in August 2025, four
    /// time windows and three registrations, logged out.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            session: Session::default(),
            workshop_dates: vec![
                WorkshopDate::new("1", august_2025(20)),
                WorkshopDate::new("2", august_2025(21)),
                WorkshopDate::new("3", august_2025(22)),
            ],
            workshop_times: vec![
                seed_time("1", "1", "09:00-10:00", 10, 9),
                seed_time("2", "1", "10:00-11:00", 10, 9),
                seed_time("3", "2", "14:00-15:00", 8, 7),
                seed_time("4", "3", "09:00-10:00", 12, 12),
            ],
            customer_registrations: vec![
                seed_registration(
                    "1",
                    ("Nguyen Van A", "Be An", 8),
                    ("2025-08-20", "09:00-10:00"),
                    ("0901234567", "KFC001"),
                ),
                seed_registration(
                    "2",
                    ("Tran Thi B", "Be Binh", 7),
                    ("2025-08-20", "10:00-11:00"),
                    ("0902345678", "KFC002"),
                ),
                seed_registration(
                    "3",
                    ("Le Van C", "Be Cuong", 9),
                    ("2025-08-21", "14:00-15:00"),
                    ("0903456789", "KFC003"),
                ),
            ],
        }
    }

    /// Look up a workshop date by id.
    #[must_use]
    pub fn date(&self, id: &WorkshopDateId) -> Option<&WorkshopDate> {
        self.workshop_dates.iter().find(|date| &date.id == id)
    }

    /// Look up a time window by id.
    #[must_use]
    pub fn time(&self, id: &WorkshopTimeId) -> Option<&WorkshopTime> {
        self.workshop_times.iter().find(|time| &time.id == id)
    }

    #[must_use]
    pub fn has_date(&self, id: &WorkshopDateId) -> bool {
        self.date(id).is_some()
    }

    #[must_use]
    pub fn has_time(&self, id: &WorkshopTimeId) -> bool {
        self.time(id).is_some()
    }
}

fn august_2025(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, day).unwrap_or(NaiveDate::MIN)
}

fn seed_time(id: &str, date_id: &str, label: &str, total: u32, remain: u32) -> WorkshopTime {
    WorkshopTime {
        id: WorkshopTimeId::new(id),
        date_id: WorkshopDateId::new(date_id),
        label: label.to_owned(),
        total_slot: total,
        remain_slot: remain,
    }
}

fn seed_registration(
    id: &str,
    (parent_name, child_name, child_age): (&str, &str, u32),
    (date_label, time_label): (&str, &str),
    (phone, bill_number): (&str, &str),
) -> CustomerRegistration {
    CustomerRegistration {
        id: RegistrationId::new(id),
        parent_name: parent_name.to_owned(),
        child_name: child_name.to_owned(),
        child_age,
        workshop_date_label: date_label.to_owned(),
        workshop_time_label: time_label.to_owned(),
        parent_phone: phone.to_owned(),
        bill_image_ref: SEED_BILL_IMAGE.to_owned(),
        bill_number: bill_number.to_owned(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_shape() {
        let state = AppState::seeded();
        assert!(!state.session.authenticated);
        assert_eq!(state.workshop_dates.len(), 3);
        assert_eq!(state.workshop_times.len(), 4);
        assert_eq!(state.customer_registrations.len(), 3);
        assert_eq!(state.workshop_dates[0].label(), "2025-08-20");
        assert_eq!(state.workshop_dates[2].label(), "2025-08-22");
    }

    #[test]
    fn test_seeded_is_deterministic() {
        assert_eq!(AppState::seeded(), AppState::seeded());
    }

    #[test]
    fn test_lookups() {
        let state = AppState::seeded();
        assert_eq!(
            state.time(&WorkshopTimeId::new("3")).unwrap().label,
            "14:00-15:00"
        );
        assert!(state.has_date(&WorkshopDateId::new("2")));
        assert!(!state.has_date(&WorkshopDateId::new("9")));
        assert!(!state.has_time(&WorkshopTimeId::new("9")));
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let state: AppState = serde_yaml::from_str(
            "workshop_dates:\n  - id: \"10\"\n    date: 2025-09-01\n",
        )
        .unwrap();
        assert_eq!(state.workshop_dates.len(), 1);
        assert!(state.workshop_times.is_empty());
        assert_eq!(state.session, Session::default());
    }
}
