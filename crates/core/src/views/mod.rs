//! Read-only projections of a state snapshot.
//!
//! Every function here takes `&AppState` and returns borrowed or computed
//! data; none of them can change the store.

pub mod dashboard;
pub mod drift;
pub mod filter;
pub mod setup;

pub use dashboard::{
    DashboardStats, LabelCount, registration_date_labels, registration_time_labels,
    registrations_by_date, registrations_by_time,
};
pub use drift::orphaned_registrations;
pub use filter::{RegistrationFilter, RegistrationList, filter_registrations};
pub use setup::{DateSlots, date_for_time, setup_view, times_for_date};
