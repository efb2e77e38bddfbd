//! The console state store.
//!
//! - [`AppState`] is the snapshot: session, dates, times and registrations.
//! - [`Action`] is the closed set of requested changes.
//! - [`transition`] computes the next snapshot and trusts its caller.
//! - [`try_transition`] does the same but rejects invariant-breaking actions.
//! - [`Store`] owns the current snapshot and notifies subscribers.

mod action;
mod checked;
mod container;
mod reducer;
mod state;

pub use action::Action;
pub use checked::{RejectedAction, try_transition};
pub use container::{Store, SubscriptionId};
pub use reducer::transition;
pub use state::AppState;
