//! Workshop Console Core - state store for the workshop booking console.
//!
//! This crate holds everything with real consistency concerns:
//! - the data model (workshop dates, time slots, registrations, session)
//! - the store: a pure transition function over a closed set of actions
//! - invariant checks and a checked transition that enforces them
//! - the form boundary that turns raw input into safe actions
//! - derived views used by the dashboard, setup and customer pages
//!
//! # Architecture
//!
//! The core crate performs no I/O. Views read snapshots and dispatch
//! [`store::Action`]s; only [`store::Store`] produces new snapshots, always by
//! whole-state replacement.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs and staff emails
//! - [`models`] - Dates, times, registrations, session gate
//! - [`store`] - State, actions, transitions, the store container
//! - [`invariants`] - Consistency checks over a snapshot
//! - [`forms`] - Validation boundary producing actions
//! - [`views`] - Filtering, dashboard statistics, setup listing

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod forms;
pub mod invariants;
pub mod models;
pub mod store;
pub mod types;
pub mod views;

pub use invariants::{InvariantViolation, check_invariants};
pub use models::*;
pub use store::{Action, AppState, RejectedAction, Store, transition, try_transition};
pub use types::*;
