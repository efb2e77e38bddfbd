//! The validation boundary between user input and the store.
//!
//! Forms take raw field values, check them, and produce a [`Submission`]:
//! an action that is safe to hand to [`transition`](crate::store::transition)
//! plus the notice to show the user. A form never yields an action that
//! breaks a capacity bound.
//!
//! ```
//! use workshop_console_core::forms::TimeForm;
//! use workshop_console_core::store::{AppState, transition};
//!
//! let state = AppState::seeded();
//! let date = &state.workshop_dates[0];
//!
//! let form = TimeForm::new("11:00-12:00", "10", "12");
//! let err = form.submit_new(Some(date)).unwrap_err();
//! assert_eq!(err.to_string(), "Remaining slots cannot be more than total slots");
//!
//! let submission = TimeForm::new("11:00-12:00", "10", "10").submit_new(Some(date)).unwrap();
//! let next = transition(&state, submission.action);
//! assert_eq!(next.workshop_times.len(), 5);
//! ```

mod date;
mod login;
mod time;

pub use date::DateForm;
pub use login::LoginForm;
pub use time::TimeForm;

use thiserror::Error;

use crate::store::Action;
use crate::types::EmailError;

/// Input rejected at the form boundary. The form stays open.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please select a date")]
    MissingDate,

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Please fill in all fields")]
    MissingFields,

    #[error("{field} must be a whole number, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Total slots must be at least 1")]
    ZeroCapacity,

    #[error("Remaining slots cannot be more than total slots")]
    RemainExceedsTotal,

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),
}

impl FormError {
    /// The error notice shown to the user.
    #[must_use]
    pub fn notice(&self) -> Notice {
        Notice::new("Error", self.to_string())
    }
}

/// A transient message shown after a form submits or fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl Notice {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Confirmation shown after a delete action is dispatched.
    #[must_use]
    pub fn for_deletion(action: &Action) -> Option<Self> {
        match action {
            Action::DeleteDate(_) => Some(Self::new(
                "Date deleted",
                "Workshop date and all its time slots have been removed.",
            )),
            Action::DeleteTime(_) => {
                Some(Self::new("Time slot deleted", "The time slot has been removed."))
            }
            _ => None,
        }
    }
}

/// A validated action and the notice confirming it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub action: Action,
    pub notice: Notice,
}

impl Submission {
    fn new(action: Action, title: &str, description: &str) -> Self {
        Self {
            action,
            notice: Notice::new(title, description),
        }
    }
}
