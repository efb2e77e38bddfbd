//! Local login state and the gate that guards console pages.
//!
//! There is no credential check: logging in only records which staff email
//! is using the console.

use serde::{Deserialize, Serialize};

use crate::types::Email;

/// Path of the login page.
pub const LOGIN_PATH: &str = "/login";

/// Current login state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Whether a staff member is logged in.
    pub authenticated: bool,
    /// Email of the logged-in staff member.
    pub user: Option<Email>,
}

/// Outcome of routing a request through the session gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Render the requested page inside the console layout.
    Console,
    /// Render the login page without the console chrome.
    LoginPage,
    /// Not logged in: send the user to [`LOGIN_PATH`].
    RedirectToLogin,
}

impl Session {
    /// A logged-in session for `email`.
    #[must_use]
    pub const fn logged_in(email: Email) -> Self {
        Self {
            authenticated: true,
            user: Some(email),
        }
    }

    /// Decide how a request for `path` is served.
    #[must_use]
    pub fn gate(&self, path: &str) -> Gate {
        if path == LOGIN_PATH {
            Gate::LoginPage
        } else if self.authenticated {
            Gate::Console
        } else {
            Gate::RedirectToLogin
        }
    }

    /// Header avatar letter for the logged-in user.
    #[must_use]
    pub fn avatar_initial(&self) -> Option<char> {
        self.user.as_ref().and_then(Email::initial)
    }
}
