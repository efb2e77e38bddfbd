//! Login form.

use crate::store::Action;
use crate::types::Email;

use super::{FormError, Submission};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
}

impl LoginForm {
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    /// Validate the email and build a `LOGIN`.
    ///
    /// # Errors
    ///
    /// [`FormError::InvalidEmail`] when the address is malformed.
    pub fn submit(&self) -> Result<Submission, FormError> {
        let email = Email::parse(&self.email)?;
        let welcome = format!("Welcome back, {email}");
        Ok(Submission::new(Action::Login { email }, "Logged in", &welcome))
    }
}
