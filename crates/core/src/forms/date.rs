//! Add/edit form for workshop dates.

use chrono::NaiveDate;

use crate::models::{DATE_LABEL_FORMAT, WorkshopDate};
use crate::store::Action;
use crate::types::WorkshopDateId;

use super::{FormError, Submission};

/// Raw input of the date form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateForm {
    /// Date as typed, `YYYY-MM-DD`.
    pub date: String,
}

impl DateForm {
    #[must_use]
    pub fn new(date: impl Into<String>) -> Self {
        Self { date: date.into() }
    }

    /// Form pre-filled for editing `existing`.
    #[must_use]
    pub fn from_date(existing: &WorkshopDate) -> Self {
        Self::new(existing.label())
    }

    /// Validate and build an `ADD_DATE` with a freshly minted id.
    ///
    /// # Errors
    ///
    /// [`FormError::MissingDate`] when blank, [`FormError::InvalidDate`] when
    /// the value is not a calendar date.
    pub fn submit_new(&self) -> Result<Submission, FormError> {
        let date = self.parse()?;
        Ok(Submission::new(
            Action::AddDate(WorkshopDate {
                id: WorkshopDateId::generate(),
                date,
            }),
            "Date added",
            "New workshop date has been added successfully.",
        ))
    }

    /// Validate and build an `UPDATE_DATE` for `existing`, keeping its id.
    ///
    /// # Errors
    ///
    /// Same as [`DateForm::submit_new`].
    pub fn submit_edit(&self, existing: &WorkshopDate) -> Result<Submission, FormError> {
        let date = self.parse()?;
        Ok(Submission::new(
            Action::UpdateDate(WorkshopDate {
                id: existing.id.clone(),
                date,
            }),
            "Date updated",
            "Workshop date has been updated successfully.",
        ))
    }

    fn parse(&self) -> Result<NaiveDate, FormError> {
        let raw = self.date.trim();
        if raw.is_empty() {
            return Err(FormError::MissingDate);
        }
        NaiveDate::parse_from_str(raw, DATE_LABEL_FORMAT)
            .map_err(|_| FormError::InvalidDate(raw.to_owned()))
    }
}
