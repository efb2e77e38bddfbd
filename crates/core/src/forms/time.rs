//! Add/edit form for time slots.

use crate::models::{WorkshopDate, WorkshopTime};
use crate::store::Action;
use crate::types::WorkshopTimeId;

use super::{FormError, Submission};

/// Raw input of the time slot form. Counts are kept as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeForm {
    /// Window label, e.g. `09:00-10:00`.
    pub label: String,
    pub total_slot: String,
    pub remain_slot: String,
}

/// Fields that passed validation.
struct ValidTime {
    label: String,
    total_slot: u32,
    remain_slot: u32,
}

impl TimeForm {
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        total_slot: impl Into<String>,
        remain_slot: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            total_slot: total_slot.into(),
            remain_slot: remain_slot.into(),
        }
    }

    /// Form pre-filled for editing `existing`.
    #[must_use]
    pub fn from_time(existing: &WorkshopTime) -> Self {
        Self::new(
            existing.label.clone(),
            existing.total_slot.to_string(),
            existing.remain_slot.to_string(),
        )
    }

    /// Validate and build an `ADD_TIME` under `date` with a fresh id.
    ///
    /// # Errors
    ///
    /// [`FormError::MissingFields`] when a field is blank or no date is
    /// selected, [`FormError::InvalidNumber`] for counts that are not whole
    /// non-negative numbers, [`FormError::ZeroCapacity`] and
    /// [`FormError::RemainExceedsTotal`] for impossible counts.
    pub fn submit_new(&self, date: Option<&WorkshopDate>) -> Result<Submission, FormError> {
        let date = date.ok_or(FormError::MissingFields)?;
        let valid = self.validate()?;
        Ok(Submission::new(
            Action::AddTime(WorkshopTime {
                id: WorkshopTimeId::generate(),
                date_id: date.id.clone(),
                label: valid.label,
                total_slot: valid.total_slot,
                remain_slot: valid.remain_slot,
            }),
            "Time slot added",
            "New workshop time slot has been added successfully.",
        ))
    }

    /// Validate and build an `UPDATE_TIME` for `existing`, keeping its id and
    /// date.
    ///
    /// # Errors
    ///
    /// Same as [`TimeForm::submit_new`].
    pub fn submit_edit(
        &self,
        date: Option<&WorkshopDate>,
        existing: &WorkshopTime,
    ) -> Result<Submission, FormError> {
        if date.is_none() {
            return Err(FormError::MissingFields);
        }
        let valid = self.validate()?;
        Ok(Submission::new(
            Action::UpdateTime(WorkshopTime {
                id: existing.id.clone(),
                date_id: existing.date_id.clone(),
                label: valid.label,
                total_slot: valid.total_slot,
                remain_slot: valid.remain_slot,
            }),
            "Time slot updated",
            "Workshop time slot has been updated successfully.",
        ))
    }

    fn validate(&self) -> Result<ValidTime, FormError> {
        let label = self.label.trim();
        let total = self.total_slot.trim();
        let remain = self.remain_slot.trim();

        if label.is_empty() || total.is_empty() || remain.is_empty() {
            return Err(FormError::MissingFields);
        }

        let total_slot = parse_count("Total slots", total)?;
        let remain_slot = parse_count("Remaining slots", remain)?;

        if total_slot == 0 {
            return Err(FormError::ZeroCapacity);
        }
        if remain_slot > total_slot {
            return Err(FormError::RemainExceedsTotal);
        }

        Ok(ValidTime {
            label: label.to_owned(),
            total_slot,
            remain_slot,
        })
    }
}

fn parse_count(field: &'static str, raw: &str) -> Result<u32, FormError> {
    raw.parse().map_err(|_| FormError::InvalidNumber {
        field,
        value: raw.to_owned(),
    })
}
