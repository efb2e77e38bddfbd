//! Workshop dates and the bookable time windows attached to them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{WorkshopDateId, WorkshopTimeId};

/// Format used for date labels (`2025-08-20`).
pub const DATE_LABEL_FORMAT: &str = "%Y-%m-%d";

/// One bookable workshop day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkshopDate {
    /// Unique date ID.
    pub id: WorkshopDateId,
    /// Calendar day of the workshop.
    pub date: NaiveDate,
}

impl WorkshopDate {
    /// Create a workshop date.
    #[must_use]
    pub fn new(id: impl Into<WorkshopDateId>, date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            date,
        }
    }

    /// Human-readable label, as stored on registrations.
    #[must_use]
    pub fn label(&self) -> String {
        self.date.format(DATE_LABEL_FORMAT).to_string()
    }
}

/// One bookable time window within a workshop date.
///
/// `remain_slot <= total_slot` is expected but not enforced by the type;
/// see [`crate::invariants`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkshopTime {
    /// Unique time slot ID.
    pub id: WorkshopTimeId,
    /// Date this window belongs to.
    pub date_id: WorkshopDateId,
    /// Display label, e.g. `09:00-10:00`.
    pub label: String,
    /// Seat capacity.
    pub total_slot: u32,
    /// Seats still available.
    pub remain_slot: u32,
}

impl WorkshopTime {
    /// Seats already taken. Zero when the window is over-reported.
    #[must_use]
    pub const fn booked(&self) -> u32 {
        self.total_slot.saturating_sub(self.remain_slot)
    }

    /// Whether `remain_slot` lies within `[0, total_slot]`.
    #[must_use]
    pub const fn within_capacity(&self) -> bool {
        self.remain_slot <= self.total_slot
    }

    /// No seats left to book.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.remain_slot == 0
    }
}
