//! Customer registrations.

use serde::{Deserialize, Serialize};

use crate::types::RegistrationId;

/// A completed workshop booking.
///
/// The workshop date and time are stored as their display labels, not as
/// ids. Editing a date or time later does not rewrite existing registrations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRegistration {
    /// Unique registration ID.
    pub id: RegistrationId,
    /// Parent's full name.
    pub parent_name: String,
    /// Child's name.
    pub child_name: String,
    /// Child's age in years.
    pub child_age: u32,
    /// Date label at booking time (e.g. `2025-08-20`).
    pub workshop_date_label: String,
    /// Time label at booking time (e.g. `09:00-10:00`).
    pub workshop_time_label: String,
    /// Parent's phone number.
    pub parent_phone: String,
    /// Link to the uploaded bill image.
    pub bill_image_ref: String,
    /// Bill number printed on the receipt.
    pub bill_number: String,
}
