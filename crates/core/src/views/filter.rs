//! Customer list search and filters.

use crate::models::CustomerRegistration;
use crate::store::AppState;

/// Search term plus optional date and time filters, all ANDed.
///
/// ```
/// use workshop_console_core::store::AppState;
/// use workshop_console_core::views::RegistrationFilter;
///
/// let state = AppState::seeded();
/// let filter = RegistrationFilter::default()
///     .with_search("tran")
///     .with_date("2025-08-20");
/// let rows = filter.apply(&state.customer_registrations);
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].parent_name, "Tran Thi B");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationFilter {
    /// Matched case-insensitively against the parent name, and as a plain
    /// substring against the parent phone. Empty matches everything.
    pub search: String,
    /// Exact date label, or `None` for all dates.
    pub date_label: Option<String>,
    /// Exact time label, or `None` for all times.
    pub time_label: Option<String>,
}

impl RegistrationFilter {
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    #[must_use]
    pub fn with_date(mut self, date_label: impl Into<String>) -> Self {
        self.date_label = Some(date_label.into());
        self
    }

    #[must_use]
    pub fn with_time(mut self, time_label: impl Into<String>) -> Self {
        self.time_label = Some(time_label.into());
        self
    }

    /// Whether any search term or filter is set.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.search.is_empty() || self.date_label.is_some() || self.time_label.is_some()
    }

    #[must_use]
    pub fn matches(&self, registration: &CustomerRegistration) -> bool {
        self.matches_search(registration)
            && self
                .date_label
                .as_ref()
                .is_none_or(|label| registration.workshop_date_label == *label)
            && self
                .time_label
                .as_ref()
                .is_none_or(|label| registration.workshop_time_label == *label)
    }

    /// Matching registrations, in their original order.
    #[must_use]
    pub fn apply<'a>(
        &self,
        registrations: &'a [CustomerRegistration],
    ) -> Vec<&'a CustomerRegistration> {
        registrations.iter().filter(|r| self.matches(r)).collect()
    }

    fn matches_search(&self, registration: &CustomerRegistration) -> bool {
        if self.search.is_empty() {
            return true;
        }
        registration
            .parent_name
            .to_lowercase()
            .contains(&self.search.to_lowercase())
            || registration.parent_phone.contains(&self.search)
    }
}

/// The filtered customer list together with what the page says about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationList<'a> {
    pub rows: Vec<&'a CustomerRegistration>,
    pub total: usize,
    filtered: bool,
}

impl RegistrationList<'_> {
    /// "Showing X of Y registrations".
    #[must_use]
    pub fn summary(&self) -> String {
        format!("Showing {} of {} registrations", self.rows.len(), self.total)
    }

    /// Message for an empty result, or `None` when there are rows.
    #[must_use]
    pub fn empty_message(&self) -> Option<&'static str> {
        if !self.rows.is_empty() {
            None
        } else if self.filtered {
            Some("Try adjusting your search or filters")
        } else {
            Some("No customer registrations available yet")
        }
    }
}

/// Apply `filter` to the registrations in `state`.
#[must_use]
pub fn filter_registrations<'a>(
    state: &'a AppState,
    filter: &RegistrationFilter,
) -> RegistrationList<'a> {
    RegistrationList {
        rows: filter.apply(&state.customer_registrations),
        total: state.customer_registrations.len(),
        filtered: filter.is_active(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(rows: &[&CustomerRegistration]) -> Vec<String> {
        rows.iter().map(|r| r.parent_name.clone()).collect()
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let state = AppState::seeded();
        let list = filter_registrations(&state, &RegistrationFilter::default());
        assert_eq!(list.rows.len(), 3);
        assert_eq!(list.summary(), "Showing 3 of 3 registrations");
        assert_eq!(list.empty_message(), None);
    }

    #[test]
    fn test_search_is_case_insensitive_on_name() {
        let state = AppState::seeded();
        let rows = RegistrationFilter::default()
            .with_search("VAN")
            .apply(&state.customer_registrations);
        assert_eq!(names(&rows), ["Nguyen Van A", "Le Van C"]);
    }

    #[test]
    fn test_search_matches_phone() {
        let state = AppState::seeded();
        let rows = RegistrationFilter::default()
            .with_search("0903")
            .apply(&state.customer_registrations);
        assert_eq!(names(&rows), ["Le Van C"]);
    }

    #[test]
    fn test_filters_are_anded() {
        let state = AppState::seeded();
        let rows = RegistrationFilter::default()
            .with_date("2025-08-20")
            .with_time("10:00-11:00")
            .apply(&state.customer_registrations);
        assert_eq!(names(&rows), ["Tran Thi B"]);

        let rows = RegistrationFilter::default()
            .with_search("le van")
            .with_date("2025-08-20")
            .apply(&state.customer_registrations);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_empty_messages() {
        let state = AppState::seeded();
        let filtered = filter_registrations(
            &state,
            &RegistrationFilter::default().with_search("nobody"),
        );
        assert_eq!(
            filtered.empty_message(),
            Some("Try adjusting your search or filters")
        );

        let empty = AppState::default();
        let unfiltered = filter_registrations(&empty, &RegistrationFilter::default());
        assert_eq!(
            unfiltered.empty_message(),
            Some("No customer registrations available yet")
        );
        assert_eq!(unfiltered.summary(), "Showing 0 of 0 registrations");
    }
}
