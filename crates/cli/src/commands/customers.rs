//! Customer registration listing.
//!
//! # Usage
//!
//! ```bash
//! wsc customers --search tran --date 2025-08-20
//! wsc customers --time 14:00-15:00
//! ```

use tracing::info;
use workshop_console_core::AppState;
use workshop_console_core::views::{RegistrationFilter, filter_registrations};

/// Build the filter from the command-line options.
#[must_use]
pub fn build_filter(
    search: Option<String>,
    date: Option<String>,
    time: Option<String>,
) -> RegistrationFilter {
    let mut filter = RegistrationFilter::default();
    if let Some(search) = search {
        filter = filter.with_search(search);
    }
    if let Some(date) = date {
        filter = filter.with_date(date);
    }
    if let Some(time) = time {
        filter = filter.with_time(time);
    }
    filter
}

/// Log the registrations matching `filter`.
pub fn show(state: &AppState, filter: &RegistrationFilter) {
    let list = filter_registrations(state, filter);

    info!("Customers");
    info!("=========");
    for row in &list.rows {
        info!(
            "  {} | {} ({}) | {} {} | {} | bill {}",
            row.parent_name,
            row.child_name,
            row.child_age,
            row.workshop_date_label,
            row.workshop_time_label,
            row.parent_phone,
            row.bill_number
        );
    }
    if let Some(message) = list.empty_message() {
        info!("{message}");
    }
    info!("{}", list.summary());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter() {
        let state = AppState::seeded();
        let filter = build_filter(Some("tran".into()), Some("2025-08-20".into()), None);
        let list = filter_registrations(&state, &filter);
        assert_eq!(list.rows.len(), 1);
        assert_eq!(list.rows[0].parent_name, "Tran Thi B");

        assert!(!build_filter(None, None, None).is_active());
    }
}
