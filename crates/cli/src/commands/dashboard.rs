//! Dashboard summary.
//!
//! # Usage
//!
//! ```bash
//! wsc dashboard
//! wsc --seed data/august.yaml dashboard
//! ```

use tracing::info;
use workshop_console_core::AppState;
use workshop_console_core::views::{
    DashboardStats, registrations_by_date, registrations_by_time,
};

/// Log the dashboard cards and the per-date / per-time registration counts.
pub fn show(state: &AppState) {
    info!("Dashboard");
    info!("=========");
    for line in report(state) {
        info!("{line}");
    }
}

fn report(state: &AppState) -> Vec<String> {
    let stats = DashboardStats::from_state(state);

    let mut lines = vec![
        format!("Total customers: {}", stats.total_customers),
        format!("Total slots: {}", stats.total_slots),
        format!("Remaining slots: {}", stats.remaining_slots),
        format!("Sessions: {}", stats.total_sessions),
        stats.occupancy_percent().map_or_else(
            || "Occupancy: n/a (no capacity)".to_owned(),
            |percent| format!("Occupancy: {percent}%"),
        ),
        "Registrations by date:".to_owned(),
    ];
    lines.extend(
        registrations_by_date(state)
            .into_iter()
            .map(|count| format!("  {}: {}", count.label, count.registrations)),
    );
    lines.push("Registrations by time:".to_owned());
    lines.extend(
        registrations_by_time(state)
            .into_iter()
            .map(|count| format!("  {}: {}", count.label, count.registrations)),
    );
    lines
}
