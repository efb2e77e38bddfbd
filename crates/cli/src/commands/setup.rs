//! Workshop setup listing.

use tracing::{info, warn};
use workshop_console_core::views::setup_view;
use workshop_console_core::{AppState, WorkshopTime};

/// Log every date with its time slots.
pub fn show(state: &AppState) {
    let lines = listing(state);
    if lines.is_empty() {
        info!("No workshop dates configured");
        return;
    }

    info!("Workshop Setup");
    info!("==============");
    for line in &lines {
        info!("{line}");
    }

    for time in state.workshop_times.iter().filter(|t| !t.within_capacity()) {
        warn!(time_id = %time.id, "Remaining slots exceed total slots");
    }
}

/// One line per date followed by an indented line per time slot.
fn listing(state: &AppState) -> Vec<String> {
    let mut lines = Vec::new();
    for card in setup_view(state) {
        lines.push(format!("{} ({})", card.date.label(), card.summary()));
        lines.extend(card.times.iter().copied().map(slot_line));
    }
    lines
}

fn slot_line(time: &WorkshopTime) -> String {
    let status = if time.is_full() {
        "full".to_owned()
    } else {
        format!("{} booked", time.booked())
    };
    format!(
        "  {}  {}/{} remaining, {status}",
        time.label, time.remain_slot, time.total_slot
    )
}
