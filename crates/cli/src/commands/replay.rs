//! Replay an action script against a snapshot.
//!
//! # Usage
//!
//! ```bash
//! # Apply every action as-is
//! wsc replay scripts/august.yaml
//!
//! # Stop at the first action that would break a capacity bound
//! wsc replay scripts/august.yaml --strict --output after.json
//! ```
//!
//! A script is a YAML or JSON list of `{type, payload}` actions:
//!
//! ```yaml
//! - type: DELETE_DATE
//!   payload: "1"
//! - type: ADJUST_REMAINING
//!   payload: { time_id: "3", remain_slot: 5 }
//! ```

use std::sync::Arc;

use tracing::{info, warn};
use workshop_console_core::forms::Notice;
use workshop_console_core::{Action, AppState, Store};

use crate::error::CliError;

/// What a replay did.
#[derive(Debug)]
pub struct ReplayOutcome {
    pub state: Arc<AppState>,
    /// Actions that produced a new snapshot.
    pub applied: usize,
    /// Actions that left the snapshot unchanged.
    pub unchanged: usize,
}

/// Dispatch `actions` in order through a [`Store`].
///
/// In strict mode each action goes through the checked transition and the
/// first rejection aborts the replay.
///
/// # Errors
///
/// Returns [`CliError::Rejected`] for the first refused action in strict mode.
pub fn run(initial: AppState, actions: Vec<Action>, strict: bool) -> Result<ReplayOutcome, CliError> {
    let mut store = Store::new(initial);
    let mut applied = 0;
    let mut unchanged = 0;

    for (index, action) in actions.into_iter().enumerate() {
        let kind = action.kind();
        if matches!(action, Action::Unrecognized) {
            warn!(index, "Skipping unrecognized action");
        }
        let notice = Notice::for_deletion(&action);

        let before = store.snapshot();
        let after = if strict {
            store
                .try_dispatch(action)
                .map_err(|source| CliError::Rejected {
                    index,
                    kind,
                    source,
                })?
        } else {
            store.dispatch(action)
        };

        if Arc::ptr_eq(&before, &after) {
            unchanged += 1;
        } else {
            applied += 1;
            if let Some(notice) = notice {
                info!(index, "{}: {}", notice.title, notice.description);
            }
        }
    }

    Ok(ReplayOutcome {
        state: store.snapshot(),
        applied,
        unchanged,
    })
}

/// Log a replay summary.
pub fn report(outcome: &ReplayOutcome) {
    info!("Replay complete");
    info!("  Actions applied: {}", outcome.applied);
    info!("  Actions without effect: {}", outcome.unchanged);
    info!("  Dates: {}", outcome.state.workshop_dates.len());
    info!("  Time slots: {}", outcome.state.workshop_times.len());
    info!("  Registrations: {}", outcome.state.customer_registrations.len());
}
