//! Consistency check over a snapshot.

use tracing::{error, info};
use workshop_console_core::{AppState, check_invariants};

use crate::error::CliError;

/// Log every invariant violation in `state`.
///
/// # Errors
///
/// Returns [`CliError::Inconsistent`] if any violation is found.
pub fn run(state: &AppState) -> Result<(), CliError> {
    let violations = check_invariants(state);
    if violations.is_empty() {
        info!("State is consistent");
        return Ok(());
    }

    error!("Consistency check failed:");
    for violation in &violations {
        error!("  - {violation}");
    }
    Err(CliError::Inconsistent(violations.len()))
}
