//! Reading snapshots and action scripts, writing snapshots.
//!
//! Files ending in `.json` are read as JSON; everything else as YAML.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::info;
use workshop_console_core::{Action, AppState};

use crate::error::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

impl Format {
    fn of(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Load the starting state, or the built-in seed when `path` is `None`.
///
/// # Errors
///
/// Returns an error if the file is missing or does not parse as an `AppState`.
pub async fn load_state(path: Option<&Path>) -> Result<AppState, CliError> {
    let Some(path) = path else {
        info!("Using built-in seed data");
        return Ok(AppState::seeded());
    };

    let state: AppState = read_document(path).await?;
    info!(
        path = %path.display(),
        dates = state.workshop_dates.len(),
        times = state.workshop_times.len(),
        registrations = state.customer_registrations.len(),
        "Loaded snapshot"
    );
    Ok(state)
}

/// Load an action script: a list of `{type, payload}` documents.
///
/// # Errors
///
/// Returns an error if the file is missing or is not a list of actions.
pub async fn load_script(path: &Path) -> Result<Vec<Action>, CliError> {
    let actions: Vec<Action> = read_document(path).await?;
    info!(path = %path.display(), actions = actions.len(), "Loaded action script");
    Ok(actions)
}

/// Write `state` to `path` as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub async fn write_snapshot(path: &Path, state: &AppState) -> Result<(), CliError> {
    let body = serde_json::to_string_pretty(state).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    tokio::fs::write(path, body)
        .await
        .map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    info!(path = %path.display(), "Wrote snapshot");
    Ok(())
}

async fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    if !path.exists() {
        return Err(CliError::NotFound(path.to_path_buf()));
    }

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    parse_document(path.to_path_buf(), &content)
}

fn parse_document<T: DeserializeOwned>(path: PathBuf, content: &str) -> Result<T, CliError> {
    match Format::of(&path) {
        Format::Json => serde_json::from_str(content).map_err(|source| CliError::Json { path, source }),
        Format::Yaml => serde_yaml::from_str(content).map_err(|source| CliError::Yaml { path, source }),
    }
}
