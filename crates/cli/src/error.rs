//! Unified error handling for the CLI.

use std::path::PathBuf;

use thiserror::Error;
use workshop_console_core::RejectedAction;

use crate::config::ConfigError;

/// Errors that can end a CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Environment configuration is malformed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// An input file does not exist.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// A file could not be read or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A YAML document could not be parsed.
    #[error("Invalid YAML in {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// A JSON document could not be parsed or produced.
    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A strict replay refused an action.
    #[error("Action #{index} ({kind}) rejected: {source}")]
    Rejected {
        index: usize,
        kind: &'static str,
        source: RejectedAction,
    },

    /// The checked state breaks one or more invariants.
    #[error("{0} invariant violation(s) found")]
    Inconsistent(usize),
}
