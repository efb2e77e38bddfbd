//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `WSC_SEED_FILE` - Snapshot (YAML or JSON) to start from when `--seed` is
//!   not given. Defaults to the built-in seed data.
//! - `WSC_STRICT` - Replay scripts with checked transitions by default
//!   (`true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`; default: false)
//! - `RUST_LOG` - Log filter (default: info)

use std::path::PathBuf;

use thiserror::Error;

const SEED_FILE_VAR: &str = "WSC_SEED_FILE";
const STRICT_VAR: &str = "WSC_STRICT";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Seed snapshot used when no `--seed` flag is passed.
    pub seed_file: Option<PathBuf>,
    /// Default for `replay --strict`.
    pub strict: bool,
}

impl CliConfig {
    /// Load configuration from the process environment.
    ///
    /// Expects `.env` to have been loaded already (see `main`).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to a value that cannot be
    /// parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let seed_file = lookup(SEED_FILE_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let strict = lookup(STRICT_VAR)
            .map(|value| parse_flag(STRICT_VAR, &value))
            .transpose()?
            .unwrap_or(false);

        Ok(Self { seed_file, strict })
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean, got '{other}'"),
        )),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<CliConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        CliConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config(&[]).unwrap(), CliConfig::default());
    }

    #[test]
    fn test_seed_file() {
        let config = config(&[("WSC_SEED_FILE", "data/seed.yaml")]).unwrap();
        assert_eq!(config.seed_file, Some(PathBuf::from("data/seed.yaml")));
    }

    #[test]
    fn test_blank_seed_file_is_ignored() {
        assert_eq!(config(&[("WSC_SEED_FILE", "  ")]).unwrap().seed_file, None);
    }

    #[test]
    fn test_strict_flag_values() {
        assert!(config(&[("WSC_STRICT", "true")]).unwrap().strict);
        assert!(config(&[("WSC_STRICT", "ON")]).unwrap().strict);
        assert!(!config(&[("WSC_STRICT", "0")]).unwrap().strict);
    }

    #[test]
    fn test_invalid_strict_flag() {
        let err = config(&[("WSC_STRICT", "maybe")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid environment variable WSC_STRICT: expected a boolean, got 'maybe'"
        );
    }
}
