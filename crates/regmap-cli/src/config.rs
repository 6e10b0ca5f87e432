//! # Configuration
//!
//! Optional `regmap.yaml`. Every field has a default, so an absent file and
//! an empty file behave the same. Command-line flags override the file.
//!
//! ```yaml
//! default_jurisdictions: [eu-ai-act, eu-gdpr, uk]
//! include_best_practices: true
//! as_of: 2025-01-01
//! log_format: json
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "regmap.yaml";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Settings read from `regmap.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Targets used when neither the command line nor the product context
    /// names any.
    pub default_jurisdictions: Vec<String>,
    /// Add best-practice actions to every plan.
    pub include_best_practices: bool,
    /// Pinned evaluation date; today (UTC) when unset.
    pub as_of: Option<NaiveDate>,
    pub log_format: LogFormat,
}

impl Config {
    /// Parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&raw)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }

    /// Load `explicit` if given, else `./regmap.yaml` if present, else
    /// defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    tracing::debug!(path = %fallback.display(), "using config from working directory");
                    Self::load(&fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("regmap.yaml");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn full_config_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "default_jurisdictions: [eu-ai-act, uk]\n\
             include_best_practices: true\n\
             as_of: 2025-03-01\n\
             log_format: json\n",
        );
        let config = Config::load(&path).unwrap();
        assert_eq!(config.default_jurisdictions, vec!["eu-ai-act", "uk"]);
        assert!(config.include_best_practices);
        assert_eq!(config.as_of, NaiveDate::from_ymd_opt(2025, 3, 1));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn empty_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "\n");
        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "include_best_practices: true\n");
        let config = Config::load(&path).unwrap();
        assert!(config.include_best_practices);
        assert!(config.default_jurisdictions.is_empty());
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "jurisdictions: [uk]\n");
        let err = Config::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse config"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        let err = Config::resolve(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }
}
