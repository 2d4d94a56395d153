//! Config loading, validation, and utility operations.

use super::model::Config;
use super::types::DEFAULT_CONFIG_FILE;
use crate::error::{RelayError, Result};
use crate::lint::LintWarning;
use globset::{Glob, GlobMatcher};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are preserved for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(RelayError::UserError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            RelayError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the effective config.
    ///
    /// An explicitly given path must exist. Otherwise `relay.yaml` in `dir` is
    /// used when present, and defaults apply when it is not.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "loading config");
            return Self::load(path);
        }

        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "loading config");
            return Self::load(candidate);
        }

        tracing::debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| RelayError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| RelayError::UserError(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `definitions_dir` must be non-empty
    /// - `definitions_glob` must be a valid glob
    pub fn validate(&self) -> Result<()> {
        if self.definitions_dir.trim().is_empty() {
            return Err(RelayError::UserError(
                "config validation failed: definitions_dir must be non-empty".to_string(),
            ));
        }

        self.definitions_matcher()?;

        Ok(())
    }

    /// Compile `definitions_glob`.
    pub fn definitions_matcher(&self) -> Result<GlobMatcher> {
        Glob::new(&self.definitions_glob)
            .map(|glob| glob.compile_matcher())
            .map_err(|e| {
                RelayError::UserError(format!(
                    "config validation failed: invalid definitions_glob '{}': {}",
                    self.definitions_glob, e
                ))
            })
    }

    /// Drop warnings whose kind is listed in `allow_lints`.
    pub fn filter_warnings(&self, warnings: Vec<LintWarning>) -> Vec<LintWarning> {
        warnings
            .into_iter()
            .filter(|w| !self.allow_lints.contains(&w.kind))
            .collect()
    }
}
