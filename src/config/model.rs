//! Config struct definition and default implementation.

use super::types::*;
use crate::lint::LintKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration for the relay CLI.
///
/// This struct represents the contents of `relay.yaml`.
/// Unknown fields in the YAML are preserved for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Lint settings
    // =========================================================================
    /// Treat lint warnings as failures.
    #[serde(default)]
    pub deny_warnings: bool,

    /// Lint kinds that are never reported.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allow_lints: Vec<LintKind>,

    // =========================================================================
    // Discovery settings
    // =========================================================================
    /// Directory scanned by `relay check` when no paths are given.
    #[serde(default = "default_definitions_dir")]
    pub definitions_dir: String,

    /// Glob, relative to a scanned directory, selecting definition files.
    #[serde(default = "default_definitions_glob")]
    pub definitions_glob: String,

    /// Unknown fields preserved for forward compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            deny_warnings: false,
            allow_lints: Vec::new(),
            definitions_dir: default_definitions_dir(),
            definitions_glob: default_definitions_glob(),
            extra: BTreeMap::new(),
        }
    }
}
