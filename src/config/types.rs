//! Configuration defaults for relay.

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "relay.yaml";

// Default value functions for serde
pub(crate) fn default_definitions_dir() -> String {
    "graphs".to_string()
}
pub(crate) fn default_definitions_glob() -> String {
    "**/*.graph.{yaml,yml}".to_string()
}
