//! Configuration model for relay.
//!
//! This module defines the Config struct that represents `relay.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are preserved),
//! sensible defaults for optional fields, and validation of config values.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use types::DEFAULT_CONFIG_FILE;
