//! Command implementations for relay.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every command resolves the config first, then loads
//! and builds graph definitions the same way.

mod check;
mod display;
mod export;
mod inspect;
mod scope;


use crate::cli::{Cli, Command};
use relay::config::Config;
use relay::definition::GraphDefinition;
use relay::error::{RelayError, Result};
use relay::graph::BuildReport;
use std::path::Path;

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().map_err(|e| {
        RelayError::UserError(format!("failed to determine working directory: {}", e))
    })?;
    let config = Config::resolve(cli.config.as_deref(), &cwd)?;

    match cli.command {
        Command::Check(args) => check::cmd_check(args, &config),
        Command::Inspect(args) => inspect::cmd_inspect(args, &config),
        Command::Scope(args) => scope::cmd_scope(args, &config),
        Command::Export(args) => export::cmd_export(args, &config),
    }
}

/// Load and build one definition file, dropping lints the config allows.
pub(crate) fn load_graph(path: &Path, config: &Config) -> Result<BuildReport> {
    let definition = GraphDefinition::load(path)?;
    let mut report = definition.build()?;
    report.warnings = config.filter_warnings(report.warnings);
    Ok(report)
}
