//! Implementation of the `relay export` command.
//!
//! The manifest is written to stdout; lint warnings go to the diagnostic log
//! so the output stays valid JSON.

use super::load_graph;
use crate::cli::ExportArgs;
use relay::config::Config;
use relay::error::{RelayError, Result};
use relay::manifest::Manifest;
use std::path::Path;

/// Execute the `relay export` command.
pub fn cmd_export(args: ExportArgs, config: &Config) -> Result<()> {
    println!("{}", export_file(&args.file, config, !args.compact)?);
    Ok(())
}

pub fn export_file(path: &Path, config: &Config, pretty: bool) -> Result<String> {
    let report = load_graph(path, config)?;

    for warning in &report.warnings {
        tracing::warn!(graph = %report.graph.id(), "{}", warning);
    }

    if config.deny_warnings && report.has_warnings() {
        return Err(RelayError::LintFailure(format!(
            "refusing to export '{}': {} warning(s) reported and warnings are denied",
            report.graph.id(),
            report.warnings.len()
        )));
    }

    Manifest::from_graph(&report.graph).to_json(pretty)
}
