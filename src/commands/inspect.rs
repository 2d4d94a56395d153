//! Implementation of the `relay inspect` command.

use super::display::render_inspect;
use super::load_graph;
use crate::cli::InspectArgs;
use relay::config::Config;
use relay::delegation::analyze_delegation;
use relay::error::Result;
use std::path::Path;

/// Execute the `relay inspect` command.
pub fn cmd_inspect(args: InspectArgs, config: &Config) -> Result<()> {
    print!("{}", inspect_file(&args.file, config)?);
    Ok(())
}

pub fn inspect_file(path: &Path, config: &Config) -> Result<String> {
    let report = load_graph(path, config)?;
    let delegation = analyze_delegation(&report.graph);
    Ok(render_inspect(&report.graph, &delegation, &report.warnings))
}
