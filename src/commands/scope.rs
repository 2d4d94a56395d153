//! Implementation of the `relay scope` command.

use super::display::render_scope;
use super::load_graph;
use crate::cli::ScopeArgs;
use relay::config::Config;
use relay::error::Result;
use relay::scope::resolve_tool_scope;
use std::path::Path;

/// Execute the `relay scope` command.
pub fn cmd_scope(args: ScopeArgs, config: &Config) -> Result<()> {
    print!("{}", scope_file(&args.file, &args.agent_id, config)?);
    Ok(())
}

pub fn scope_file(path: &Path, agent_id: &str, config: &Config) -> Result<String> {
    let report = load_graph(path, config)?;
    let scope = resolve_tool_scope(&report.graph, agent_id)?;
    Ok(render_scope(&report.graph, agent_id, &scope))
}
