//! CLI argument parsing for relay.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Relay: validator and exporter for declarative agent graphs.
///
/// Graph definitions are YAML files describing agents, the tool bindings
/// each agent may call, and who may hand a conversation to whom.
#[derive(Parser, Debug)]
#[command(name = "relay")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file (default: relay.yaml in the working directory, if present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print debug diagnostics to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for relay.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build and lint graph definitions.
    ///
    /// Accepts definition files and directories. Directories are scanned
    /// with the configured glob. Without paths, the configured
    /// definitions directory is scanned.
    Check(CheckArgs),

    /// Show the agents, delegation edges, reachability, and tool scopes of a graph.
    Inspect(InspectArgs),

    /// Show the remote operations one agent is permitted to invoke.
    Scope(ScopeArgs),

    /// Print the runtime manifest of a graph as JSON.
    Export(ExportArgs),
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Definition files or directories to check.
    pub paths: Vec<PathBuf>,

    /// Fail when any lint warning is reported.
    #[arg(long)]
    pub deny_warnings: bool,
}

/// Arguments for the `inspect` command.
#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Graph definition file.
    pub file: PathBuf,
}

/// Arguments for the `scope` command.
#[derive(Parser, Debug)]
pub struct ScopeArgs {
    /// Graph definition file.
    pub file: PathBuf,

    /// Agent whose tool scope to resolve.
    pub agent_id: String,
}

/// Arguments for the `export` command.
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Graph definition file.
    pub file: PathBuf,

    /// Emit single-line JSON instead of pretty-printed output.
    #[arg(long)]
    pub compact: bool,
}
