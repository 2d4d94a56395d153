//! Implementation of the `relay check` command.
//!
//! Builds every selected definition independently. A failure in one file
//! does not stop the others from being checked; the first failure decides
//! the exit code.

use super::display::render_check_report;
use super::load_graph;
use crate::cli::CheckArgs;
use relay::config::Config;
use relay::definition::discover_definitions;
use relay::error::{RelayError, Result};
use relay::graph::BuildReport;
use std::path::PathBuf;

/// Result of checking one definition file.
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<BuildReport>,
}

impl FileOutcome {
    pub fn warning_count(&self) -> usize {
        self.result.as_ref().map_or(0, |report| report.warnings.len())
    }
}

/// Execute the `relay check` command.
pub fn cmd_check(args: CheckArgs, config: &Config) -> Result<()> {
    let files = collect_paths(&args.paths, config)?;
    let outcomes = check_files(&files, config);

    print!("{}", render_check_report(&outcomes));

    summarize(outcomes, args.deny_warnings || config.deny_warnings)
}

/// Expand the given paths into definition files.
///
/// Files are taken as-is; directories are scanned with the configured glob.
/// With no paths, the configured definitions directory is scanned.
pub fn collect_paths(paths: &[PathBuf], config: &Config) -> Result<Vec<PathBuf>> {
    let roots = if paths.is_empty() {
        vec![PathBuf::from(&config.definitions_dir)]
    } else {
        paths.to_vec()
    };

    let matcher = config.definitions_matcher()?;
    let mut files = Vec::new();

    for root in roots {
        if root.is_dir() {
            files.extend(discover_definitions(&root, &matcher)?);
        } else if root.is_file() {
            files.push(root);
        } else {
            return Err(RelayError::UserError(format!(
                "path '{}' does not exist",
                root.display()
            )));
        }
    }

    if files.is_empty() {
        return Err(RelayError::UserError(format!(
            "no graph definitions found (looked for '{}')",
            config.definitions_glob
        )));
    }

    Ok(files)
}

/// Build each file independently.
pub fn check_files(files: &[PathBuf], config: &Config) -> Vec<FileOutcome> {
    files
        .iter()
        .map(|path| {
            let result = load_graph(path, config);
            if let Err(e) = &result {
                tracing::debug!(path = %path.display(), error = %e, "definition failed");
            }
            FileOutcome {
                path: path.clone(),
                result,
            }
        })
        .collect()
}

/// Turn the outcomes into the command result.
///
/// The first failed file's error is returned as-is so its exit code is kept.
pub fn summarize(outcomes: Vec<FileOutcome>, deny_warnings: bool) -> Result<()> {
    let warning_count: usize = outcomes.iter().map(FileOutcome::warning_count).sum();

    if let Some(err) = outcomes.into_iter().find_map(|outcome| outcome.result.err()) {
        return Err(err);
    }

    if deny_warnings && warning_count > 0 {
        return Err(RelayError::LintFailure(format!(
            "{} warning(s) reported and warnings are denied",
            warning_count
        )));
    }

    Ok(())
}
