//! Discovery of graph definition files under a directory.

use crate::error::{RelayError, Result};
use globset::GlobMatcher;
use std::path::{Path, PathBuf};

/// Find every definition file under `dir` whose path relative to `dir`
/// matches `matcher`.
///
/// Paths are matched with forward slashes and returned sorted, so repeated
/// runs visit definitions in the same order.
pub fn discover_definitions(dir: &Path, matcher: &GlobMatcher) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(RelayError::UserError(format!(
            "definitions directory '{}' does not exist or is not a directory",
            dir.display()
        )));
    }

    let mut found = Vec::new();
    walk(dir, dir, matcher, &mut found)?;
    found.sort();

    tracing::debug!(
        dir = %dir.display(),
        count = found.len(),
        "discovered graph definitions"
    );

    Ok(found)
}

fn walk(root: &Path, dir: &Path, matcher: &GlobMatcher, found: &mut Vec<PathBuf>) -> Result<()> {
    let entries = std::fs::read_dir(dir).map_err(|e| {
        RelayError::UserError(format!("failed to read directory '{}': {}", dir.display(), e))
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| {
            RelayError::UserError(format!("failed to read directory '{}': {}", dir.display(), e))
        })?;
        let path = entry.path();

        if path.is_dir() {
            walk(root, &path, matcher, found)?;
            continue;
        }

        let relative = path
            .strip_prefix(root)
            .unwrap_or(&path)
            .to_string_lossy()
            .replace('\\', "/");

        if matcher.is_match(&relative) {
            found.push(path);
        }
    }

    Ok(())
}
