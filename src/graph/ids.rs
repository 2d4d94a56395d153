//! Identifier format checks.

use crate::error::{RelayError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Ids start with an ASCII letter or digit, followed by letters, digits,
/// `_`, `-`, or `.`.
static ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.\-]*$").expect("Invalid identifier regex")
});

/// Check that `id` is a well-formed identifier for an entry of kind `what`.
pub(crate) fn validate_id(id: &str, what: &str) -> Result<()> {
    if id.is_empty() {
        return Err(RelayError::configuration(
            id,
            format!("{} id cannot be empty", what),
        ));
    }

    if !ID_REGEX.is_match(id) {
        return Err(RelayError::configuration(
            id,
            format!(
                "{} id '{}' is malformed (use letters, digits, '_', '-', or '.')",
                what, id
            ),
        ));
    }

    Ok(())
}
