//! Error types for relay.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use std::fmt;
use thiserror::Error;

/// The collection an id collision was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Collection {
    /// The graph's agent roster.
    Agents,
    /// The graph's tool bindings.
    Tools,
    /// The status components of the graph's status-update policy.
    StatusComponents,
    /// The `can_use` list of the named agent.
    CanUse(String),
    /// The `can_delegate_to` list of the named agent.
    CanDelegateTo(String),
    /// The `active_tools` list of the named tool binding.
    ActiveTools(String),
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collection::Agents => write!(f, "agents"),
            Collection::Tools => write!(f, "tools"),
            Collection::StatusComponents => write!(f, "status_components"),
            Collection::CanUse(agent) => write!(f, "can_use of agent '{}'", agent),
            Collection::CanDelegateTo(agent) => write!(f, "can_delegate_to of agent '{}'", agent),
            Collection::ActiveTools(binding) => {
                write!(f, "active_tools of tool binding '{}'", binding)
            }
        }
    }
}

/// Main error type for relay operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum RelayError {
    /// Bad arguments, unreadable files, or malformed YAML.
    #[error("{0}")]
    UserError(String),

    /// A graph definition is structurally invalid.
    ///
    /// `id` is the offending identifier (the dangling reference, the missing
    /// default agent, or the entry whose value is malformed).
    #[error("configuration error: {message}")]
    ConfigurationError { id: String, message: String },

    /// Two entries of one collection share an id.
    #[error("duplicate id '{id}' in {collection}")]
    DuplicateIdError { collection: Collection, id: String },

    /// Lint warnings were reported while warnings are denied.
    #[error("{0}")]
    LintFailure(String),
}

impl RelayError {
    /// Build a configuration error for `id`.
    pub fn configuration(id: impl Into<String>, message: impl Into<String>) -> Self {
        RelayError::ConfigurationError {
            id: id.into(),
            message: message.into(),
        }
    }

    /// Build a duplicate-id error.
    pub fn duplicate(collection: Collection, id: impl Into<String>) -> Self {
        RelayError::DuplicateIdError {
            collection,
            id: id.into(),
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            RelayError::UserError(_) => exit_codes::USER_ERROR,
            RelayError::ConfigurationError { .. } => exit_codes::CONFIGURATION_ERROR,
            RelayError::DuplicateIdError { .. } => exit_codes::DUPLICATE_ID,
            RelayError::LintFailure(_) => exit_codes::LINT_FAILURE,
        }
    }
}

/// Result type alias for relay operations.
pub type Result<T> = std::result::Result<T, RelayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = RelayError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn configuration_error_has_correct_exit_code() {
        let err = RelayError::configuration("missing", "dangling reference");
        assert_eq!(err.exit_code(), exit_codes::CONFIGURATION_ERROR);
    }

    #[test]
    fn duplicate_id_error_has_correct_exit_code() {
        let err = RelayError::duplicate(Collection::Agents, "router");
        assert_eq!(err.exit_code(), exit_codes::DUPLICATE_ID);
    }

    #[test]
    fn lint_failure_has_correct_exit_code() {
        let err = RelayError::LintFailure("2 warnings".to_string());
        assert_eq!(err.exit_code(), exit_codes::LINT_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = RelayError::duplicate(Collection::Agents, "router");
        assert_eq!(err.to_string(), "duplicate id 'router' in agents");

        let err = RelayError::duplicate(Collection::CanUse("grader".to_string()), "lookup");
        assert_eq!(
            err.to_string(),
            "duplicate id 'lookup' in can_use of agent 'grader'"
        );

        let err = RelayError::configuration("missing", "agent 'router' delegates to unknown agent 'missing'");
        assert_eq!(
            err.to_string(),
            "configuration error: agent 'router' delegates to unknown agent 'missing'"
        );
    }
}
