//! Non-fatal findings reported alongside a built graph.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of lint warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LintKind {
    /// Agent cannot be reached from the default agent.
    UnreachableAgent,
    /// Agent lists itself as a delegation target.
    SelfDelegation,
    /// Tool binding exposes no operations.
    EmptyToolScope,
    /// Tool binding is not referenced by any agent.
    UnusedBinding,
}

impl LintKind {
    /// Parse a lint kind from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "unreachable_agent" => Some(Self::UnreachableAgent),
            "self_delegation" => Some(Self::SelfDelegation),
            "empty_tool_scope" => Some(Self::EmptyToolScope),
            "unused_binding" => Some(Self::UnusedBinding),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LintKind::UnreachableAgent => "unreachable_agent",
            LintKind::SelfDelegation => "self_delegation",
            LintKind::EmptyToolScope => "empty_tool_scope",
            LintKind::UnusedBinding => "unused_binding",
        }
    }
}

impl fmt::Display for LintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lint warning about one agent or tool binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintWarning {
    pub kind: LintKind,
    /// Id of the agent or binding the warning is about.
    pub subject: String,
    pub message: String,
}

impl LintWarning {
    pub fn unreachable_agent(agent: &str, default_agent: &str) -> Self {
        Self {
            kind: LintKind::UnreachableAgent,
            subject: agent.to_string(),
            message: format!(
                "agent '{}' is not reachable from default agent '{}'",
                agent, default_agent
            ),
        }
    }

    pub fn self_delegation(agent: &str) -> Self {
        Self {
            kind: LintKind::SelfDelegation,
            subject: agent.to_string(),
            message: format!("agent '{}' lists itself in can_delegate_to", agent),
        }
    }

    pub fn empty_tool_scope(binding: &str) -> Self {
        Self {
            kind: LintKind::EmptyToolScope,
            subject: binding.to_string(),
            message: format!(
                "tool binding '{}' has no active_tools and grants no operations",
                binding
            ),
        }
    }

    pub fn unused_binding(binding: &str) -> Self {
        Self {
            kind: LintKind::UnusedBinding,
            subject: binding.to_string(),
            message: format!("tool binding '{}' is not used by any agent", binding),
        }
    }
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}
