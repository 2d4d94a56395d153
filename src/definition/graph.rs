//! Graph definition documents.

use super::agent::AgentDefinition;
use super::status::StatusUpdates;
use super::tool::ToolBindingDefinition;
use crate::error::{RelayError, Result};
use crate::graph::{BuildReport, build_graph};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// An unvalidated graph, as read from a `*.graph.yaml` file.
///
/// Unknown fields are preserved for forward compatibility. Nothing here is
/// checked until [`GraphDefinition::build`] runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDefinition {
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Entry point for new conversations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_agent: Option<String>,

    /// Norms applied across every agent in the graph.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph_prompt: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<ToolBindingDefinition>,

    #[serde(default)]
    pub agents: Vec<AgentDefinition>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_updates: Option<StatusUpdates>,

    /// Unknown fields preserved for forward compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl GraphDefinition {
    /// Load a graph definition from a YAML file.
    ///
    /// The definition is parsed but not built.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            RelayError::UserError(format!(
                "failed to read graph definition '{}': {}",
                path.display(),
                e
            ))
        })?;

        serde_yaml::from_str(&content).map_err(|e| {
            RelayError::UserError(format!(
                "failed to parse graph definition '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Parse a graph definition from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| RelayError::UserError(format!("failed to parse graph definition: {}", e)))
    }

    /// Serialize the definition to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            RelayError::UserError(format!("failed to serialize graph definition: {}", e))
        })
    }

    /// Validate the definition and assemble an immutable graph.
    pub fn build(&self) -> Result<BuildReport> {
        build_graph(self)
    }
}
