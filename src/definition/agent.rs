//! Agent definitions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A conversational role as written in a graph definition.
///
/// References to tools and peer agents are by id; they are resolved when the
/// graph is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentDefinition {
    /// Identifier, unique within the graph.
    pub id: String,

    /// Human-readable name.
    #[serde(default)]
    pub name: String,

    /// One-line description of the role.
    #[serde(default)]
    pub description: String,

    /// Behavioral instructions, passed through to the runtime untouched.
    #[serde(default)]
    pub prompt: String,

    /// Ids of tool bindings this agent may invoke.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub can_use: Vec<String>,

    /// Ids of agents this agent may transfer the conversation to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub can_delegate_to: Vec<String>,

    /// Unknown fields preserved for forward compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl AgentDefinition {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn can_use<I, S>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.can_use = tools.into_iter().map(Into::into).collect();
        self
    }

    pub fn can_delegate_to<I, S>(mut self, agents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.can_delegate_to = agents.into_iter().map(Into::into).collect();
        self
    }
}
