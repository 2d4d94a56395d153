//! JSON rendering of a validated graph for the orchestration runtime.
//!
//! The runtime expects camelCase keys (`defaultAgent`, `canDelegateTo`,
//! `activeTools`, ...) and tool bindings inlined into each agent. Output is
//! deterministic: agents and bindings keep definition order.

use crate::definition::{StatusComponent, StatusUpdates, Transport};
use crate::error::{RelayError, Result};
use crate::graph::{Agent, Graph, ToolBinding};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub default_agent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph_prompt: Option<String>,
    pub agents: Vec<AgentManifest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_updates: Option<StatusUpdatesManifest>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentManifest {
    pub id: String,
    pub name: String,
    pub description: String,
    pub prompt: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub can_use: Vec<ToolManifest>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub can_delegate_to: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolManifest {
    pub id: String,
    pub name: String,
    pub server_url: String,
    pub transport: Transport,
    pub active_tools: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdatesManifest {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_events: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_seconds: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub status_components: Vec<StatusComponent>,
}

impl Manifest {
    pub fn from_graph(graph: &Graph) -> Self {
        Self {
            id: graph.id().to_string(),
            name: graph.name().to_string(),
            description: graph.description().map(str::to_string),
            default_agent: graph.default_agent().id().to_string(),
            graph_prompt: graph.graph_prompt().map(str::to_string),
            agents: graph
                .agents()
                .iter()
                .map(|agent| AgentManifest::from_agent(graph, agent))
                .collect(),
            status_updates: graph.status_updates().map(StatusUpdatesManifest::from),
        }
    }

    /// Render the manifest as JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let rendered = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        rendered.map_err(|e| RelayError::UserError(format!("failed to serialize manifest: {}", e)))
    }
}

impl AgentManifest {
    fn from_agent(graph: &Graph, agent: &Agent) -> Self {
        Self {
            id: agent.id().to_string(),
            name: agent.name().to_string(),
            description: agent.description().to_string(),
            prompt: agent.prompt().to_string(),
            can_use: graph.bindings(agent).map(ToolManifest::from).collect(),
            can_delegate_to: graph
                .delegates(agent)
                .map(|target| target.id().to_string())
                .collect(),
        }
    }
}

impl From<&ToolBinding> for ToolManifest {
    fn from(binding: &ToolBinding) -> Self {
        Self {
            id: binding.id().to_string(),
            name: binding.name().to_string(),
            server_url: binding.server_url().to_string(),
            transport: binding.transport(),
            active_tools: binding.active_tools().to_vec(),
        }
    }
}

impl From<&StatusUpdates> for StatusUpdatesManifest {
    fn from(status: &StatusUpdates) -> Self {
        Self {
            enabled: status.enabled,
            num_events: status.num_events,
            time_in_seconds: status.time_in_seconds,
            model: status.model.clone(),
            prompt: status.prompt.clone(),
            status_components: status.status_components.clone(),
        }
    }
}
