//! Validated agent graphs.
//!
//! A [`Graph`] is the immutable result of building a
//! [`GraphDefinition`](crate::definition::GraphDefinition). Agents and tool
//! bindings live in arenas; delegation edges and tool references are arena
//! indices, so traversal never chases ids through maps.
//!
//! ```
//! use relay::definition::{AgentDefinition, ToolBindingDefinition};
//! use relay::graph::GraphBuilder;
//!
//! let report = GraphBuilder::new("weather-graph", "Weather graph")
//!     .default_agent("weather-assistant")
//!     .tool(
//!         ToolBindingDefinition::new("forecast", "Forecast", "https://forecast.example/mcp")
//!             .with_active_tools(["get_forecast"]),
//!     )
//!     .agent(AgentDefinition::new("weather-assistant", "Weather assistant").can_delegate_to(["forecaster"]))
//!     .agent(AgentDefinition::new("forecaster", "Forecaster").can_use(["forecast"]))
//!     .build()?;
//!
//! assert!(report.warnings.is_empty());
//! assert_eq!(report.graph.default_agent().id(), "weather-assistant");
//! # Ok::<(), relay::error::RelayError>(())
//! ```

mod builder;
mod ids;

#[cfg(test)]
mod tests;

pub use builder::{BuildReport, GraphBuilder, build_graph};

use crate::definition::{StatusUpdates, Transport};
use std::collections::BTreeMap;

/// Position of an agent in its graph's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentIdx(usize);

impl AgentIdx {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Position of a tool binding in its graph's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToolIdx(usize);

impl ToolIdx {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A validated tool binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolBinding {
    id: String,
    name: String,
    server_url: String,
    transport: Transport,
    active_tools: Vec<String>,
}

impl ToolBinding {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalized server address.
    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn transport(&self) -> Transport {
        self.transport
    }

    pub fn active_tools(&self) -> &[String] {
        &self.active_tools
    }
}

/// A validated agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Agent {
    id: String,
    name: String,
    description: String,
    prompt: String,
    can_use: Vec<ToolIdx>,
    can_delegate_to: Vec<AgentIdx>,
}

impl Agent {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn can_use(&self) -> &[ToolIdx] {
        &self.can_use
    }

    pub fn can_delegate_to(&self) -> &[AgentIdx] {
        &self.can_delegate_to
    }

    /// Terminal agents cannot hand the conversation to anyone else.
    pub fn is_terminal(&self) -> bool {
        self.can_delegate_to.is_empty()
    }
}

/// An immutable, validated agent graph ready for the runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    id: String,
    name: String,
    description: Option<String>,
    default_agent: AgentIdx,
    graph_prompt: Option<String>,
    agents: Vec<Agent>,
    tools: Vec<ToolBinding>,
    status_updates: Option<StatusUpdates>,
    agent_index: BTreeMap<String, AgentIdx>,
}

impl Graph {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn graph_prompt(&self) -> Option<&str> {
        self.graph_prompt.as_deref()
    }

    pub fn status_updates(&self) -> Option<&StatusUpdates> {
        self.status_updates.as_ref()
    }

    /// Agents in definition order.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Tool bindings in definition order.
    pub fn tools(&self) -> &[ToolBinding] {
        &self.tools
    }

    pub fn default_agent_idx(&self) -> AgentIdx {
        self.default_agent
    }

    /// Entry point for new conversations.
    pub fn default_agent(&self) -> &Agent {
        &self.agents[self.default_agent.0]
    }

    pub fn agent_idx(&self, id: &str) -> Option<AgentIdx> {
        self.agent_index.get(id).copied()
    }

    pub fn agent(&self, id: &str) -> Option<&Agent> {
        self.agent_idx(id).map(|idx| &self.agents[idx.0])
    }

    pub fn contains_agent(&self, id: &str) -> bool {
        self.agent_index.contains_key(id)
    }

    /// Agent at `idx`. Indices only come from this graph, so lookup cannot miss.
    pub fn agent_at(&self, idx: AgentIdx) -> &Agent {
        &self.agents[idx.0]
    }

    pub fn tool_at(&self, idx: ToolIdx) -> &ToolBinding {
        &self.tools[idx.0]
    }

    /// Agents `agent` may transfer the conversation to.
    pub fn delegates<'a>(&'a self, agent: &'a Agent) -> impl Iterator<Item = &'a Agent> + 'a {
        agent.can_delegate_to.iter().map(|idx| &self.agents[idx.0])
    }

    /// Tool bindings `agent` may invoke.
    pub fn bindings<'a>(&'a self, agent: &'a Agent) -> impl Iterator<Item = &'a ToolBinding> + 'a {
        agent.can_use.iter().map(|idx| &self.tools[idx.0])
    }

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    /// Total number of delegation edges.
    pub fn edge_count(&self) -> usize {
        self.agents.iter().map(|a| a.can_delegate_to.len()).sum()
    }
}
