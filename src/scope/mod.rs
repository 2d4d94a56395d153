//! Tool-scope resolution.
//!
//! An agent's permitted operations are the union of `active_tools` across
//! every binding in its `can_use` list, grouped by server address. Bindings
//! only ever add operations; two bindings to the same server with disjoint
//! allow-lists grant both lists. An empty allow-list grants nothing.


use crate::error::{RelayError, Result};
use crate::graph::{Agent, Graph};
use std::collections::{BTreeMap, BTreeSet};

/// Remote operations one agent may invoke, keyed by server address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolScope {
    by_server: BTreeMap<String, BTreeSet<String>>,
}

impl ToolScope {
    /// Compute the scope of `agent` within `graph`.
    pub fn for_agent(graph: &Graph, agent: &Agent) -> Self {
        let mut by_server: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

        for binding in graph.bindings(agent) {
            if binding.active_tools().is_empty() {
                continue;
            }
            by_server
                .entry(binding.server_url().to_string())
                .or_default()
                .extend(binding.active_tools().iter().cloned());
        }

        Self { by_server }
    }

    /// Whether `operation` on `server_url` is permitted.
    pub fn permits(&self, server_url: &str, operation: &str) -> bool {
        self.by_server
            .get(server_url)
            .is_some_and(|ops| ops.contains(operation))
    }

    /// All permitted operation names, regardless of server.
    pub fn operations(&self) -> BTreeSet<&str> {
        self.by_server
            .values()
            .flat_map(|ops| ops.iter().map(String::as_str))
            .collect()
    }

    /// Permitted operations on one server, if any.
    pub fn server(&self, server_url: &str) -> Option<&BTreeSet<String>> {
        self.by_server.get(server_url)
    }

    /// Servers with at least one permitted operation, and their operations.
    pub fn servers(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.by_server.iter().map(|(url, ops)| (url.as_str(), ops))
    }

    pub fn is_empty(&self) -> bool {
        self.by_server.is_empty()
    }

    /// Number of distinct (server, operation) pairs.
    pub fn len(&self) -> usize {
        self.by_server.values().map(BTreeSet::len).sum()
    }
}

/// Resolve the tool scope of the agent with id `agent_id`.
pub fn resolve_tool_scope(graph: &Graph, agent_id: &str) -> Result<ToolScope> {
    let agent = graph.agent(agent_id).ok_or_else(|| {
        RelayError::configuration(
            agent_id,
            format!("agent '{}' is not part of graph '{}'", agent_id, graph.id()),
        )
    })?;

    Ok(ToolScope::for_agent(graph, agent))
}

/// Resolve the tool scope of every agent, in definition order.
pub fn resolve_all_scopes(graph: &Graph) -> Vec<(&str, ToolScope)> {
    graph
        .agents()
        .iter()
        .map(|agent| (agent.id(), ToolScope::for_agent(graph, agent)))
        .collect()
}
