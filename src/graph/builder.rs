//! Construction-time validation of graph definitions.
//!
//! Checks run in a fixed order:
//! 1. Identifier format of the graph, tool bindings, agents, and status components
//! 2. Id uniqueness within each collection (including each agent's reference
//!    lists and each binding's `active_tools`)
//! 3. Tool binding server addresses
//! 4. Default agent presence and membership
//! 5. Resolution of every `can_use` and `can_delegate_to` reference
//! 6. Status-update cadence values
//!
//! The first failure aborts the build; there is no partially built graph.
//! Lints are computed on the finished graph and returned next to it.

use super::ids::validate_id;
use super::{Agent, AgentIdx, Graph, ToolBinding, ToolIdx};
use crate::definition::{
    AgentDefinition, GraphDefinition, StatusComponent, StatusUpdates, ToolBindingDefinition,
};
use crate::delegation::analyze_delegation;
use crate::error::{Collection, RelayError, Result};
use crate::lint::LintWarning;
use std::collections::{BTreeMap, BTreeSet};
use url::Url;

/// A built graph plus the lint warnings found while building it.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildReport {
    pub graph: Graph,
    pub warnings: Vec<LintWarning>,
}

impl BuildReport {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Fluent construction of a graph from in-code definitions.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    definition: GraphDefinition,
}

impl GraphBuilder {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            definition: GraphDefinition {
                id: id.into(),
                name: name.into(),
                ..Default::default()
            },
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.definition.description = Some(description.into());
        self
    }

    pub fn default_agent(mut self, agent_id: impl Into<String>) -> Self {
        self.definition.default_agent = Some(agent_id.into());
        self
    }

    pub fn graph_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.definition.graph_prompt = Some(prompt.into());
        self
    }

    pub fn tool(mut self, tool: ToolBindingDefinition) -> Self {
        self.definition.tools.push(tool);
        self
    }

    pub fn agent(mut self, agent: AgentDefinition) -> Self {
        self.definition.agents.push(agent);
        self
    }

    pub fn status_updates(mut self, status_updates: StatusUpdates) -> Self {
        self.definition.status_updates = Some(status_updates);
        self
    }

    /// The definition assembled so far.
    pub fn definition(&self) -> &GraphDefinition {
        &self.definition
    }

    /// Validate and assemble the graph.
    ///
    /// Building does not consume the builder; building twice yields equal graphs.
    pub fn build(&self) -> Result<BuildReport> {
        build_graph(&self.definition)
    }
}

/// Validate `definition` and assemble an immutable [`Graph`].
///
/// # Errors
///
/// - `ConfigurationError`: malformed id or URL, missing or unknown default agent,
///   dangling `can_use`/`can_delegate_to` reference, zero status cadence
/// - `DuplicateIdError`: id collision within one collection
pub fn build_graph(definition: &GraphDefinition) -> Result<BuildReport> {
    tracing::debug!(
        graph = %definition.id,
        agents = definition.agents.len(),
        tools = definition.tools.len(),
        "building graph"
    );

    check_ids(definition)?;

    let tool_index = index_tools(&definition.tools)?;
    let agent_index = index_agents(&definition.agents)?;
    check_repeats(definition)?;

    let tools = definition
        .tools
        .iter()
        .map(bind_tool)
        .collect::<Result<Vec<_>>>()?;

    let default_id = definition.default_agent.as_deref().ok_or_else(|| {
        RelayError::configuration(
            &definition.id,
            format!("graph '{}' has no default_agent", definition.id),
        )
    })?;
    let default_agent = agent_index.get(default_id).copied().ok_or_else(|| {
        RelayError::configuration(
            default_id,
            format!(
                "default agent '{}' is not listed in the agents of graph '{}'",
                default_id, definition.id
            ),
        )
    })?;

    let agents = definition
        .agents
        .iter()
        .map(|agent| resolve_agent(agent, &agent_index, &tool_index))
        .collect::<Result<Vec<_>>>()?;

    if let Some(status_updates) = &definition.status_updates {
        check_cadence(&definition.id, status_updates)?;
    }

    let graph = Graph {
        id: definition.id.clone(),
        name: definition.name.clone(),
        description: definition.description.clone(),
        default_agent,
        graph_prompt: definition.graph_prompt.clone(),
        agents,
        tools,
        status_updates: definition.status_updates.clone(),
        agent_index,
    };

    let warnings = lint(&graph);

    tracing::info!(
        graph = %graph.id,
        agents = graph.agents.len(),
        edges = graph.edge_count(),
        warnings = warnings.len(),
        "graph built"
    );

    Ok(BuildReport { graph, warnings })
}

fn status_components(definition: &GraphDefinition) -> &[StatusComponent] {
    definition
        .status_updates
        .as_ref()
        .map(|status| status.status_components.as_slice())
        .unwrap_or_default()
}

fn check_ids(definition: &GraphDefinition) -> Result<()> {
    validate_id(&definition.id, "graph")?;
    if definition.name.trim().is_empty() {
        return Err(RelayError::configuration(
            &definition.id,
            format!("graph '{}' has no name", definition.id),
        ));
    }

    for tool in &definition.tools {
        validate_id(&tool.id, "tool binding")?;
    }
    for agent in &definition.agents {
        validate_id(&agent.id, "agent")?;
    }
    for component in status_components(definition) {
        validate_id(&component.id, "status component")?;
    }

    Ok(())
}

fn index_tools(definitions: &[ToolBindingDefinition]) -> Result<BTreeMap<String, ToolIdx>> {
    let mut index = BTreeMap::new();

    for (position, def) in definitions.iter().enumerate() {
        if index.insert(def.id.clone(), ToolIdx(position)).is_some() {
            return Err(RelayError::duplicate(Collection::Tools, &def.id));
        }
    }

    Ok(index)
}

fn index_agents(definitions: &[AgentDefinition]) -> Result<BTreeMap<String, AgentIdx>> {
    let mut index = BTreeMap::new();

    for (position, def) in definitions.iter().enumerate() {
        if index.insert(def.id.clone(), AgentIdx(position)).is_some() {
            return Err(RelayError::duplicate(Collection::Agents, &def.id));
        }
    }

    Ok(index)
}

/// Reject ids listed twice within one list.
fn check_repeats(definition: &GraphDefinition) -> Result<()> {
    unique(
        status_components(definition).iter().map(|c| c.id.as_str()),
        || Collection::StatusComponents,
    )?;

    for agent in &definition.agents {
        unique(agent.can_use.iter().map(String::as_str), || {
            Collection::CanUse(agent.id.clone())
        })?;
        unique(agent.can_delegate_to.iter().map(String::as_str), || {
            Collection::CanDelegateTo(agent.id.clone())
        })?;
    }

    for tool in &definition.tools {
        unique(tool.active_tools.iter().map(String::as_str), || {
            Collection::ActiveTools(tool.id.clone())
        })?;
    }

    Ok(())
}

fn unique<'a>(
    ids: impl Iterator<Item = &'a str>,
    collection: impl Fn() -> Collection,
) -> Result<()> {
    let mut seen = BTreeSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(RelayError::duplicate(collection(), id));
        }
    }
    Ok(())
}

fn bind_tool(def: &ToolBindingDefinition) -> Result<ToolBinding> {
    let server_url = parse_server_url(def)?;

    if def.active_tools.iter().any(|op| op.trim().is_empty()) {
        return Err(RelayError::configuration(
            &def.id,
            format!("tool binding '{}' has an empty active_tools entry", def.id),
        ));
    }

    Ok(ToolBinding {
        id: def.id.clone(),
        name: def.name.clone(),
        server_url,
        transport: def.transport,
        active_tools: def.active_tools.clone(),
    })
}

fn parse_server_url(def: &ToolBindingDefinition) -> Result<String> {
    let url = Url::parse(&def.server_url).map_err(|e| {
        RelayError::configuration(
            &def.id,
            format!(
                "tool binding '{}' has invalid server_url '{}': {}",
                def.id, def.server_url, e
            ),
        )
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(RelayError::configuration(
            &def.id,
            format!(
                "tool binding '{}' server_url must use http or https (found '{}')",
                def.id,
                url.scheme()
            ),
        ));
    }

    Ok(url.to_string())
}

fn resolve_agent(
    def: &AgentDefinition,
    agent_index: &BTreeMap<String, AgentIdx>,
    tool_index: &BTreeMap<String, ToolIdx>,
) -> Result<Agent> {
    let can_use = resolve_refs(&def.can_use, tool_index, |missing| {
        format!("agent '{}' uses unknown tool binding '{}'", def.id, missing)
    })?;

    let can_delegate_to = resolve_refs(&def.can_delegate_to, agent_index, |missing| {
        format!("agent '{}' delegates to unknown agent '{}'", def.id, missing)
    })?;

    Ok(Agent {
        id: def.id.clone(),
        name: def.name.clone(),
        description: def.description.clone(),
        prompt: def.prompt.clone(),
        can_use,
        can_delegate_to,
    })
}

/// Resolve a list of ids against `index`; a dangling id is reported by name.
fn resolve_refs<T: Copy>(
    ids: &[String],
    index: &BTreeMap<String, T>,
    dangling: impl Fn(&str) -> String,
) -> Result<Vec<T>> {
    ids.iter()
        .map(|id| {
            index
                .get(id)
                .copied()
                .ok_or_else(|| RelayError::configuration(id, dangling(id)))
        })
        .collect()
}

fn check_cadence(graph_id: &str, status_updates: &StatusUpdates) -> Result<()> {
    if status_updates.num_events == Some(0) {
        return Err(RelayError::configuration(
            graph_id,
            format!(
                "graph '{}' status_updates.num_events must be greater than 0",
                graph_id
            ),
        ));
    }

    if status_updates.time_in_seconds == Some(0) {
        return Err(RelayError::configuration(
            graph_id,
            format!(
                "graph '{}' status_updates.time_in_seconds must be greater than 0",
                graph_id
            ),
        ));
    }

    Ok(())
}

fn lint(graph: &Graph) -> Vec<LintWarning> {
    let delegation = analyze_delegation(graph);
    let mut warnings = Vec::new();

    for agent in &delegation.self_delegating {
        warnings.push(LintWarning::self_delegation(agent));
    }

    let used: BTreeSet<ToolIdx> = graph
        .agents
        .iter()
        .flat_map(|agent| agent.can_use.iter().copied())
        .collect();

    for (position, tool) in graph.tools.iter().enumerate() {
        if tool.active_tools.is_empty() {
            warnings.push(LintWarning::empty_tool_scope(&tool.id));
        }
        if !used.contains(&ToolIdx(position)) {
            warnings.push(LintWarning::unused_binding(&tool.id));
        }
    }

    let default_id = graph.default_agent().id();
    for agent in &delegation.unreachable {
        warnings.push(LintWarning::unreachable_agent(agent, default_id));
    }

    for warning in &warnings {
        tracing::debug!(graph = %graph.id, kind = %warning.kind, subject = %warning.subject, "lint");
    }

    warnings
}
