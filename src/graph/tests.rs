//! Tests for graph construction and linting.

use super::*;
use crate::definition::{
    AgentDefinition, GraphDefinition, PropertySchema, StatusComponent, StatusUpdates,
    ToolBindingDefinition,
};
use crate::error::{Collection, RelayError};
use crate::lint::{LintKind, LintWarning};

fn agent(id: &str) -> AgentDefinition {
    AgentDefinition::new(id, id.to_uppercase())
}

fn binding(id: &str, url: &str, ops: &[&str]) -> ToolBindingDefinition {
    ToolBindingDefinition::new(id, id, url).with_active_tools(ops.iter().copied())
}

fn router_graph() -> GraphBuilder {
    GraphBuilder::new("g", "Router graph")
        .default_agent("router")
        .agent(agent("router").can_delegate_to(["a", "b"]))
        .agent(agent("a"))
        .agent(agent("b"))
}

fn expect_configuration(result: crate::error::Result<BuildReport>) -> (String, String) {
    match result {
        Err(RelayError::ConfigurationError { id, message }) => (id, message),
        other => panic!("expected ConfigurationError, got {:?}", other),
    }
}

fn expect_duplicate(result: crate::error::Result<BuildReport>) -> (Collection, String) {
    match result {
        Err(RelayError::DuplicateIdError { collection, id }) => (collection, id),
        other => panic!("expected DuplicateIdError, got {:?}", other),
    }
}

// ============================================================================
// Successful builds
// ============================================================================

#[test]
fn test_router_graph_builds_without_warnings() {
    let report = router_graph().build().unwrap();

    assert!(!report.has_warnings());
    assert_eq!(report.graph.id(), "g");
    assert_eq!(report.graph.default_agent().id(), "router");
    assert_eq!(report.graph.agent_count(), 3);
    assert_eq!(report.graph.edge_count(), 2);

    let delegates: Vec<&str> = report
        .graph
        .delegates(report.graph.default_agent())
        .map(Agent::id)
        .collect();
    assert_eq!(delegates, vec!["a", "b"]);
    assert!(report.graph.agent("a").unwrap().is_terminal());
}

#[test]
fn test_agents_keep_definition_order() {
    let report = GraphBuilder::new("g", "G")
        .default_agent("zeta")
        .agent(agent("zeta").can_delegate_to(["alpha", "mid"]))
        .agent(agent("alpha"))
        .agent(agent("mid"))
        .build()
        .unwrap();

    let ids: Vec<&str> = report.graph.agents().iter().map(Agent::id).collect();
    assert_eq!(ids, vec!["zeta", "alpha", "mid"]);
    assert_eq!(report.graph.agent_idx("mid").unwrap().index(), 2);
}

#[test]
fn test_build_is_idempotent() {
    let builder = router_graph().tool(binding("t", "https://tools.example/mcp", &["x"]));
    let builder = builder.agent(agent("c").can_use(["t"]));

    let first = builder.build().unwrap();
    let second = builder.build().unwrap();
    assert_eq!(first, second);

    let from_definition = build_graph(builder.definition()).unwrap();
    assert_eq!(first, from_definition);
}

#[test]
fn test_delegation_cycles_are_accepted() {
    let report = GraphBuilder::new("g", "G")
        .default_agent("a")
        .agent(agent("a").can_delegate_to(["b"]))
        .agent(agent("b").can_delegate_to(["a"]))
        .build()
        .unwrap();

    assert!(report.warnings.is_empty());
    assert_eq!(report.graph.edge_count(), 2);
}

#[test]
fn test_server_url_is_normalized() {
    let report = GraphBuilder::new("g", "G")
        .default_agent("a")
        .tool(binding("t", "HTTPS://Tools.Example", &["x"]))
        .agent(agent("a").can_use(["t"]))
        .build()
        .unwrap();

    assert_eq!(report.graph.tools()[0].server_url(), "https://tools.example/");
}

#[test]
fn test_bindings_resolve_to_tool_arena() {
    let report = GraphBuilder::new("g", "G")
        .default_agent("a")
        .tool(binding("t1", "https://one.example/mcp", &["x"]))
        .tool(binding("t2", "https://two.example/mcp", &["y"]))
        .agent(agent("a").can_use(["t2", "t1"]))
        .build()
        .unwrap();

    let graph = &report.graph;
    let a = graph.agent("a").unwrap();
    let ids: Vec<&str> = graph.bindings(a).map(ToolBinding::id).collect();
    assert_eq!(ids, vec!["t2", "t1"]);
    assert_eq!(graph.tool_at(a.can_use()[0]).id(), "t2");
}

// ============================================================================
// Default agent
// ============================================================================

#[test]
fn test_missing_default_agent_fails() {
    let result = GraphBuilder::new("g", "G").agent(agent("a")).build();
    let (id, message) = expect_configuration(result);
    assert_eq!(id, "g");
    assert!(message.contains("no default_agent"));
}

#[test]
fn test_unknown_default_agent_fails() {
    let result = GraphBuilder::new("g", "G")
        .default_agent("ghost")
        .agent(agent("a"))
        .build();
    let (id, message) = expect_configuration(result);
    assert_eq!(id, "ghost");
    assert!(message.contains("not listed in the agents"));
}

#[test]
fn test_empty_graph_has_no_default_agent() {
    let result = GraphBuilder::new("g", "G").default_agent("a").build();
    let (id, _) = expect_configuration(result);
    assert_eq!(id, "a");
}

// ============================================================================
// Dangling references
// ============================================================================

#[test]
fn test_dangling_delegation_names_missing_agent() {
    let result = GraphBuilder::new("g", "G")
        .default_agent("router")
        .agent(agent("router").can_delegate_to(["missing"]))
        .build();
    let (id, message) = expect_configuration(result);
    assert_eq!(id, "missing");
    assert!(message.contains("delegates to unknown agent 'missing'"));
}

#[test]
fn test_dangling_tool_reference_names_missing_binding() {
    let result = GraphBuilder::new("g", "G")
        .default_agent("a")
        .agent(agent("a").can_use(["nowhere"]))
        .build();
    let (id, message) = expect_configuration(result);
    assert_eq!(id, "nowhere");
    assert!(message.contains("uses unknown tool binding 'nowhere'"));
}

// ============================================================================
// Duplicate ids
// ============================================================================

#[test]
fn test_duplicate_agent_id_fails() {
    let result = GraphBuilder::new("g", "G")
        .default_agent("router")
        .agent(agent("router"))
        .agent(agent("router"))
        .build();
    let (collection, id) = expect_duplicate(result);
    assert_eq!(collection, Collection::Agents);
    assert_eq!(id, "router");
}

#[test]
fn test_duplicate_tool_id_fails() {
    let result = GraphBuilder::new("g", "G")
        .default_agent("a")
        .tool(binding("t", "https://one.example/mcp", &["x"]))
        .tool(binding("t", "https://two.example/mcp", &["y"]))
        .agent(agent("a").can_use(["t"]))
        .build();
    let (collection, id) = expect_duplicate(result);
    assert_eq!(collection, Collection::Tools);
    assert_eq!(id, "t");
}

#[test]
fn test_duplicate_status_component_fails() {
    let status = StatusUpdates {
        status_components: vec![
            StatusComponent::new("progress", "Progress", "progress"),
            StatusComponent::new("progress", "Progress again", "progress"),
        ],
        ..Default::default()
    };
    let result = router_graph().status_updates(status).build();
    let (collection, id) = expect_duplicate(result);
    assert_eq!(collection, Collection::StatusComponents);
    assert_eq!(id, "progress");
}

#[test]
fn test_repeated_reference_in_agent_lists_fails() {
    let result = GraphBuilder::new("g", "G")
        .default_agent("a")
        .tool(binding("t", "https://tools.example/mcp", &["x"]))
        .agent(agent("a").can_use(["t", "t"]))
        .build();
    let (collection, id) = expect_duplicate(result);
    assert_eq!(collection, Collection::CanUse("a".to_string()));
    assert_eq!(id, "t");

    let result = GraphBuilder::new("g", "G")
        .default_agent("a")
        .agent(agent("a").can_delegate_to(["b", "b"]))
        .agent(agent("b"))
        .build();
    let (collection, _) = expect_duplicate(result);
    assert_eq!(collection, Collection::CanDelegateTo("a".to_string()));
}

#[test]
fn test_repeated_active_tool_fails() {
    let result = GraphBuilder::new("g", "G")
        .default_agent("a")
        .tool(binding("t", "https://tools.example/mcp", &["x", "x"]))
        .agent(agent("a").can_use(["t"]))
        .build();
    let (collection, id) = expect_duplicate(result);
    assert_eq!(collection, Collection::ActiveTools("t".to_string()));
    assert_eq!(id, "x");
}

#[test]
fn test_duplicates_are_reported_before_dangling_references() {
    let result = GraphBuilder::new("g", "G")
        .default_agent("a")
        .agent(agent("a").can_delegate_to(["missing"]))
        .agent(agent("a"))
        .build();
    expect_duplicate(result);
}

#[test]
fn test_duplicates_are_reported_before_bad_urls() {
    let result = GraphBuilder::new("g", "G")
        .default_agent("a")
        .tool(binding("t", "not a url", &["x"]))
        .agent(agent("a").can_use(["t"]))
        .agent(agent("a"))
        .build();
    let (collection, _) = expect_duplicate(result);
    assert_eq!(collection, Collection::Agents);
}

// ============================================================================
// Value checks
// ============================================================================

#[test]
fn test_malformed_ids_fail() {
    let result = GraphBuilder::new("g", "G")
        .default_agent("has space")
        .agent(agent("has space"))
        .build();
    let (id, _) = expect_configuration(result);
    assert_eq!(id, "has space");

    let result = GraphBuilder::new("", "G").build();
    expect_configuration(result);
}

#[test]
fn test_blank_graph_name_fails() {
    let result = GraphBuilder::new("g", "  ")
        .default_agent("a")
        .agent(agent("a"))
        .build();
    let (id, message) = expect_configuration(result);
    assert_eq!(id, "g");
    assert!(message.contains("has no name"));
}

#[test]
fn test_invalid_server_url_fails() {
    let result = GraphBuilder::new("g", "G")
        .default_agent("a")
        .tool(binding("t", "not a url", &["x"]))
        .agent(agent("a").can_use(["t"]))
        .build();
    let (id, message) = expect_configuration(result);
    assert_eq!(id, "t");
    assert!(message.contains("invalid server_url"));
}

#[test]
fn test_non_http_server_url_fails() {
    let result = GraphBuilder::new("g", "G")
        .default_agent("a")
        .tool(binding("t", "ftp://tools.example/mcp", &["x"]))
        .agent(agent("a").can_use(["t"]))
        .build();
    let (_, message) = expect_configuration(result);
    assert!(message.contains("must use http or https"));
}

#[test]
fn test_zero_status_cadence_fails() {
    let status = StatusUpdates {
        num_events: Some(0),
        ..Default::default()
    };
    let (_, message) = expect_configuration(router_graph().status_updates(status).build());
    assert!(message.contains("num_events must be greater than 0"));

    let status = StatusUpdates {
        time_in_seconds: Some(0),
        ..Default::default()
    };
    let (_, message) = expect_configuration(router_graph().status_updates(status).build());
    assert!(message.contains("time_in_seconds must be greater than 0"));
}

#[test]
fn test_status_updates_are_kept() {
    let status = StatusUpdates {
        num_events: Some(2),
        time_in_seconds: Some(5),
        status_components: vec![
            StatusComponent::new("progress", "Progress", "progress")
                .with_property("stage", PropertySchema::String)
                .with_property("tags", PropertySchema::array_of(PropertySchema::String)),
        ],
        ..Default::default()
    };
    let report = router_graph().status_updates(status.clone()).build().unwrap();
    assert_eq!(report.graph.status_updates(), Some(&status));
}

// ============================================================================
// Lints
// ============================================================================

#[test]
fn test_unreachable_agent_is_a_warning() {
    let report = GraphBuilder::new("g", "G")
        .default_agent("router")
        .agent(agent("router").can_delegate_to(["x"]))
        .agent(agent("x"))
        .agent(agent("y"))
        .build()
        .unwrap();

    assert_eq!(
        report.warnings,
        vec![LintWarning::unreachable_agent("y", "router")]
    );
}

#[test]
fn test_self_delegation_is_a_warning() {
    let report = GraphBuilder::new("g", "G")
        .default_agent("a")
        .agent(agent("a").can_delegate_to(["a"]))
        .build()
        .unwrap();

    assert_eq!(report.warnings, vec![LintWarning::self_delegation("a")]);
}

#[test]
fn test_tool_binding_lints() {
    let report = GraphBuilder::new("g", "G")
        .default_agent("a")
        .tool(binding("empty", "https://tools.example/mcp", &[]))
        .tool(binding("spare", "https://tools.example/mcp", &["x"]))
        .agent(agent("a").can_use(["empty"]))
        .build()
        .unwrap();

    let kinds: Vec<(LintKind, &str)> = report
        .warnings
        .iter()
        .map(|w| (w.kind, w.subject.as_str()))
        .collect();
    assert_eq!(
        kinds,
        vec![
            (LintKind::EmptyToolScope, "empty"),
            (LintKind::UnusedBinding, "spare"),
        ]
    );
}

#[test]
fn test_warning_order() {
    let report = GraphBuilder::new("g", "G")
        .default_agent("a")
        .tool(binding("spare", "https://tools.example/mcp", &["x"]))
        .agent(agent("a").can_delegate_to(["a"]))
        .agent(agent("island"))
        .build()
        .unwrap();

    let kinds: Vec<LintKind> = report.warnings.iter().map(|w| w.kind).collect();
    assert_eq!(
        kinds,
        vec![
            LintKind::SelfDelegation,
            LintKind::UnusedBinding,
            LintKind::UnreachableAgent,
        ]
    );
}

#[test]
fn test_build_from_parsed_definition() {
    let yaml = r#"
id: g
name: G
default_agent: router
agents:
  - id: router
    can_delegate_to: [a, b]
  - id: a
  - id: b
"#;
    let report = GraphDefinition::from_yaml(yaml).unwrap().build().unwrap();
    assert_eq!(report, router_graph_with_blank_names());
}

fn router_graph_with_blank_names() -> BuildReport {
    GraphBuilder::new("g", "G")
        .default_agent("router")
        .agent(AgentDefinition::new("router", "").can_delegate_to(["a", "b"]))
        .agent(AgentDefinition::new("a", ""))
        .agent(AgentDefinition::new("b", ""))
        .build()
        .unwrap()
}
