use super::*;
use crate::definition::AgentDefinition;
use crate::graph::GraphBuilder;

fn graph_of(default: &str, edges: &[(&str, &[&str])]) -> Graph {
    let mut builder = GraphBuilder::new("g", "G").default_agent(default);
    for (id, targets) in edges {
        builder = builder.agent(AgentDefinition::new(*id, *id).can_delegate_to(targets.iter().copied()));
    }
    builder.build().unwrap().graph
}

#[test]
fn test_unreachable_agents_are_reported() {
    let graph = graph_of("router", &[("router", &["x"]), ("x", &[]), ("y", &[])]);
    let report = analyze_delegation(&graph);

    assert_eq!(report.reachable, vec!["router", "x"]);
    assert_eq!(report.unreachable, vec!["y"]);
    assert!(report.self_delegating.is_empty());
    assert!(!report.has_cycle);
    assert!(report.is_reachable("x"));
    assert!(!report.is_reachable("y"));
}

#[test]
fn test_reachability_is_transitive() {
    let graph = graph_of(
        "a",
        &[("a", &["b"]), ("b", &["c"]), ("c", &["d"]), ("d", &[]), ("e", &["a"])],
    );
    let report = analyze_delegation(&graph);

    assert_eq!(report.reachable, vec!["a", "b", "c", "d"]);
    assert_eq!(report.unreachable, vec!["e"]);
}

#[test]
fn test_default_agent_alone_is_reachable() {
    let graph = graph_of("solo", &[("solo", &[])]);
    let report = analyze_delegation(&graph);

    assert_eq!(report.reachable, vec!["solo"]);
    assert!(report.unreachable.is_empty());
    assert!(!report.has_cycle);
}

#[test]
fn test_cycles_are_detected() {
    let graph = graph_of("a", &[("a", &["b"]), ("b", &["c"]), ("c", &["a"])]);
    let report = analyze_delegation(&graph);

    assert!(report.has_cycle);
    assert!(report.unreachable.is_empty());
}

#[test]
fn test_cycle_outside_reachable_set_is_detected() {
    let graph = graph_of("a", &[("a", &[]), ("x", &["y"]), ("y", &["x"])]);
    let report = analyze_delegation(&graph);

    assert!(report.has_cycle);
    assert_eq!(report.unreachable, vec!["x", "y"]);
}

#[test]
fn test_diamond_is_not_a_cycle() {
    let graph = graph_of(
        "top",
        &[("top", &["left", "right"]), ("left", &["bottom"]), ("right", &["bottom"]), ("bottom", &[])],
    );
    assert!(!analyze_delegation(&graph).has_cycle);
}

#[test]
fn test_self_delegation_is_a_cycle() {
    let graph = graph_of("a", &[("a", &["a", "b"]), ("b", &["b"])]);
    let report = analyze_delegation(&graph);

    assert_eq!(report.self_delegating, vec!["a", "b"]);
    assert!(report.has_cycle);
}
