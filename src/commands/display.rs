//! Display and reporting functions for relay commands.

use super::check::FileOutcome;
use relay::delegation::DelegationReport;
use relay::graph::{Agent, Graph};
use relay::lint::LintWarning;
use relay::scope::ToolScope;

/// Render the result of `relay check`.
pub fn render_check_report(outcomes: &[FileOutcome]) -> String {
    let mut out = format!("Checked {} definition(s):\n\n", outcomes.len());

    for outcome in outcomes {
        let path = outcome.path.display();
        match &outcome.result {
            Ok(report) => {
                out.push_str(&format!(
                    "  ok    {}  ({}: {} agents, {} edges)\n",
                    path,
                    report.graph.id(),
                    report.graph.agent_count(),
                    report.graph.edge_count()
                ));
                for (i, warning) in report.warnings.iter().enumerate() {
                    out.push_str(&format!("        {}. {}\n", i + 1, warning));
                }
            }
            Err(err) => {
                out.push_str(&format!("  FAIL  {}\n", path));
                out.push_str(&format!("        {}\n", err));
            }
        }
    }

    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    let warnings: usize = outcomes.iter().map(FileOutcome::warning_count).sum();

    out.push_str(&format!(
        "\nSummary: {} passed, {} failed, {} warning(s).\n",
        outcomes.len() - failed,
        failed,
        warnings
    ));

    out
}

/// Render the result of `relay inspect`.
pub fn render_inspect(
    graph: &Graph,
    delegation: &DelegationReport,
    warnings: &[LintWarning],
) -> String {
    let mut out = format!("Graph: {} ({})\n", graph.name(), graph.id());
    if let Some(description) = graph.description() {
        out.push_str(&format!("Description: {}\n", description));
    }
    out.push_str(&format!("Default agent: {}\n", graph.default_agent().id()));
    if let Some(prompt) = graph.graph_prompt() {
        out.push_str(&format!("Graph prompt: {}\n", first_line(prompt)));
    }

    out.push_str(&format!("\nAgents ({}):\n", graph.agent_count()));
    for agent in graph.agents() {
        let marker = if agent.id() == graph.default_agent().id() {
            "  [default]"
        } else {
            ""
        };
        out.push_str(&format!("  {}  {}{}\n", agent.id(), agent.name(), marker));

        if !agent.is_terminal() {
            let targets: Vec<&str> = graph.delegates(agent).map(Agent::id).collect();
            out.push_str(&format!("    delegates to: {}\n", targets.join(", ")));
        }

        let scope = ToolScope::for_agent(graph, agent);
        for (server, operations) in scope.servers() {
            let operations: Vec<&str> = operations.iter().map(String::as_str).collect();
            out.push_str(&format!("    tools: {} [{}]\n", server, operations.join(", ")));
        }
    }

    out.push_str(&format!("\nReachable: {}\n", list_or_none(&delegation.reachable)));
    out.push_str(&format!("Unreachable: {}\n", list_or_none(&delegation.unreachable)));
    out.push_str(&format!(
        "Cycles: {}\n",
        if delegation.has_cycle { "yes" } else { "none" }
    ));

    match graph.status_updates() {
        Some(status) if status.enabled => {
            let mut cadence = Vec::new();
            if let Some(events) = status.num_events {
                cadence.push(format!("every {} event(s)", events));
            }
            if let Some(seconds) = status.time_in_seconds {
                cadence.push(format!("after {}s idle", seconds));
            }
            out.push_str(&format!(
                "Status updates: enabled{}{}, {} component(s)\n",
                if cadence.is_empty() { "" } else { ", " },
                cadence.join(" or "),
                status.status_components.len()
            ));
        }
        Some(_) => out.push_str("Status updates: disabled\n"),
        None => out.push_str("Status updates: not configured\n"),
    }

    out.push_str(&format!("\nWarnings ({}):\n", warnings.len()));
    for (i, warning) in warnings.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, warning));
    }

    out
}

/// Render the result of `relay scope`.
pub fn render_scope(graph: &Graph, agent_id: &str, scope: &ToolScope) -> String {
    let name = graph.agent(agent_id).map(Agent::name).unwrap_or_default();

    if scope.is_empty() {
        return format!("Agent '{}' ({}) has no tool access.\n", agent_id, name);
    }

    let mut out = format!(
        "Tool scope of '{}' ({}): {} operation(s)\n",
        agent_id,
        name,
        scope.len()
    );
    for (server, operations) in scope.servers() {
        out.push_str(&format!("  {}\n", server));
        for operation in operations {
            out.push_str(&format!("    - {}\n", operation));
        }
    }

    out
}

fn list_or_none(ids: &[String]) -> String {
    if ids.is_empty() {
        "(none)".to_string()
    } else {
        ids.join(", ")
    }
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or(text)
}
