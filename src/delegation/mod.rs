//! Static analysis of the delegation relation.
//!
//! Agents are nodes and `can_delegate_to` entries are directed edges. A
//! breadth-first pass from the default agent finds every agent the runtime can
//! ever hand a conversation to. Unreachable agents and self-delegation are
//! legal and only reported; cycles are legal and only noted.

#[cfg(test)]
mod tests;

use crate::graph::{AgentIdx, Graph};
use std::collections::VecDeque;

/// Reachability findings for one graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelegationReport {
    /// Agents reachable from the default agent (including it), in definition order.
    pub reachable: Vec<String>,
    /// Agents not reachable from the default agent, in definition order.
    pub unreachable: Vec<String>,
    /// Agents that list themselves as a delegation target.
    pub self_delegating: Vec<String>,
    /// Whether the delegation relation contains a cycle (self-loops included).
    pub has_cycle: bool,
}

impl DelegationReport {
    pub fn is_reachable(&self, agent_id: &str) -> bool {
        self.reachable.iter().any(|id| id == agent_id)
    }
}

/// Analyze the delegation edges of `graph`.
pub fn analyze_delegation(graph: &Graph) -> DelegationReport {
    let agents = graph.agents();
    let visited = reachable_from(graph, graph.default_agent_idx());

    let mut reachable = Vec::new();
    let mut unreachable = Vec::new();
    for (position, agent) in agents.iter().enumerate() {
        if visited[position] {
            reachable.push(agent.id().to_string());
        } else {
            unreachable.push(agent.id().to_string());
        }
    }

    let self_delegating = agents
        .iter()
        .enumerate()
        .filter(|(position, agent)| {
            agent
                .can_delegate_to()
                .iter()
                .any(|target| target.index() == *position)
        })
        .map(|(_, agent)| agent.id().to_string())
        .collect();

    DelegationReport {
        reachable,
        unreachable,
        self_delegating,
        has_cycle: has_cycle(graph),
    }
}

/// Mark every agent reachable from `start`.
fn reachable_from(graph: &Graph, start: AgentIdx) -> Vec<bool> {
    let mut visited = vec![false; graph.agent_count()];
    let mut queue = VecDeque::new();

    visited[start.index()] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for &next in graph.agent_at(current).can_delegate_to() {
            if !visited[next.index()] {
                visited[next.index()] = true;
                queue.push_back(next);
            }
        }
    }

    visited
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// Iterative three-color depth-first search over every component.
fn has_cycle(graph: &Graph) -> bool {
    let mut marks = vec![Mark::Unvisited; graph.agent_count()];

    for root in 0..graph.agent_count() {
        if marks[root] != Mark::Unvisited {
            continue;
        }

        // (agent, next edge to explore)
        let mut stack: Vec<(usize, usize)> = vec![(root, 0)];
        marks[root] = Mark::InProgress;

        while let Some(top) = stack.last_mut() {
            let (node, edge) = *top;
            let targets = graph.agents()[node].can_delegate_to();
            if edge < targets.len() {
                top.1 += 1;
                let next = targets[edge].index();
                match marks[next] {
                    Mark::InProgress => return true,
                    Mark::Unvisited => {
                        marks[next] = Mark::InProgress;
                        stack.push((next, 0));
                    }
                    Mark::Done => {}
                }
            } else {
                marks[node] = Mark::Done;
                stack.pop();
            }
        }
    }

    false
}
