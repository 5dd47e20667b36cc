use crate::dependency_resolution::domain::{CycleError, DependencyGraph, InstallOrder, NodeId};
use std::collections::VecDeque;

/// TopologicalSorter service computing an install order (Kahn's algorithm)
///
/// Works on the materialized graph only. Every referenced name takes part,
/// including dependency targets that were never expanded; those have no
/// outgoing edges.
///
/// Tie-breaking: nodes that become ready at the same time are emitted in
/// FIFO order. The initial queue holds zero in-degree nodes in interning
/// order (root first, then names as first referenced), and dependents are
/// released in that same order.
pub struct TopologicalSorter;

impl TopologicalSorter {
    /// Sorts the graph so that every dependency precedes its dependents
    ///
    /// # Errors
    /// Returns a [`CycleError`] listing the unordered nodes if the
    /// dependency relation among them has a cycle. No partial order is
    /// returned.
    pub fn sort(graph: &DependencyGraph) -> Result<InstallOrder, CycleError> {
        let node_count = graph.node_count();
        // One count per listed edge; duplicate entries are released twice
        let mut in_degree = vec![0usize; node_count];
        let mut dependents: Vec<Vec<NodeId>> = vec![Vec::new(); node_count];

        for id in graph.node_ids() {
            for &dep in graph.dependency_ids(id) {
                in_degree[id.index()] += 1;
                dependents[dep.index()].push(id);
            }
        }

        let mut queue: VecDeque<NodeId> = graph
            .node_ids()
            .filter(|id| in_degree[id.index()] == 0)
            .collect();
        let mut ordered = Vec::with_capacity(node_count);

        while let Some(id) = queue.pop_front() {
            ordered.push(graph.name(id).to_string());
            for &dependent in &dependents[id.index()] {
                let degree = &mut in_degree[dependent.index()];
                *degree -= 1;
                if *degree == 0 {
                    queue.push_back(dependent);
                }
            }
        }

        if ordered.len() < node_count {
            return Err(Self::cycle_error(graph, &in_degree));
        }

        Ok(InstallOrder::new(ordered))
    }

    fn cycle_error(graph: &DependencyGraph, in_degree: &[usize]) -> CycleError {
        let unresolved_ids: Vec<NodeId> = graph
            .node_ids()
            .filter(|id| in_degree[id.index()] > 0)
            .collect();
        let unresolved = unresolved_ids
            .iter()
            .map(|&id| graph.name(id).to_string())
            .collect();
        let cycle = Self::find_cycle(graph, in_degree, unresolved_ids[0]);
        CycleError::new(unresolved, cycle)
    }

    /// Walks unresolved dependencies from `start` until a node repeats
    ///
    /// Every unresolved node keeps at least one unresolved dependency.
    fn find_cycle(graph: &DependencyGraph, in_degree: &[usize], start: NodeId) -> Vec<String> {
        let mut position: Vec<Option<usize>> = vec![None; graph.node_count()];
        let mut path: Vec<NodeId> = Vec::new();
        let mut current = start;

        loop {
            if let Some(at) = position[current.index()] {
                let mut cycle: Vec<String> = path[at..]
                    .iter()
                    .map(|&id| graph.name(id).to_string())
                    .collect();
                cycle.push(graph.name(current).to_string());
                return cycle;
            }
            position[current.index()] = Some(path.len());
            path.push(current);

            match graph
                .dependency_ids(current)
                .iter()
                .find(|dep| in_degree[dep.index()] > 0)
            {
                Some(&next) => current = next,
                None => unreachable!(
                    "unresolved package {} has no unresolved dependency",
                    graph.name(current)
                ),
            }
        }
    }
}
