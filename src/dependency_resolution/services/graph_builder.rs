use crate::dependency_resolution::domain::{DependencyGraph, DependencySource};
use crate::dependency_resolution::services::PackageFilter;
use std::collections::VecDeque;

/// GraphBuilder service materializing the dependency graph of one root
///
/// Breadth-first traversal bounded by a maximum depth. Termination does not
/// depend on the source being acyclic: each name is expanded at most once
/// and no name is queued beyond `max_depth`.
pub struct GraphBuilder;

impl GraphBuilder {
    /// Builds the dependency graph reachable from `root`
    ///
    /// # Arguments
    /// * `root` - Package whose dependencies are resolved
    /// * `max_depth` - Deepest BFS level that is still expanded (root is 0)
    /// * `source` - Dependency lookup
    /// * `filter` - Names matching the filter are neither recorded nor expanded
    pub fn build<S>(
        root: &str,
        max_depth: usize,
        source: &S,
        filter: &PackageFilter,
    ) -> DependencyGraph
    where
        S: DependencySource + ?Sized,
    {
        Self::build_with_progress(root, max_depth, source, filter, |_, _| {})
    }

    /// Same as [`GraphBuilder::build`], calling `on_expand(expanded, pending)`
    /// after every expansion
    pub fn build_with_progress<S, F>(
        root: &str,
        max_depth: usize,
        source: &S,
        filter: &PackageFilter,
        mut on_expand: F,
    ) -> DependencyGraph
    where
        S: DependencySource + ?Sized,
        F: FnMut(usize, usize),
    {
        let mut graph = DependencyGraph::new();
        let mut queue: VecDeque<(String, usize)> = VecDeque::new();
        queue.push_back((root.to_string(), 0));

        while let Some((node, depth)) = queue.pop_front() {
            if depth > max_depth {
                continue;
            }
            if filter.matches(&node) {
                graph.record_exclusion(&node);
                continue;
            }
            // The graph's keys double as the visited set
            if graph.is_expanded(&node) {
                continue;
            }

            let dependencies = source.dependencies_of(&node);
            graph.record_expansion(&node, depth, &dependencies, source.contains(&node));

            if depth < max_depth {
                for dep in dependencies {
                    if !graph.is_expanded(&dep) {
                        queue.push_back((dep, depth + 1));
                    }
                }
            }

            on_expand(graph.key_count(), queue.len());
        }

        graph
    }
}
