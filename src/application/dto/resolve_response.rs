use crate::dependency_resolution::domain::{
    CycleError, DependencyGraph, InstallOrder, PackageName, ResolutionMetadata,
};

/// ResolveResponse - Output of the dependency resolution use case
///
/// The graph is always present. The install order is replaced by a
/// [`CycleError`] when the graph has no valid linearization.
#[derive(Debug, Clone)]
pub struct ResolveResponse {
    pub root: PackageName,
    pub max_depth: usize,
    pub filter_substring: Option<String>,
    pub graph: DependencyGraph,
    pub install_order: Result<InstallOrder, CycleError>,
    pub metadata: ResolutionMetadata,
}

impl ResolveResponse {
    pub fn new(
        root: PackageName,
        max_depth: usize,
        filter_substring: Option<String>,
        graph: DependencyGraph,
        install_order: Result<InstallOrder, CycleError>,
        metadata: ResolutionMetadata,
    ) -> Self {
        Self {
            root,
            max_depth,
            filter_substring,
            graph,
            install_order,
            metadata,
        }
    }

    pub fn has_cycle(&self) -> bool {
        self.install_order.is_err()
    }
}
