//! Read model for a single resolution report

use serde::Serialize;

/// Query-optimized view of one resolution
///
/// Field order matches the JSON document produced by the JSON formatter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionReadModel {
    pub metadata: MetadataView,
    pub root: String,
    pub max_depth: usize,
    pub filter: Option<String>,
    /// Expanded packages in BFS-visit order
    pub graph: Vec<GraphEntryView>,
    /// Dependency targets that were never expanded
    pub unexpanded: Vec<String>,
    /// Names discarded by the filter
    pub excluded: Vec<String>,
    /// None when a cycle was detected
    pub install_order: Option<Vec<String>>,
    /// Present only when a cycle was detected
    pub cycle: Option<CycleView>,
}

impl ResolutionReadModel {
    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataView {
    pub tool_name: String,
    pub tool_version: String,
    pub generated_at: String,
}

/// One key of the dependency graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEntryView {
    pub name: String,
    pub depth: usize,
    pub dependencies: Vec<String>,
    /// True when the metadata source had no entry for this package
    pub unknown: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleView {
    pub unresolved: Vec<String>,
    pub path: Vec<String>,
}
