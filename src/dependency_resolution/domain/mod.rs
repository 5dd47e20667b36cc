pub mod dependency_graph;
pub mod dependency_source;
pub mod install_order;
pub mod package;
pub mod resolution_metadata;

pub use dependency_graph::{DependencyGraph, NodeId, NodeState};
pub use dependency_source::DependencySource;
pub use install_order::{CycleError, InstallOrder};
pub use package::{PackageName, PackageRecord};
pub use resolution_metadata::ResolutionMetadata;
