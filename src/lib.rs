//! deptrace - transitive dependency resolver
//!
//! Reads package metadata (a Debian-style `Packages` index, local or from a
//! mirror, or a plain adjacency list), builds the dependency graph of one
//! root package with a depth-bounded, filtered breadth-first traversal, and
//! computes an install order in which every package follows its
//! dependencies. Dependency cycles are reported instead of an order.
//!
//! # Architecture
//!
//! - **Domain Layer** (`dependency_resolution`): graph model, parsers and algorithms
//! - **Application Layer** (`application`): use case, DTOs, read models, factories
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): concrete implementations of ports
//! - **Configuration** (`config`): TOML configuration loading and validation
//! - **Shared** (`shared`): error types and file security checks
//!
//! # Example
//!
//! ```no_run
//! use deptrace::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let use_case = ResolveDependenciesUseCase::new(
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let root = PackageName::new("curl".to_string())?;
//! let request = ResolveRequest::new(root, ResolutionMode::Offline, "/srv/mirror".to_string(), 5);
//! let response = use_case.execute(request)?;
//!
//! let model = ResolutionReadModelBuilder::build(&response);
//! println!("{}", TextFormatter::new().format(&model)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_resolution;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::adapters::outbound::network::HttpRepositoryReader;
    pub use crate::application::dto::{
        OutputFormat, ResolutionMode, ResolveRequest, ResolveResponse,
    };
    pub use crate::application::read_models::{ResolutionReadModel, ResolutionReadModelBuilder};
    pub use crate::application::use_cases::ResolveDependenciesUseCase;
    pub use crate::dependency_resolution::domain::{
        CycleError, DependencyGraph, DependencySource, InstallOrder, PackageName, PackageRecord,
        ResolutionMetadata,
    };
    pub use crate::dependency_resolution::services::{
        GraphBuilder, MetadataParser, PackageFilter, TopologicalSorter,
    };
    pub use crate::dependency_resolution::sources::{AdjacencyList, RepositoryIndex};
    pub use crate::ports::inbound::DependencyResolutionPort;
    pub use crate::ports::outbound::{
        MetadataReader, OutputPresenter, ProgressReporter, ResolutionFormatter,
    };
    pub use crate::shared::Result;
}
