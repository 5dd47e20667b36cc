use crate::application::dto::{ResolutionMode, ResolveRequest, ResolveResponse};
use crate::dependency_resolution::domain::{
    DependencyGraph, DependencySource, ResolutionMetadata,
};
use crate::dependency_resolution::services::{GraphBuilder, PackageFilter, TopologicalSorter};
use crate::dependency_resolution::sources::{AdjacencyList, RepositoryIndex};
use crate::ports::inbound::DependencyResolutionPort;
use crate::ports::outbound::{MetadataReader, ProgressReporter};
use crate::shared::error::DeptraceError;
use crate::shared::Result;
use std::path::Path;

/// ResolveDependenciesUseCase - Core use case for dependency resolution
///
/// Loads the metadata named by the request, builds the bounded dependency
/// graph and computes the install order. Infrastructure is injected through
/// generics.
///
/// # Type Parameters
/// * `MR` - MetadataReader implementation
/// * `PR` - ProgressReporter implementation
pub struct ResolveDependenciesUseCase<MR, PR> {
    metadata_reader: MR,
    progress_reporter: PR,
}

impl<MR, PR> ResolveDependenciesUseCase<MR, PR>
where
    MR: MetadataReader,
    PR: ProgressReporter,
{
    pub fn new(metadata_reader: MR, progress_reporter: PR) -> Self {
        Self {
            metadata_reader,
            progress_reporter,
        }
    }

    /// Executes the resolution use case
    ///
    /// A dependency cycle does not fail the call; it is carried in
    /// [`ResolveResponse::install_order`].
    pub fn execute(&self, request: ResolveRequest) -> Result<ResolveResponse> {
        let filter = PackageFilter::new(request.filter_substring.clone())?;

        // Step 1: Load metadata into a dependency source
        let source = self.load_source(&request)?;

        // Step 2: Breadth-first expansion from the root
        let graph = self.build_graph(&request, source.as_ref(), &filter);

        // Step 3: Surface what the traversal skipped or could not find
        self.report_exclusions(&graph, &filter);
        self.check_unknown_packages(&graph, request.strict)?;

        // Step 4: Install order
        let install_order = TopologicalSorter::sort(&graph);
        match &install_order {
            Ok(order) => self.progress_reporter.report_completion(&format!(
                "✅ Install order computed for {} package(s)",
                order.len()
            )),
            Err(cycle) => self.progress_reporter.report_completion(&format!(
                "⚠️  Dependency cycle detected: {}",
                cycle.cycle_path()
            )),
        }

        Ok(ResolveResponse::new(
            request.root,
            request.max_depth,
            filter.substring().map(str::to_string),
            graph,
            install_order,
            ResolutionMetadata::now(),
        ))
    }

    /// Reads and parses the metadata for the request's mode
    fn load_source(&self, request: &ResolveRequest) -> Result<Box<dyn DependencySource>> {
        self.progress_reporter.report(&format!(
            "📖 Loading package metadata from: {}",
            request.repository
        ));

        let source: Box<dyn DependencySource> = match request.mode {
            ResolutionMode::Test => {
                let content = self
                    .metadata_reader
                    .read_test_graph(Path::new(&request.repository))?;
                Box::new(AdjacencyList::parse(&content))
            }
            ResolutionMode::Online | ResolutionMode::Offline => {
                let content = self
                    .metadata_reader
                    .read_packages_index(&request.repository)?;
                let mut index = RepositoryIndex::parse(&content);
                Self::apply_version_pin(&mut index, request)?;
                Box::new(index)
            }
        };

        self.progress_reporter.report(&format!(
            "✅ Parsed {} package record(s)",
            source.package_count()
        ));

        Ok(source)
    }

    /// With a configured version, the root resolves to exactly that record
    fn apply_version_pin(index: &mut RepositoryIndex, request: &ResolveRequest) -> Result<()> {
        let Some(version) = &request.package_version else {
            return Ok(());
        };

        if !index.pin(request.root.as_str(), version) {
            return Err(DeptraceError::PackageNotFound {
                name: request.root.to_string(),
                version: version.clone(),
            }
            .into());
        }
        Ok(())
    }

    fn build_graph(
        &self,
        request: &ResolveRequest,
        source: &dyn DependencySource,
        filter: &PackageFilter,
    ) -> DependencyGraph {
        self.progress_reporter.report(&format!(
            "🔗 Building dependency graph for {} (max depth {})...",
            request.root, request.max_depth
        ));

        let graph = GraphBuilder::build_with_progress(
            request.root.as_str(),
            request.max_depth,
            source,
            filter,
            |expanded, pending| {
                self.progress_reporter.report_progress(
                    expanded,
                    expanded + pending,
                    Some("expanding packages"),
                );
            },
        );

        self.progress_reporter
            .report(&format!("   - Packages expanded: {}", graph.key_count()));
        self.progress_reporter
            .report(&format!("   - Dependency edges: {}", graph.edge_count()));

        graph
    }

    fn report_exclusions(&self, graph: &DependencyGraph, filter: &PackageFilter) {
        let Some(substring) = filter.substring() else {
            return;
        };
        if graph.excluded().is_empty() {
            return;
        }

        self.progress_reporter.report(&format!(
            "🚫 Excluded {} package(s) matching filter '{}'",
            graph.excluded().len(),
            substring
        ));
        if graph.is_empty() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Root package matches filter '{}'. The graph is empty.",
                substring
            ));
        }
    }

    /// Unknown packages are leaves; strict mode refuses them
    fn check_unknown_packages(&self, graph: &DependencyGraph, strict: bool) -> Result<()> {
        let unknown = graph.unknown_packages();
        if unknown.is_empty() {
            return Ok(());
        }

        if strict {
            return Err(DeptraceError::UnknownPackages {
                names: unknown.into_iter().map(str::to_string).collect(),
            }
            .into());
        }

        self.progress_reporter.report_error(&format!(
            "⚠️  Warning: No metadata for {} package(s), treated as having no dependencies: {}",
            unknown.len(),
            unknown.join(", ")
        ));
        Ok(())
    }
}

impl<MR, PR> DependencyResolutionPort for ResolveDependenciesUseCase<MR, PR>
where
    MR: MetadataReader,
    PR: ProgressReporter,
{
    fn resolve(&self, request: ResolveRequest) -> Result<ResolveResponse> {
        self.execute(request)
    }
}
