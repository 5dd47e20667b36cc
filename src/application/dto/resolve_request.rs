use super::ResolutionMode;
use crate::dependency_resolution::domain::PackageName;

/// ResolveRequest - Input of the dependency resolution use case
///
/// All fields are already validated by the configuration layer.
#[derive(Debug, Clone)]
pub struct ResolveRequest {
    /// Package whose transitive dependencies are resolved
    pub root: PackageName,
    /// Metadata location and format
    pub mode: ResolutionMode,
    /// Repository directory, mirror base URL, or test graph path (per `mode`)
    pub repository: String,
    /// Deepest BFS level that is still expanded
    pub max_depth: usize,
    /// Packages whose name contains this substring are excluded
    pub filter_substring: Option<String>,
    /// Required version of the root in repository modes
    pub package_version: Option<String>,
    /// Fail instead of warning when expanded packages have no metadata
    pub strict: bool,
}

impl ResolveRequest {
    pub fn new(root: PackageName, mode: ResolutionMode, repository: String, max_depth: usize) -> Self {
        Self {
            root,
            mode,
            repository,
            max_depth,
            filter_substring: None,
            package_version: None,
            strict: false,
        }
    }

    pub fn with_filter(mut self, filter_substring: Option<String>) -> Self {
        self.filter_substring = filter_substring;
        self
    }

    pub fn with_version(mut self, package_version: Option<String>) -> Self {
        self.package_version = package_version;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
