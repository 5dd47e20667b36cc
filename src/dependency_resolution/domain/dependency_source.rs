/// DependencySource - uniform name to dependency-list lookup
///
/// Both the repository index and the test adjacency list implement this
/// trait, so the graph builder never sees a metadata format.
pub trait DependencySource {
    /// Returns the dependency names of `name`, in declared order
    ///
    /// Total over all names: an unknown package yields an empty list,
    /// exactly like a package without dependencies.
    fn dependencies_of(&self, name: &str) -> Vec<String>;

    /// True if the source holds metadata for `name`
    ///
    /// Lets callers tell an unknown package apart from a leaf package.
    fn contains(&self, name: &str) -> bool;

    /// Number of packages the source holds metadata for
    fn package_count(&self) -> usize;
}
