use crate::shared::Result;
use std::path::Path;

/// MetadataReader port for loading raw metadata text
///
/// Abstracts where a package index or test graph lives (local disk,
/// HTTP mirror). Both operations return the complete text; parsing
/// happens in the domain.
pub trait MetadataReader {
    /// Reads the `Packages` index of a repository
    ///
    /// # Arguments
    /// * `repository` - Repository location (directory path or base URL)
    ///
    /// # Errors
    /// Returns an error if:
    /// - The index does not exist (`MetadataSourceMissing`)
    /// - The index cannot be read or downloaded
    fn read_packages_index(&self, repository: &str) -> Result<String>;

    /// Reads a test graph file in adjacency-list format
    ///
    /// # Arguments
    /// * `path` - Path to the test graph file
    ///
    /// # Errors
    /// Returns an error if the file does not exist or cannot be read
    fn read_test_graph(&self, path: &Path) -> Result<String>;
}

impl<T: MetadataReader + ?Sized> MetadataReader for Box<T> {
    fn read_packages_index(&self, repository: &str) -> Result<String> {
        (**self).read_packages_index(repository)
    }

    fn read_test_graph(&self, path: &Path) -> Result<String> {
        (**self).read_test_graph(path)
    }
}
