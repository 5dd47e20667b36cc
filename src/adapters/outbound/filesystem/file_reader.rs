use crate::ports::outbound::MetadataReader;
use crate::shared::error::DeptraceError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// File name of the package index inside a repository directory
pub const PACKAGES_FILE_NAME: &str = "Packages";

/// FileSystemReader adapter for reading metadata from local files
///
/// Serves offline repositories (a directory holding `Packages`) and test
/// graph files.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads a whole file after the security checks in `shared::security`
    fn safe_read_file(&self, path: &Path, file_type: &str) -> Result<String> {
        validate_regular_file(path, file_type)?;

        fs::read_to_string(path).map_err(|e| {
            DeptraceError::MetadataReadError {
                location: path.display().to_string(),
                details: format!("Failed to read {}: {}", file_type, e),
            }
            .into()
        })
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataReader for FileSystemReader {
    fn read_packages_index(&self, repository: &str) -> Result<String> {
        let packages_path = Path::new(repository).join(PACKAGES_FILE_NAME);

        if !packages_path.exists() {
            return Err(DeptraceError::MetadataSourceMissing {
                path: packages_path.display().to_string(),
                suggestion: format!(
                    "No {} file in repository directory \"{}\".\n   \
                     Set repository_url to a directory containing a {} index, or use mode = \"online\" for a remote mirror.",
                    PACKAGES_FILE_NAME, repository, PACKAGES_FILE_NAME
                ),
            }
            .into());
        }

        self.safe_read_file(&packages_path, "Packages index")
    }

    fn read_test_graph(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(DeptraceError::MetadataSourceMissing {
                path: path.display().to_string(),
                suggestion: "In test mode, repository_url must point to a graph file with `node -> dep1, dep2` lines.".to_string(),
            }
            .into());
        }

        self.safe_read_file(path, "test graph")
    }
}
