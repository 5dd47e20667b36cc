use crate::adapters::outbound::filesystem::FileSystemReader;
use crate::adapters::outbound::network::HttpRepositoryReader;
use crate::application::dto::ResolutionMode;
use crate::ports::outbound::MetadataReader;
use crate::shared::Result;

/// Factory selecting the metadata reader for a resolution mode
///
/// Online mode downloads the index from a mirror; offline and test modes
/// read local files.
pub struct MetadataReaderFactory;

impl MetadataReaderFactory {
    pub fn create(mode: ResolutionMode) -> Result<Box<dyn MetadataReader>> {
        Ok(match mode {
            ResolutionMode::Online => Box::new(HttpRepositoryReader::new()?),
            ResolutionMode::Offline | ResolutionMode::Test => Box::new(FileSystemReader::new()),
        })
    }
}
