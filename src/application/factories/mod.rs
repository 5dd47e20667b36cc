mod formatter_factory;
mod metadata_reader_factory;
mod presenter_factory;

pub use formatter_factory::FormatterFactory;
pub use metadata_reader_factory::MetadataReaderFactory;
pub use presenter_factory::{PresenterFactory, PresenterType};
