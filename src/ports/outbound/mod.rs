/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with metadata storage, the console and output sinks.
pub mod formatter;
pub mod metadata_reader;
pub mod output_presenter;
pub mod progress_reporter;

pub use formatter::ResolutionFormatter;
pub use metadata_reader::MetadataReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
