use crate::application::read_models::ResolutionReadModel;
use crate::shared::Result;

/// ResolutionFormatter port for rendering a resolution report
///
/// Implementations turn the read model into text (plain listing, JSON, ...).
pub trait ResolutionFormatter {
    /// Formats the resolution report
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &ResolutionReadModel) -> Result<String>;
}
