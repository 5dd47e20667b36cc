use crate::application::read_models::ResolutionReadModel;
use crate::ports::outbound::ResolutionFormatter;
use crate::shared::Result;

/// JsonFormatter adapter serializing the read model as pretty JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolutionFormatter for JsonFormatter {
    fn format(&self, model: &ResolutionReadModel) -> Result<String> {
        let mut json = serde_json::to_string_pretty(model)?;
        json.push('\n');
        Ok(json)
    }
}
