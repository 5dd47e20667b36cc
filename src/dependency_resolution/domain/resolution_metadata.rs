use chrono::Utc;

const TOOL_NAME: &str = env!("CARGO_PKG_NAME");
const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// ResolutionMetadata value object describing when and by what a report was produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionMetadata {
    generated_at: String,
    tool_name: String,
    tool_version: String,
}

impl ResolutionMetadata {
    pub fn new(generated_at: String, tool_name: String, tool_version: String) -> Self {
        Self {
            generated_at,
            tool_name,
            tool_version,
        }
    }

    /// Metadata stamped with the current UTC time and this crate's name and version
    pub fn now() -> Self {
        Self::new(
            Utc::now().to_rfc3339(),
            TOOL_NAME.to_string(),
            TOOL_VERSION.to_string(),
        )
    }

    pub fn generated_at(&self) -> &str {
        &self.generated_at
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }
}
