use crate::shared::Result;

/// Maximum length of the filter substring to prevent DoS attacks
const MAX_FILTER_LENGTH: usize = 255;

/// PackageFilter - Excludes packages whose name contains a substring
///
/// Matching is case-sensitive. An absent or empty substring disables
/// filtering entirely.
#[derive(Debug, Clone, Default)]
pub struct PackageFilter {
    substring: Option<String>,
}

impl PackageFilter {
    /// Creates a new PackageFilter
    ///
    /// # Arguments
    /// * `substring` - Substring that excludes a package when present in its name
    ///
    /// # Errors
    /// - Substring longer than MAX_FILTER_LENGTH
    /// - Substring containing control characters
    pub fn new(substring: Option<String>) -> Result<Self> {
        let substring = substring.filter(|s| !s.is_empty());

        if let Some(ref s) = substring {
            validate_substring(s)?;
        }

        Ok(Self { substring })
    }

    /// A filter that excludes nothing
    pub fn none() -> Self {
        Self::default()
    }

    /// True if `package_name` must be excluded
    pub fn matches(&self, package_name: &str) -> bool {
        match &self.substring {
            Some(s) => package_name.contains(s.as_str()),
            None => false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.substring.is_some()
    }

    pub fn substring(&self) -> Option<&str> {
        self.substring.as_deref()
    }
}

fn validate_substring(substring: &str) -> Result<()> {
    if substring.len() > MAX_FILTER_LENGTH {
        anyhow::bail!(
            "Filter substring is too long ({} bytes). Maximum allowed: {} bytes",
            substring.len(),
            MAX_FILTER_LENGTH
        );
    }

    if substring.chars().any(char::is_control) {
        anyhow::bail!("Filter substring contains control characters");
    }

    Ok(())
}
