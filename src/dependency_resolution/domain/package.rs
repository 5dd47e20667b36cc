use crate::shared::Result;
use std::collections::HashMap;

/// Maximum length for package names (security limit)
const MAX_PACKAGE_NAME_LENGTH: usize = 255;

/// Field holding the package name in a repository block
pub const PACKAGE_FIELD: &str = "package";

/// Field holding the package version in a repository block
pub const VERSION_FIELD: &str = "version";

/// Field holding the comma-separated dependency list in a repository block
pub const DEPENDS_FIELD: &str = "depends";

/// NewType wrapper for a root package name with validation
///
/// Only the root of a query is validated this way. Names found inside
/// metadata are kept verbatim, since dependency lists may carry text the
/// resolver does not interpret.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: String) -> Result<Self> {
        let name = name.trim().to_string();

        if name.is_empty() {
            anyhow::bail!("Package name cannot be empty");
        }

        // Security: Length limit to prevent DoS
        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            anyhow::bail!(
                "Package name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_PACKAGE_NAME_LENGTH
            );
        }

        // A comma would split the name when it appears in a dependency list
        if name.chars().any(|c| c.is_control() || c == ',') {
            anyhow::bail!("Package name contains invalid characters (control characters or commas)");
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One block of a repository package index
///
/// Field names are lower-cased; values are raw trimmed strings. No field
/// besides `package` is required or interpreted at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PackageRecord {
    fields: HashMap<String, String>,
}

impl PackageRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, overwriting any earlier value for the same key
    pub fn insert_field(&mut self, key: &str, value: &str) {
        self.fields
            .insert(key.trim().to_lowercase(), value.trim().to_string());
    }

    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.field(PACKAGE_FIELD)
    }

    pub fn version(&self) -> Option<&str> {
        self.field(VERSION_FIELD)
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Extracts the dependency names from the `depends` field
    ///
    /// Splits on commas, trims each token and drops empty tokens while
    /// keeping the listed order. Duplicates are kept.
    pub fn dependencies(&self) -> Vec<String> {
        split_dependency_list(self.field(DEPENDS_FIELD).unwrap_or_default())
    }
}

/// Splits a comma-separated dependency list into trimmed, non-empty names
pub fn split_dependency_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|dep| !dep.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[(&str, &str)]) -> PackageRecord {
        let mut record = PackageRecord::new();
        for (key, value) in fields {
            record.insert_field(key, value);
        }
        record
    }

    #[test]
    fn test_package_name_new_valid() {
        let name = PackageName::new("libssl3".to_string()).unwrap();
        assert_eq!(name.as_str(), "libssl3");
    }

    #[test]
    fn test_package_name_is_trimmed() {
        let name = PackageName::new("  curl ".to_string()).unwrap();
        assert_eq!(name.as_str(), "curl");
    }

    #[test]
    fn test_package_name_new_empty() {
        assert!(PackageName::new("".to_string()).is_err());
        assert!(PackageName::new("   ".to_string()).is_err());
    }

    #[test]
    fn test_package_name_rejects_comma() {
        assert!(PackageName::new("a,b".to_string()).is_err());
    }

    #[test]
    fn test_package_name_too_long() {
        assert!(PackageName::new("a".repeat(256)).is_err());
    }

    #[test]
    fn test_record_keys_are_lowercased() {
        let record = record(&[("Package", "curl"), ("VERSION", "8.5.0")]);
        assert_eq!(record.name(), Some("curl"));
        assert_eq!(record.version(), Some("8.5.0"));
    }

    #[test]
    fn test_record_later_field_overwrites_earlier() {
        let record = record(&[("Depends", "a"), ("depends", "b, c")]);
        assert_eq!(record.field_count(), 1);
        assert_eq!(record.dependencies(), vec!["b", "c"]);
    }

    #[test]
    fn test_dependencies_trims_and_drops_empty_tokens() {
        let record = record(&[("Package", "x"), ("Depends", " a ,, b ,  ,c")]);
        assert_eq!(record.dependencies(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_dependencies_keeps_duplicates_in_order() {
        let record = record(&[("Package", "x"), ("Depends", "b, a, b")]);
        assert_eq!(record.dependencies(), vec!["b", "a", "b"]);
    }

    #[test]
    fn test_dependencies_absent_or_empty() {
        assert!(record(&[("Package", "x")]).dependencies().is_empty());
        assert!(record(&[("Package", "x"), ("Depends", "")])
            .dependencies()
            .is_empty());
    }
}
