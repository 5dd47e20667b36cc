//! Configuration file support for deptrace.
//!
//! A TOML file names the root package, where its metadata lives and how far
//! to traverse. Every field is validated and all problems are reported
//! together; command-line flags override file values before validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::application::dto::{ResolutionMode, ResolveRequest};
use crate::dependency_resolution::domain::PackageName;
use crate::shared::error::DeptraceError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;

/// Top-level configuration file schema.
///
/// Fields are kept as raw TOML values so that type errors can be collected
/// alongside every other validation failure.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub package_name: Option<toml::Value>,
    pub package_version: Option<toml::Value>,
    pub repository_url: Option<toml::Value>,
    pub mode: Option<toml::Value>,
    pub max_depth: Option<toml::Value>,
    pub filter_substring: Option<toml::Value>,
    pub strict: Option<toml::Value>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, toml::Value>,
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub max_depth: Option<usize>,
    pub filter_substring: Option<String>,
    pub strict: bool,
}

/// Fully validated configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    pub package_name: PackageName,
    pub package_version: Option<String>,
    pub repository_url: String,
    pub mode: ResolutionMode,
    pub max_depth: usize,
    pub filter_substring: Option<String>,
    pub strict: bool,
}

impl ResolverConfig {
    pub fn to_request(&self) -> ResolveRequest {
        ResolveRequest::new(
            self.package_name.clone(),
            self.mode,
            self.repository_url.clone(),
            self.max_depth,
        )
        .with_filter(self.filter_substring.clone())
        .with_version(self.package_version.clone())
        .with_strict(self.strict)
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        return Err(DeptraceError::ConfigNotFound {
            path: path.to_path_buf(),
        }
        .into());
    }
    validate_regular_file(path, "configuration file")?;

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    toml::from_str(&content).map_err(|e| {
        DeptraceError::ConfigParseError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}

impl ConfigFile {
    /// Replaces file values with the ones given on the command line.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(depth) = overrides.max_depth {
            // Depths beyond i64 are not representable in TOML; keep them so validation rejects them
            self.max_depth = Some(match i64::try_from(depth) {
                Ok(depth) => toml::Value::Integer(depth),
                Err(_) => toml::Value::String(depth.to_string()),
            });
        }
        if let Some(filter) = &overrides.filter_substring {
            self.filter_substring = Some(toml::Value::String(filter.clone()));
        }
        if overrides.strict {
            self.strict = Some(toml::Value::Boolean(true));
        }
    }

    /// Names of fields the schema does not know, in sorted order.
    pub fn unknown_keys(&self) -> Vec<&str> {
        self.unknown_fields.keys().map(String::as_str).collect()
    }

    /// Validates every field and collects all failures.
    ///
    /// `path` only labels the error.
    pub fn validate(&self, path: &Path) -> Result<ResolverConfig> {
        let mut errors = Vec::new();

        let package_name = required_string(&self.package_name, "package_name", &mut errors)
            .and_then(|name| match PackageName::new(name) {
                Ok(name) => Some(name),
                Err(e) => {
                    errors.push(format!("package_name is invalid: {}", e));
                    None
                }
            });

        let package_version = optional_string(&self.package_version, "package_version", &mut errors)
            .and_then(|version| {
                let version = version.trim().to_string();
                if version.is_empty() {
                    errors.push("package_version must not be empty when set".to_string());
                    None
                } else {
                    Some(version)
                }
            });

        let repository_url = required_string(&self.repository_url, "repository_url", &mut errors);

        let mode = required_string(&self.mode, "mode", &mut errors).and_then(|mode| {
            match ResolutionMode::from_str(&mode) {
                Ok(mode) => Some(mode),
                Err(e) => {
                    errors.push(e);
                    None
                }
            }
        });

        let max_depth = validate_max_depth(&self.max_depth, &mut errors);

        let filter_substring =
            optional_string(&self.filter_substring, "filter_substring", &mut errors)
                .filter(|s| !s.is_empty());

        let strict = match &self.strict {
            None => false,
            Some(toml::Value::Boolean(b)) => *b,
            Some(other) => {
                errors.push(format!(
                    "strict must be a boolean (got {})",
                    other.type_str()
                ));
                false
            }
        };

        if let (Some(ResolutionMode::Online), Some(url)) = (mode, &repository_url) {
            if !is_http_url(url) {
                errors.push(format!(
                    "repository_url must be an http:// or https:// URL in online mode (got '{}')",
                    url
                ));
            }
        }

        match (package_name, repository_url, mode, max_depth) {
            (Some(package_name), Some(repository_url), Some(mode), Some(max_depth))
                if errors.is_empty() =>
            {
                Ok(ResolverConfig {
                    package_name,
                    package_version,
                    repository_url,
                    mode,
                    max_depth,
                    filter_substring,
                    strict,
                })
            }
            _ => Err(DeptraceError::ConfigurationInvalid {
                path: PathBuf::from(path),
                errors,
            }
            .into()),
        }
    }
}

/// Loads, overrides and validates in one step.
///
/// Also returns the unknown field names so the caller can warn about them.
pub fn load_resolver_config(
    path: &Path,
    overrides: &ConfigOverrides,
) -> Result<(ResolverConfig, Vec<String>)> {
    let mut file = load_config_from_path(path)?;
    file.apply_overrides(overrides);
    let config = file.validate(path)?;
    let unknown = file.unknown_keys().into_iter().map(str::to_string).collect();
    Ok((config, unknown))
}

fn required_string(
    value: &Option<toml::Value>,
    key: &str,
    errors: &mut Vec<String>,
) -> Option<String> {
    match value {
        None => {
            errors.push(format!("Missing required parameter: {}", key));
            None
        }
        Some(toml::Value::String(s)) if s.trim().is_empty() => {
            errors.push(format!("{} must not be empty", key));
            None
        }
        Some(toml::Value::String(s)) => Some(s.trim().to_string()),
        Some(other) => {
            errors.push(format!("{} must be a string (got {})", key, other.type_str()));
            None
        }
    }
}

fn optional_string(
    value: &Option<toml::Value>,
    key: &str,
    errors: &mut Vec<String>,
) -> Option<String> {
    match value {
        None => None,
        Some(toml::Value::String(s)) => Some(s.clone()),
        Some(other) => {
            errors.push(format!("{} must be a string (got {})", key, other.type_str()));
            None
        }
    }
}

fn validate_max_depth(value: &Option<toml::Value>, errors: &mut Vec<String>) -> Option<usize> {
    match value {
        None => {
            errors.push("Missing required parameter: max_depth".to_string());
            None
        }
        Some(toml::Value::Integer(n)) => match usize::try_from(*n) {
            Ok(depth) => Some(depth),
            Err(_) => {
                errors.push(format!("max_depth must be a non-negative integer (got {})", n));
                None
            }
        },
        Some(other) => {
            errors.push(format!(
                "max_depth must be a non-negative integer (got {})",
                other.type_str()
            ));
            None
        }
    }
}

fn is_http_url(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    (lower.starts_with("http://") && lower.len() > "http://".len())
        || (lower.starts_with("https://") && lower.len() > "https://".len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("deptrace.toml");
        fs::write(&path, content).unwrap();
        path
    }

    fn validation_errors(content: &str) -> Vec<String> {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, content);
        let err = load_config_from_path(&path)
            .unwrap()
            .validate(&path)
            .unwrap_err();
        match err.downcast::<DeptraceError>().unwrap() {
            DeptraceError::ConfigurationInvalid { errors, .. } => errors,
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
package_name = "curl"
package_version = "7.88.1"
repository_url = "/srv/mirror"
mode = "Offline"
max_depth = 3
filter_substring = "-doc"
strict = true
"#,
        );

        let config = load_config_from_path(&path).unwrap().validate(&path).unwrap();
        assert_eq!(config.package_name.as_str(), "curl");
        assert_eq!(config.package_version.as_deref(), Some("7.88.1"));
        assert_eq!(config.repository_url, "/srv/mirror");
        assert_eq!(config.mode, ResolutionMode::Offline);
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.filter_substring.as_deref(), Some("-doc"));
        assert!(config.strict);
    }

    #[test]
    fn test_optional_fields_default() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
package_name = "A"
repository_url = "graph.txt"
mode = "test"
max_depth = 0
filter_substring = ""
"#,
        );

        let config = load_config_from_path(&path).unwrap().validate(&path).unwrap();
        assert_eq!(config.max_depth, 0);
        assert!(config.package_version.is_none());
        assert!(config.filter_substring.is_none());
        assert!(!config.strict);
    }

    #[test]
    fn test_missing_file() {
        let err = load_config_from_path(Path::new("/nonexistent/deptrace.toml")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DeptraceError>(),
            Some(DeptraceError::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn test_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "package_name = [[[broken");
        let err = load_config_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid TOML syntax"));
    }

    #[test]
    fn test_all_errors_are_collected() {
        let errors = validation_errors(
            r#"
package_name = ""
mode = "sideways"
max_depth = -1
strict = "yes"
"#,
        );

        assert!(errors.contains(&"package_name must not be empty".to_string()));
        assert!(errors.contains(&"Missing required parameter: repository_url".to_string()));
        assert!(errors.iter().any(|e| e.contains("mode must be one of")));
        assert!(errors.contains(&"max_depth must be a non-negative integer (got -1)".to_string()));
        assert!(errors.contains(&"strict must be a boolean (got string)".to_string()));
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn test_wrong_types() {
        let errors = validation_errors(
            r#"
package_name = 42
repository_url = "/repo"
mode = "offline"
max_depth = "5"
"#,
        );
        assert_eq!(
            errors,
            vec![
                "package_name must be a string (got integer)".to_string(),
                "max_depth must be a non-negative integer (got string)".to_string(),
            ]
        );
    }

    #[test]
    fn test_online_mode_requires_http_url() {
        let errors = validation_errors(
            r#"
package_name = "curl"
repository_url = "/srv/mirror"
mode = "online"
max_depth = 2
"#,
        );
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("http:// or https://"));
    }

    #[test]
    fn test_online_mode_accepts_https() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
package_name = "curl"
repository_url = "https://deb.example.org/debian"
mode = "online"
max_depth = 2
"#,
        );
        let config = load_config_from_path(&path).unwrap().validate(&path).unwrap();
        assert_eq!(config.mode, ResolutionMode::Online);
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
package_name = "A"
repository_url = "graph.txt"
mode = "test"
max_depth = 9
filter_substring = "doc"
"#,
        );
        let overrides = ConfigOverrides {
            max_depth: Some(1),
            filter_substring: Some("dbg".to_string()),
            strict: true,
        };

        let (config, unknown) = load_resolver_config(&path, &overrides).unwrap();
        assert_eq!(config.max_depth, 1);
        assert_eq!(config.filter_substring.as_deref(), Some("dbg"));
        assert!(config.strict);
        assert!(unknown.is_empty());
    }

    #[test]
    fn test_override_fills_missing_max_depth() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
package_name = "A"
repository_url = "graph.txt"
mode = "test"
"#,
        );
        let overrides = ConfigOverrides {
            max_depth: Some(4),
            ..Default::default()
        };
        let (config, _) = load_resolver_config(&path, &overrides).unwrap();
        assert_eq!(config.max_depth, 4);
    }

    #[test]
    fn test_unknown_fields_are_reported() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
package_name = "A"
repository_url = "graph.txt"
mode = "test"
max_depth = 1
verbose = true
another_unknown = "value"
"#,
        );

        let (_, unknown) = load_resolver_config(&path, &ConfigOverrides::default()).unwrap();
        assert_eq!(unknown, vec!["another_unknown", "verbose"]);
    }

    #[test]
    fn test_to_request() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
package_name = "A"
repository_url = "graph.txt"
mode = "test"
max_depth = 2
filter_substring = "x"
"#,
        );
        let (config, _) = load_resolver_config(&path, &ConfigOverrides::default()).unwrap();
        let request = config.to_request();
        assert_eq!(request.root.as_str(), "A");
        assert_eq!(request.repository, "graph.txt");
        assert_eq!(request.max_depth, 2);
        assert_eq!(request.filter_substring.as_deref(), Some("x"));
        assert!(!request.strict);
    }
}
