use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Scripts can tell a dependency cycle apart from bad arguments or
/// an unreadable package index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Graph built and install order computed
    Success = 0,
    /// Graph built but the dependency relation contains a cycle
    CycleDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (configuration, missing index, network, file I/O, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::CycleDetected => write!(f, "Cycle Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency resolution.
#[derive(Debug, Error)]
pub enum DeptraceError {
    #[error("Configuration file not found: {path}\n\n💡 Hint: Pass the path to a TOML configuration file, e.g. `deptrace deptrace.toml`")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid TOML syntax in {path}\nDetails: {details}\n\n💡 Hint: Please verify that the configuration file is valid TOML")]
    ConfigParseError { path: PathBuf, details: String },

    #[error("Configuration validation failed: {path}\n{}\n\n💡 Hint: Fix the listed fields and run again", format_config_errors(.errors))]
    ConfigurationInvalid { path: PathBuf, errors: Vec<String> },

    #[error("Package metadata not found: {path}\n\n💡 Hint: {suggestion}")]
    MetadataSourceMissing { path: String, suggestion: String },

    #[error("Failed to read package metadata: {location}\nDetails: {details}\n\n💡 Hint: Please verify that the repository location is reachable and readable")]
    MetadataReadError { location: String, details: String },

    #[error("Package {name}={version} not found in repository.\n\n💡 Hint: Check `package_name` and `package_version`, or remove `package_version` to resolve by name only")]
    PackageNotFound { name: String, version: String },

    #[error("No metadata found for {} package(s): {}\n\n💡 Hint: Disable strict mode to treat unknown packages as having no dependencies", .names.len(), .names.join(", "))]
    UnknownPackages { names: Vec<String> },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

fn format_config_errors(errors: &[String]) -> String {
    errors
        .iter()
        .map(|e| format!("-{}", e))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::CycleDetected.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(format!("{}", ExitCode::CycleDetected), "Cycle Detected (1)");
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_configuration_invalid_lists_every_error() {
        let error = DeptraceError::ConfigurationInvalid {
            path: PathBuf::from("deptrace.toml"),
            errors: vec![
                "Missing required parameter: package_name".to_string(),
                "max_depth must be a non-negative integer".to_string(),
            ],
        };
        let display = format!("{}", error);
        assert!(display.contains("Configuration validation failed"));
        assert!(display.contains("-Missing required parameter: package_name"));
        assert!(display.contains("-max_depth must be a non-negative integer"));
    }

    #[test]
    fn test_metadata_source_missing_display() {
        let error = DeptraceError::MetadataSourceMissing {
            path: "/repo/Packages".to_string(),
            suggestion: "Check repository_url".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Package metadata not found"));
        assert!(display.contains("/repo/Packages"));
        assert!(display.contains("💡 Hint: Check repository_url"));
    }

    #[test]
    fn test_package_not_found_display() {
        let error = DeptraceError::PackageNotFound {
            name: "curl".to_string(),
            version: "7.0".to_string(),
        };
        assert!(format!("{}", error).contains("Package curl=7.0 not found in repository."));
    }

    #[test]
    fn test_unknown_packages_display() {
        let error = DeptraceError::UnknownPackages {
            names: vec!["ghost".to_string(), "phantom".to_string()],
        };
        let display = format!("{}", error);
        assert!(display.contains("2 package(s): ghost, phantom"));
    }

    #[test]
    fn test_security_error_display() {
        let error = DeptraceError::SecurityError {
            path: PathBuf::from("/test/symlink"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Use a regular file instead".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("/test/symlink"));
        assert!(display.contains("Use a regular file instead"));
    }
}
