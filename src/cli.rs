use clap::Parser;
use std::path::PathBuf;

use deptrace::application::dto::OutputFormat;
use deptrace::config::ConfigOverrides;

/// Resolve the transitive dependencies of a package and print an install order
#[derive(Parser, Debug)]
#[command(name = "deptrace")]
#[command(version)]
#[command(about = "Resolve transitive package dependencies and compute an install order", long_about = None)]
pub struct Args {
    /// Path to the TOML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override max_depth from the configuration file
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Override filter_substring from the configuration file
    #[arg(long, value_name = "SUBSTRING")]
    pub filter: Option<String>,

    /// Fail when an expanded package has no metadata
    #[arg(long)]
    pub strict: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            max_depth: self.max_depth,
            filter_substring: self.filter.clone(),
            strict: self.strict,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let args = Args::try_parse_from(["deptrace", "deptrace.toml"]).unwrap();
        assert_eq!(args.config, PathBuf::from("deptrace.toml"));
        assert_eq!(args.format, OutputFormat::Text);
        assert!(args.output.is_none());
        assert_eq!(args.overrides(), ConfigOverrides::default());
    }

    #[test]
    fn test_parse_all_flags() {
        let args = Args::try_parse_from([
            "deptrace",
            "cfg.toml",
            "-f",
            "json",
            "-o",
            "out.json",
            "--max-depth",
            "3",
            "--filter",
            "doc",
            "--strict",
        ])
        .unwrap();

        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.output, Some(PathBuf::from("out.json")));
        let overrides = args.overrides();
        assert_eq!(overrides.max_depth, Some(3));
        assert_eq!(overrides.filter_substring.as_deref(), Some("doc"));
        assert!(overrides.strict);
    }

    #[test]
    fn test_parse_rejects_negative_depth() {
        assert!(Args::try_parse_from(["deptrace", "cfg.toml", "--max-depth", "-1"]).is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        assert!(Args::try_parse_from(["deptrace", "cfg.toml", "-f", "xml"]).is_err());
    }

    #[test]
    fn test_parse_requires_config() {
        assert!(Args::try_parse_from(["deptrace"]).is_err());
    }
}
