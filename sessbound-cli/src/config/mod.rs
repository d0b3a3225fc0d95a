//! Configuration file for the CLI
//!
//! ```toml
//! [evaluation]
//! tolerance_levels = [1, 2, 3, 5]
//! window_radius = 2
//!
//! [input]
//! lenient = true
//!
//! [output]
//! format = "markdown"
//! save_dir = "results"
//! ```

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sessbound_core::EvaluatorConfig;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Evaluator settings
    #[serde(default)]
    pub evaluation: EvaluatorConfig,

    /// Label file handling
    #[serde(default)]
    pub input: InputConfig,

    /// Report output
    #[serde(default)]
    pub output: OutputConfig,
}

/// Input-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    /// Normalize raw labels instead of rejecting anything but 0/1
    pub lenient: bool,
}

/// Output-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Report format when `--format` is not given
    pub format: Option<OutputFormat>,

    /// Directory for timestamped result files
    pub save_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Parse and validate a TOML configuration
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: Self =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        config.evaluation = config.evaluation.validate()?;
        Ok(config)
    }

    /// Load a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CliConfig::from_toml_str("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.evaluation.tolerance_levels, vec![1, 2, 3, 5]);
    }

    #[test]
    fn test_full_config() {
        let config = CliConfig::from_toml_str(
            r#"
[evaluation]
tolerance_levels = [5, 1, 1]
boundary_tolerance = 2

[input]
lenient = true

[output]
format = "json"
save_dir = "out"
"#,
        )
        .unwrap();

        assert_eq!(config.evaluation.tolerance_levels, vec![1, 5]);
        assert_eq!(config.evaluation.boundary_tolerance, Some(2));
        assert!(config.input.lenient);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert_eq!(config.output.save_dir, Some(PathBuf::from("out")));
    }

    #[test]
    fn test_rejects_unknown_section() {
        let err = CliConfig::from_toml_str("[processing]\nlanguage = \"en\"\n").unwrap_err();
        assert!(err.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_rejects_empty_tolerances() {
        let err = CliConfig::from_toml_str("[evaluation]\ntolerance_levels = []\n").unwrap_err();
        assert!(err.to_string().contains("at least one tolerance level"));
    }

    #[test]
    fn test_missing_file() {
        let err = CliConfig::from_file(Path::new("/nonexistent/sessbound.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
