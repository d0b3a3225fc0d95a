//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use sessbound_core::config::{DEFAULT_TOLERANCE_LEVELS, DEFAULT_WINDOW_RADIUS};
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, Self::generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the tolerance levels and windows to suit your data");
        println!("2. Validate your configuration:");
        println!("   sessbound validate -c {}", self.output.display());
        println!("3. Use it for evaluation:");
        println!(
            "   sessbound evaluate -i 'runs/*.json' -c {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template() -> String {
        let levels = DEFAULT_TOLERANCE_LEVELS
            .iter()
            .map(|k| k.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            r#"# sessbound evaluation configuration

[evaluation]
# Tolerances (in messages) for within-k accuracy and boundary F1
tolerance_levels = [{levels}]

# Tolerance for boundary precision/recall (default: largest tolerance level)
# boundary_tolerance = 3

# Radius of the window around each true boundary for windowed accuracy
window_radius = {DEFAULT_WINDOW_RADIUS}

# Window for Pk and WindowDiff (default: half the mean true session length)
# segmentation_window = 4

[input]
# Accept raw labelling exports: "[START]", 1.0 and "1" count as starts,
# null and anything else as continuations
lenient = false

[output]
# Report format when --format is not given: "text", "json" or "markdown"
# format = "text"

# Save every result as timestamped JSON in this directory
# save_dir = "results"
"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_args_debug() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("sessbound.toml"),
            force: false,
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("GenerateConfigArgs"));
        assert!(debug_str.contains("sessbound.toml"));
    }

    #[test]
    fn test_template_matches_defaults() {
        let config = CliConfig::from_toml_str(&GenerateConfigArgs::generate_template()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_generate_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("sessbound.toml");

        let args = GenerateConfigArgs {
            output: output.clone(),
            force: false,
        };
        args.execute().unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        assert!(content.contains("[evaluation]"));
        assert!(content.contains("tolerance_levels = [1, 2, 3, 5]"));
    }

    #[test]
    fn test_refuses_to_overwrite_without_force() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("sessbound.toml");
        std::fs::write(&output, "keep me").unwrap();

        let args = GenerateConfigArgs {
            output: output.clone(),
            force: false,
        };
        assert!(args.execute().is_err());
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "keep me");

        let args = GenerateConfigArgs {
            output: output.clone(),
            force: true,
        };
        args.execute().unwrap();
        assert!(std::fs::read_to_string(&output)
            .unwrap()
            .contains("[evaluation]"));
    }
}
