//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match CliConfig::from_file(&self.config) {
            Ok(config) => {
                let evaluation = &config.evaluation;
                println!("✓ Configuration is valid!");
                println!("  Tolerance levels:    {:?}", evaluation.tolerance_levels);
                println!(
                    "  Boundary tolerance:  {}",
                    evaluation.effective_boundary_tolerance()
                );
                println!("  Window radius:       {}", evaluation.window_radius);
                match evaluation.segmentation_window {
                    Some(window) => println!("  Segmentation window: {window}"),
                    None => println!("  Segmentation window: auto"),
                }
                println!("  Lenient labels:      {}", config.input.lenient);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {:#}", e))
            }
        }
    }
}
