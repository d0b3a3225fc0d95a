//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod compare;
pub mod evaluate;
pub mod generate_config;
pub mod validate;

use crate::output::OutputFormat;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Evaluate predicted session boundaries in label files
    Evaluate(evaluate::EvaluateArgs),

    /// Compare saved evaluation results side by side
    Compare(compare::CompareArgs),

    /// Validate a configuration file
    Validate(validate::ValidateArgs),

    /// Generate a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List reported metrics
    Metrics,
}

const METRICS: &[(&str, &str)] = &[
    ("exact_accuracy", "Fraction of messages whose label matches"),
    ("precision / recall / f1_score", "Session-start classification scores"),
    ("within_k", "Accuracy forgiving misplaced starts within k messages, per tolerance"),
    ("windowed_accuracy", "True starts with a predicted start within the window radius"),
    ("mean/median_distance", "Distance from each predicted start to the nearest true start"),
    ("boundary_precision / recall", "Starts matched within the boundary tolerance"),
    ("pk_score / window_diff", "Segmentation error over a sliding window"),
];

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Evaluate(args) => args.execute(),
            Commands::Compare(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

impl ListCommands {
    /// Print the requested listing
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Formats => {
                println!("Available output formats:");
                for (name, description) in OutputFormat::descriptions() {
                    println!("  {name:<10} {description}");
                }
            }
            ListCommands::Metrics => {
                println!("Reported metrics:");
                for (name, description) in METRICS {
                    println!("  {name:<30} {description}");
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_commands_debug_format() {
        let validate_cmd = Commands::Validate(validate::ValidateArgs {
            config: PathBuf::from("sessbound.toml"),
        });

        let debug_str = format!("{:?}", validate_cmd);
        assert!(debug_str.contains("Validate"));
        assert!(debug_str.contains("sessbound.toml"));

        let list_cmd = Commands::List {
            subcommand: ListCommands::Formats,
        };

        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Formats"));
    }

    #[test]
    fn test_list_commands_execute() {
        assert!(ListCommands::Formats.execute().is_ok());
        assert!(ListCommands::Metrics.execute().is_ok());
    }

    #[test]
    fn test_every_format_is_listed() {
        use clap::ValueEnum;

        let listed: Vec<&str> = OutputFormat::descriptions()
            .iter()
            .map(|(name, _)| *name)
            .collect();
        for format in OutputFormat::value_variants() {
            let name = format.to_possible_value().unwrap();
            assert!(listed.contains(&name.get_name()));
        }
    }
}
