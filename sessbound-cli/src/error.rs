//! Error handling for the CLI application

use std::fmt;

/// CLI-specific failure conditions
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Malformed `START..END` message range
    InvalidRange(String),
    /// Configuration error
    ConfigError(String),
    /// A label file could not be evaluated
    EvaluationFailed {
        /// Label file path
        file: String,
        /// Underlying reason
        reason: String,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::InvalidRange(range) => {
                write!(f, "Invalid range '{range}': expected START..END")
            }
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::EvaluationFailed { file, reason } => {
                write!(f, "Evaluation failed for {file}: {reason}")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
