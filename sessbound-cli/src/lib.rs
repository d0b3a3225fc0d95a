//! sessbound CLI library
//!
//! Command implementations, label file input, report formatters and
//! progress reporting for the `sessbound` binary.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
