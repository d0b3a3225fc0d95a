//! Report output formatting

use anyhow::Result;
use serde::{Deserialize, Serialize};
use sessbound_core::{EvaluationResult, Timeline};
use std::io::Write;

/// Trait for report formatters
pub trait ReportFormatter: Send {
    /// Format the evaluation of one run
    fn format_result(&mut self, run: &str, result: &EvaluationResult) -> Result<()>;

    /// Format a boundary timeline for the run last formatted
    fn format_timeline(&mut self, timeline: &Timeline) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report
    Text,
    /// Full results as a JSON array
    Json,
    /// Markdown tables
    Markdown,
}

impl OutputFormat {
    /// Every format with a one-line description
    pub fn descriptions() -> [(&'static str, &'static str); 3] {
        [
            ("text", "Human-readable report with optional boundary timeline"),
            ("json", "Array of {\"name\", \"result\"} objects with every metric"),
            ("markdown", "Markdown tables, suitable for pull requests and wikis"),
        ]
    }

    /// Build a formatter writing to `writer`
    pub fn formatter<W: Write + Send + 'static>(self, writer: W) -> Box<dyn ReportFormatter> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::{JsonFormatter, RunEntry};
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
