//! JSON output formatter

use super::ReportFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use sessbound_core::{EvaluationResult, Timeline};
use std::io::Write;

/// JSON formatter - outputs every run as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    runs: Vec<RunEntry>,
}

/// One named run in JSON output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunEntry {
    /// Run name
    pub name: String,
    /// Full evaluation result
    pub result: EvaluationResult,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            runs: Vec::new(),
        }
    }
}

impl<W: Write + Send> ReportFormatter for JsonFormatter<W> {
    fn format_result(&mut self, run: &str, result: &EvaluationResult) -> Result<()> {
        self.runs.push(RunEntry {
            name: run.to_string(),
            result: result.clone(),
        });
        Ok(())
    }

    // Boundary positions are already part of each result
    fn format_timeline(&mut self, _timeline: &Timeline) -> Result<()> {
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.runs)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
