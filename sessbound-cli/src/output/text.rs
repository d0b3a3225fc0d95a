//! Plain text output formatter

use super::ReportFormatter;
use anyhow::Result;
use sessbound_core::{EvaluationResult, Report, Timeline};
use std::io::Write;

/// Plain text formatter - one report per run
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send> ReportFormatter for TextFormatter<W> {
    fn format_result(&mut self, run: &str, result: &EvaluationResult) -> Result<()> {
        write!(self.writer, "{}", Report::new(result, run))?;
        Ok(())
    }

    fn format_timeline(&mut self, timeline: &Timeline) -> Result<()> {
        writeln!(self.writer, "BOUNDARY TIMELINE")?;
        write!(self.writer, "{timeline}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
