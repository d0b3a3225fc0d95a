//! Markdown output formatter

use super::ReportFormatter;
use anyhow::Result;
use sessbound_core::{EvaluationResult, MarkdownReport, Timeline};
use std::io::Write;

/// Markdown formatter - one section per run
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    run_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            run_count: 0,
        }
    }
}

impl<W: Write + Send> ReportFormatter for MarkdownFormatter<W> {
    fn format_result(&mut self, run: &str, result: &EvaluationResult) -> Result<()> {
        if self.run_count > 0 {
            writeln!(self.writer)?;
        }
        self.run_count += 1;
        write!(self.writer, "{}", MarkdownReport::new(result, run))?;
        Ok(())
    }

    fn format_timeline(&mut self, timeline: &Timeline) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "```text")?;
        write!(self.writer, "{timeline}")?;
        writeln!(self.writer, "```")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Runs evaluated: {}*", self.run_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sessbound_core::BoundaryEvaluator;

    #[test]
    fn test_sections_and_footer() {
        let result = BoundaryEvaluator::default()
            .evaluate_labels(&[1, 0, 1], &[1, 0, 0])
            .unwrap();

        let mut buffer = Vec::new();
        {
            let mut formatter = MarkdownFormatter::new(&mut buffer);
            formatter.format_result("first", &result).unwrap();
            formatter
                .format_timeline(&Timeline::from_result(&result))
                .unwrap();
            formatter.format_result("second", &result).unwrap();
            formatter.finish().unwrap();
        }

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("## Session boundary evaluation: first"));
        assert!(text.contains("## Session boundary evaluation: second"));
        assert!(text.contains("```text\nmessages 0..3"));
        assert!(text.ends_with("*Runs evaluated: 2*\n"));
    }
}
