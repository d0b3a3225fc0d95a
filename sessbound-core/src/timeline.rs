//! Text timeline comparing predicted and true session starts
//!
//! The timeline only reads boundary index lists. Graphical plotting is left
//! to external tools, which can consume
//! [`BoundaryPositions`](crate::result::BoundaryPositions) directly.

use crate::boundary::BoundarySet;
use crate::labels::LabelSequence;
use crate::result::EvaluationResult;
use std::fmt;
use std::ops::Range;

const DEFAULT_LINE_WIDTH: usize = 80;

/// Aligned strips of ground truth, predictions and their comparison
///
/// Comparison glyphs: `=` both sides start a session, `+` predicted only,
/// `-` true only, `.` neither.
#[derive(Debug, Clone)]
pub struct Timeline {
    message_count: usize,
    predicted: BoundarySet,
    actual: BoundarySet,
    range: Range<usize>,
    requested: Range<usize>,
    line_width: usize,
}

impl Timeline {
    /// Create a timeline over all messages
    pub fn new(message_count: usize, predicted: &[usize], actual: &[usize]) -> Self {
        Self {
            message_count,
            predicted: BoundarySet::from_positions(predicted.to_vec()),
            actual: BoundarySet::from_positions(actual.to_vec()),
            range: 0..message_count,
            requested: 0..message_count,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }

    /// Create a timeline from the boundary positions kept in a result
    pub fn from_result(result: &EvaluationResult) -> Self {
        Self::new(
            result.message_count,
            &result.boundary_positions.predicted,
            &result.boundary_positions.actual,
        )
    }

    /// Create a timeline straight from label sequences
    pub fn from_labels(predictions: &LabelSequence, ground_truth: &LabelSequence) -> Self {
        let message_count = predictions.len().max(ground_truth.len());
        Self {
            message_count,
            predicted: predictions.boundaries(),
            actual: ground_truth.boundaries(),
            range: 0..message_count,
            requested: 0..message_count,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }

    /// Restrict to a range of message indices, clamped to the sequence
    pub fn with_range(mut self, range: Range<usize>) -> Self {
        let end = range.end.min(self.message_count);
        let start = range.start.min(end);
        self.range = start..end;
        self.requested = range;
        self
    }

    /// Wrap strips after `width` messages
    pub fn with_line_width(mut self, width: usize) -> Self {
        self.line_width = width.max(1);
        self
    }

    /// Range shown
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    fn truth_glyph(&self, i: usize) -> char {
        if self.actual.contains(i) {
            '|'
        } else {
            '.'
        }
    }

    fn predicted_glyph(&self, i: usize) -> char {
        if self.predicted.contains(i) {
            '|'
        } else {
            '.'
        }
    }

    fn comparison_glyph(&self, i: usize) -> char {
        match (self.predicted.contains(i), self.actual.contains(i)) {
            (true, true) => '=',
            (true, false) => '+',
            (false, true) => '-',
            (false, false) => '.',
        }
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.range.is_empty() {
            return writeln!(
                f,
                "(no messages in range {:?} of {} messages)",
                self.requested, self.message_count
            );
        }

        let mut start = self.range.start;
        while start < self.range.end {
            let end = (start + self.line_width).min(self.range.end);
            let strip = |glyph: &dyn Fn(usize) -> char| (start..end).map(glyph).collect::<String>();

            writeln!(f, "messages {start}..{end}")?;
            writeln!(
                f,
                "  index       {}",
                strip(&|i| if i % 10 == 0 { '|' } else { ' ' })
            )?;
            writeln!(f, "  truth       {}", strip(&|i| self.truth_glyph(i)))?;
            writeln!(f, "  predicted   {}", strip(&|i| self.predicted_glyph(i)))?;
            writeln!(f, "  comparison  {}", strip(&|i| self.comparison_glyph(i)))?;
            start = end;
        }

        writeln!(f, "legend: = match  + predicted only  - missed  . none")
    }
}
