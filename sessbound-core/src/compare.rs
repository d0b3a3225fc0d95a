//! Side-by-side comparison of evaluation results across model runs

use crate::result::EvaluationResult;
use std::collections::BTreeSet;
use std::fmt;

/// One metric across all runs
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    /// Metric label
    pub metric: String,
    /// Value per run, `None` when the run does not define it
    pub values: Vec<Option<f64>>,
    /// Whether smaller values are better (distances)
    pub lower_is_better: bool,
}

impl ComparisonRow {
    fn new(metric: impl Into<String>, values: Vec<Option<f64>>, lower_is_better: bool) -> Self {
        Self {
            metric: metric.into(),
            values,
            lower_is_better,
        }
    }

    /// Index of the best run, `None` if no run defines the metric
    ///
    /// Ties go to the earliest run.
    pub fn best(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, value) in self.values.iter().enumerate() {
            let Some(v) = *value else { continue };
            let better = match best {
                None => true,
                Some((_, b)) if self.lower_is_better => v < b,
                Some((_, b)) => v > b,
            };
            if better {
                best = Some((i, v));
            }
        }
        best.map(|(i, _)| i)
    }
}

/// Headline metrics of several named runs
#[derive(Debug, Clone, PartialEq)]
pub struct RunComparison {
    runs: Vec<String>,
    rows: Vec<ComparisonRow>,
}

impl RunComparison {
    /// Build a comparison from named results, in the given order
    pub fn new<'a, I>(results: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a EvaluationResult)>,
    {
        let (runs, results): (Vec<String>, Vec<&EvaluationResult>) = results
            .into_iter()
            .map(|(name, result)| (name.to_string(), result))
            .unzip();

        let mut rows = vec![
            ComparisonRow::new(
                "Exact accuracy",
                column(&results, |r| Some(r.exact_accuracy)),
                false,
            ),
            ComparisonRow::new("Precision", column(&results, |r| Some(r.precision)), false),
            ComparisonRow::new("Recall", column(&results, |r| Some(r.recall)), false),
            ComparisonRow::new("F1", column(&results, |r| Some(r.f1_score)), false),
        ];

        let tolerances: BTreeSet<usize> = results
            .iter()
            .flat_map(|r| r.within_k.iter().map(|s| s.tolerance))
            .collect();
        for k in tolerances {
            rows.push(ComparisonRow::new(
                format!("Within-{k} accuracy"),
                column(&results, |r| r.within_k_accuracy(k)),
                false,
            ));
        }

        rows.extend([
            ComparisonRow::new(
                "Windowed accuracy",
                column(&results, |r| Some(r.windowed_accuracy)),
                false,
            ),
            ComparisonRow::new(
                "Boundary precision",
                column(&results, |r| Some(r.boundary_precision)),
                false,
            ),
            ComparisonRow::new(
                "Boundary recall",
                column(&results, |r| Some(r.boundary_recall)),
                false,
            ),
            ComparisonRow::new("Mean distance", column(&results, |r| r.mean_distance), true),
            ComparisonRow::new("Pk", column(&results, |r| Some(r.pk_score)), true),
            ComparisonRow::new("WindowDiff", column(&results, |r| Some(r.window_diff)), true),
        ]);

        Self { runs, rows }
    }

    /// Run names, one per column
    pub fn runs(&self) -> &[String] {
        &self.runs
    }

    /// Metric rows
    pub fn rows(&self) -> &[ComparisonRow] {
        &self.rows
    }

    /// Find a row by metric label
    pub fn row(&self, metric: &str) -> Option<&ComparisonRow> {
        self.rows.iter().find(|row| row.metric == metric)
    }

    /// Render as a markdown table, best value per row in bold
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str("| Metric |");
        for run in &self.runs {
            out.push_str(&format!(" {run} |"));
        }
        out.push('\n');
        out.push_str("|---|");
        out.push_str(&"---|".repeat(self.runs.len()));
        out.push('\n');

        for row in &self.rows {
            let best = row.best();
            out.push_str(&format!("| {} |", row.metric));
            for (i, value) in row.values.iter().enumerate() {
                let cell = fmt_value(*value);
                if best == Some(i) {
                    out.push_str(&format!(" **{cell}** |"));
                } else {
                    out.push_str(&format!(" {cell} |"));
                }
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for RunComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width = self
            .rows
            .iter()
            .map(|row| row.metric.len())
            .max()
            .unwrap_or(0)
            .max("Metric".len());
        let column_width = self
            .runs
            .iter()
            .map(|run| run.len())
            .max()
            .unwrap_or(0)
            .max(7);

        write!(f, "{:<label_width$}", "Metric")?;
        for run in &self.runs {
            write!(f, "  {run:>column_width$}")?;
        }
        writeln!(f)?;

        for row in &self.rows {
            let best = row.best();
            write!(f, "{:<label_width$}", row.metric)?;
            for (i, value) in row.values.iter().enumerate() {
                let marker = if best == Some(i) && self.runs.len() > 1 {
                    "*"
                } else {
                    " "
                };
                let cell = format!("{}{marker}", fmt_value(*value));
                write!(f, "  {cell:>column_width$}")?;
            }
            writeln!(f)?;
        }

        if self.runs.len() > 1 {
            writeln!(f, "* best run for the metric")?;
        }
        Ok(())
    }
}

fn column<F>(results: &[&EvaluationResult], metric: F) -> Vec<Option<f64>>
where
    F: Fn(&EvaluationResult) -> Option<f64>,
{
    results.iter().map(|&r| metric(r)).collect()
}

fn fmt_value(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.3}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoundaryEvaluator;

    fn results() -> (EvaluationResult, EvaluationResult) {
        let evaluator = BoundaryEvaluator::default();
        let good = evaluator
            .evaluate_labels(&[1, 0, 0, 1, 0, 0], &[1, 0, 0, 1, 0, 0])
            .unwrap();
        let weak = evaluator
            .evaluate_labels(&[0, 0, 0, 0, 0, 1], &[1, 0, 0, 1, 0, 0])
            .unwrap();
        (good, weak)
    }

    #[test]
    fn test_best_run_per_row() {
        let (good, weak) = results();
        let comparison = RunComparison::new([("weak", &weak), ("good", &good)]);

        assert_eq!(comparison.runs(), &["weak".to_string(), "good".to_string()]);
        assert_eq!(comparison.row("F1").unwrap().best(), Some(1));
        assert_eq!(comparison.row("Mean distance").unwrap().best(), Some(1));
        assert!(comparison.row("Within-5 accuracy").is_some());
    }

    #[test]
    fn test_missing_tolerance_is_na() {
        let (good, _) = results();
        let narrow = BoundaryEvaluator::with_tolerances(vec![7])
            .unwrap()
            .evaluate_labels(&[1, 0], &[1, 0])
            .unwrap();
        let comparison = RunComparison::new([("default", &good), ("narrow", &narrow)]);

        let row = comparison.row("Within-7 accuracy").unwrap();
        assert_eq!(row.values, vec![None, Some(1.0)]);
        assert_eq!(row.best(), Some(1));
    }

    #[test]
    fn test_renderings() {
        let (good, weak) = results();
        let comparison = RunComparison::new([("weak", &weak), ("good", &good)]);

        let text = comparison.to_string();
        assert!(text.starts_with("Metric"));
        assert!(text.contains("1.000*"));
        assert!(text.contains("* best run for the metric"));

        let markdown = comparison.to_markdown();
        assert!(markdown.starts_with("| Metric | weak | good |"));
        assert!(markdown.contains("| F1 | 0.000 | **1.000** |"));
    }
}
