//! Human-readable evaluation reports
//!
//! Formatting only: every value shown is read from an [`EvaluationResult`].

use crate::result::{DistanceStatus, EvaluationResult};
use std::fmt;

const RULE_WIDTH: usize = 60;

/// Plain-text report for one evaluation
///
/// ```
/// use sessbound_core::{BoundaryEvaluator, Report};
///
/// let result = BoundaryEvaluator::default()
///     .evaluate_labels(&[1, 0, 1, 0], &[1, 0, 0, 1])
///     .unwrap();
/// let text = Report::new(&result, "baseline").to_string();
/// assert!(text.contains("SESSION BOUNDARY EVALUATION REPORT - baseline"));
/// ```
pub struct Report<'a> {
    result: &'a EvaluationResult,
    model_name: &'a str,
}

impl<'a> Report<'a> {
    /// Create a report for a named model run
    pub fn new(result: &'a EvaluationResult, model_name: &'a str) -> Self {
        Self { result, model_name }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.result;
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(f, "{rule}")?;
        writeln!(f, "SESSION BOUNDARY EVALUATION REPORT - {}", self.model_name)?;
        writeln!(f, "{rule}")?;
        writeln!(f, "Messages evaluated:   {}", r.message_count)?;

        writeln!(f)?;
        writeln!(f, "STANDARD CLASSIFICATION METRICS:")?;
        writeln!(f, "   Exact Accuracy:     {:.3}", r.exact_accuracy)?;
        writeln!(f, "   Precision:          {:.3}", r.precision)?;
        writeln!(f, "   Recall:             {:.3}", r.recall)?;
        writeln!(f, "   F1-Score:           {:.3}", r.f1_score)?;
        writeln!(f, "   True Positive Rate: {:.3}", r.true_positive_rate)?;
        writeln!(f, "   False Positive Rate:{:.3}", r.false_positive_rate)?;

        writeln!(f)?;
        writeln!(f, "TOLERANCE-BASED METRICS:")?;
        for score in &r.within_k {
            writeln!(
                f,
                "   Within-{} Accuracy:  {:.3}   (boundary F1 {:.3})",
                score.tolerance, score.accuracy, score.boundary_f1
            )?;
        }
        writeln!(
            f,
            "   Windowed Accuracy:  {:.3}   (radius {})",
            r.windowed_accuracy, r.window_radius
        )?;

        writeln!(f)?;
        writeln!(f, "BOUNDARY DISTANCE METRICS:")?;
        match r.distance_status() {
            DistanceStatus::Measured => {
                writeln!(f, "   Mean Distance:      {}", fmt_distance(r.mean_distance))?;
                writeln!(f, "   Median Distance:    {}", fmt_distance(r.median_distance))?;
                writeln!(
                    f,
                    "   Distance Range:     {}..{}",
                    fmt_count(r.min_distance),
                    fmt_count(r.max_distance)
                )?;
                writeln!(
                    f,
                    "   Mean Miss Distance: {}",
                    fmt_distance(r.mean_recall_distance)
                )?;
            }
            status => {
                writeln!(f, "   Mean Distance:      n/a ({})", describe(status))?;
                writeln!(f, "   Median Distance:    n/a ({})", describe(status))?;
            }
        }
        writeln!(
            f,
            "   Boundary Precision: {:.3}   (within {})",
            r.boundary_precision, r.boundary_tolerance
        )?;
        writeln!(
            f,
            "   Boundary Recall:    {:.3}   (within {})",
            r.boundary_recall, r.boundary_tolerance
        )?;

        writeln!(f)?;
        writeln!(f, "BOUNDARY STATISTICS:")?;
        writeln!(f, "   Predicted Boundaries: {}", r.predicted_boundaries)?;
        writeln!(f, "   Actual Boundaries:    {}", r.actual_boundaries)?;
        writeln!(f, "   Count Difference:     {}", r.boundary_count_diff)?;

        writeln!(f)?;
        writeln!(f, "SEGMENTATION METRICS (window {}):", r.segmentation_window)?;
        writeln!(f, "   Pk:                 {:.3}", r.pk_score)?;
        writeln!(f, "   WindowDiff:         {:.3}", r.window_diff)?;

        let cm = &r.confusion;
        writeln!(f)?;
        writeln!(f, "CONFUSION MATRIX:")?;
        writeln!(
            f,
            "   True Positives:  {:4}   False Positives: {:4}",
            cm.true_positives, cm.false_positives
        )?;
        writeln!(
            f,
            "   False Negatives: {:4}   True Negatives:  {:4}",
            cm.false_negatives, cm.true_negatives
        )?;

        writeln!(f)?;
        writeln!(f, "{rule}")
    }
}

/// Markdown report for one evaluation
pub struct MarkdownReport<'a> {
    result: &'a EvaluationResult,
    model_name: &'a str,
}

impl<'a> MarkdownReport<'a> {
    /// Create a markdown report for a named model run
    pub fn new(result: &'a EvaluationResult, model_name: &'a str) -> Self {
        Self { result, model_name }
    }
}

impl fmt::Display for MarkdownReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.result;

        writeln!(f, "## Session boundary evaluation: {}", self.model_name)?;
        writeln!(f)?;
        writeln!(f, "{} messages evaluated.", r.message_count)?;
        writeln!(f)?;
        writeln!(f, "| Metric | Value |")?;
        writeln!(f, "|---|---|")?;
        writeln!(f, "| Exact accuracy | {:.3} |", r.exact_accuracy)?;
        writeln!(f, "| Precision | {:.3} |", r.precision)?;
        writeln!(f, "| Recall | {:.3} |", r.recall)?;
        writeln!(f, "| F1 | {:.3} |", r.f1_score)?;
        for score in &r.within_k {
            writeln!(
                f,
                "| Within-{} accuracy | {:.3} |",
                score.tolerance, score.accuracy
            )?;
            writeln!(
                f,
                "| Within-{} boundary F1 | {:.3} |",
                score.tolerance, score.boundary_f1
            )?;
        }
        writeln!(
            f,
            "| Windowed accuracy (radius {}) | {:.3} |",
            r.window_radius, r.windowed_accuracy
        )?;
        match r.distance_status() {
            DistanceStatus::Measured => {
                writeln!(f, "| Mean distance | {} |", fmt_distance(r.mean_distance))?;
                writeln!(f, "| Median distance | {} |", fmt_distance(r.median_distance))?;
                writeln!(
                    f,
                    "| Distance range | {}..{} |",
                    fmt_count(r.min_distance),
                    fmt_count(r.max_distance)
                )?;
                writeln!(
                    f,
                    "| Mean miss distance | {} |",
                    fmt_distance(r.mean_recall_distance)
                )?;
            }
            status => {
                writeln!(f, "| Mean distance | n/a ({}) |", describe(status))?;
                writeln!(f, "| Median distance | n/a ({}) |", describe(status))?;
            }
        }
        writeln!(
            f,
            "| Boundary precision (k={}) | {:.3} |",
            r.boundary_tolerance, r.boundary_precision
        )?;
        writeln!(
            f,
            "| Boundary recall (k={}) | {:.3} |",
            r.boundary_tolerance, r.boundary_recall
        )?;
        writeln!(f, "| True positive rate | {:.3} |", r.true_positive_rate)?;
        writeln!(f, "| False positive rate | {:.3} |", r.false_positive_rate)?;
        writeln!(f, "| Boundary count difference | {} |", r.boundary_count_diff)?;
        writeln!(f, "| Pk | {:.3} |", r.pk_score)?;
        writeln!(f, "| WindowDiff | {:.3} |", r.window_diff)?;
        writeln!(f)?;

        let cm = &r.confusion;
        writeln!(f, "| | Actual start | Actual continuation |")?;
        writeln!(f, "|---|---|---|")?;
        writeln!(
            f,
            "| **Predicted start** | {} | {} |",
            cm.true_positives, cm.false_positives
        )?;
        writeln!(
            f,
            "| **Predicted continuation** | {} | {} |",
            cm.false_negatives, cm.true_negatives
        )?;
        writeln!(f)?;
        writeln!(f, "---")?;
        writeln!(
            f,
            "*Predicted boundaries: {}, actual boundaries: {}*",
            r.predicted_boundaries, r.actual_boundaries
        )
    }
}

fn describe(status: DistanceStatus) -> &'static str {
    match status {
        DistanceStatus::Measured => "measured",
        DistanceStatus::NoPredictedBoundaries => "no predicted boundaries",
        DistanceStatus::NoTrueBoundaries => "no true boundaries",
        DistanceStatus::NoBoundaries => "no boundaries on either side",
    }
}

fn fmt_distance(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.2}"))
}

fn fmt_count(value: Option<usize>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoundaryEvaluator;

    fn evaluate(p: &[u8], g: &[u8]) -> EvaluationResult {
        BoundaryEvaluator::default().evaluate_labels(p, g).unwrap()
    }

    #[test]
    fn test_report_lists_every_section() {
        let result = evaluate(&[1, 0, 0, 1, 0, 1, 0, 0], &[1, 0, 0, 0, 1, 1, 0, 0]);
        let text = Report::new(&result, "gpt").to_string();

        assert!(text.contains("SESSION BOUNDARY EVALUATION REPORT - gpt"));
        assert!(text.contains("Exact Accuracy:     0.750"));
        assert!(text.contains("Within-1 Accuracy:  1.000"));
        assert!(text.contains("Within-5 Accuracy:"));
        assert!(text.contains("Windowed Accuracy:  1.000"));
        assert!(text.contains("Mean Distance:      0.33"));
        assert!(text.contains("Median Distance:    0.00"));
        assert!(text.contains("Boundary Precision: 1.000"));
        assert!(text.contains("Count Difference:     0"));
        assert!(text.contains("Pk:"));
        assert!(text.contains("True Positives:     2   False Positives:    1"));
        assert!(text.contains("False Negatives:    1   True Negatives:     4"));
    }

    #[test]
    fn test_report_explains_undefined_distances() {
        let none_predicted = evaluate(&[0, 0, 0], &[0, 1, 0]);
        let text = Report::new(&none_predicted, "m").to_string();
        assert!(text.contains("Mean Distance:      n/a (no predicted boundaries)"));

        let none_at_all = evaluate(&[0, 0], &[0, 0]);
        let text = Report::new(&none_at_all, "m").to_string();
        assert!(text.contains("n/a (no boundaries on either side)"));

        let perfect = evaluate(&[0, 1], &[0, 1]);
        let text = Report::new(&perfect, "m").to_string();
        assert!(text.contains("Mean Distance:      0.00"));
    }

    #[test]
    fn test_markdown_report() {
        let result = evaluate(&[1, 0, 1], &[1, 0, 0]);
        let text = MarkdownReport::new(&result, "run-a").to_string();

        assert!(text.starts_with("## Session boundary evaluation: run-a"));
        assert!(text.contains("| Exact accuracy | 0.667 |"));
        assert!(text.contains("| **Predicted start** | 1 | 1 |"));
        assert!(text.contains("*Predicted boundaries: 2, actual boundaries: 1*"));
    }

    #[test]
    fn test_markdown_report_matches_text_metrics() {
        let result = evaluate(&[1, 0, 0, 1, 0, 1, 0, 0], &[1, 0, 0, 0, 1, 1, 0, 0]);
        let text = MarkdownReport::new(&result, "gpt").to_string();

        assert!(text.contains("| Mean distance | 0.33 |"));
        assert!(text.contains("| Distance range | 0..1 |"));
        assert!(text.contains("| Mean miss distance | 0.33 |"));
        assert!(text.contains("| True positive rate | 0.667 |"));
        assert!(text.contains("| False positive rate | 0.200 |"));
        assert!(text.contains("| Boundary count difference | 0 |"));

        let none_predicted = evaluate(&[0, 0, 0], &[0, 1, 0]);
        let text = MarkdownReport::new(&none_predicted, "m").to_string();
        assert!(text.contains("| Mean distance | n/a (no predicted boundaries) |"));
        assert!(!text.contains("Distance range"));
        assert!(text.contains("| True positive rate | 0.000 |"));
        assert!(text.contains("| Boundary count difference | 1 |"));
    }
}
