//! Boundary evaluator

use crate::config::EvaluatorConfig;
use crate::error::{Result, ValidationError};
use crate::labels::LabelSequence;
use crate::metrics::{self, ClassificationMetrics, ConfusionCounts, DistanceStats};
use crate::result::{BoundaryPositions, EvaluationResult, ToleranceScore};

/// Computes every session-boundary metric for a pair of label sequences
///
/// The evaluator holds only its configuration, so one instance can be
/// shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct BoundaryEvaluator {
    config: EvaluatorConfig,
}

impl BoundaryEvaluator {
    /// Create an evaluator, validating the configuration
    pub fn new(config: EvaluatorConfig) -> Result<Self> {
        Ok(Self {
            config: config.validate()?,
        })
    }

    /// Create an evaluator with the given tolerance levels
    pub fn with_tolerances(levels: impl Into<Vec<usize>>) -> Result<Self> {
        Self::new(EvaluatorConfig::builder().tolerance_levels(levels).build()?)
    }

    /// The configuration in use
    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Evaluate raw 0/1 slices
    pub fn evaluate_labels(
        &self,
        predictions: &[u8],
        ground_truth: &[u8],
    ) -> std::result::Result<EvaluationResult, ValidationError> {
        check_lengths(predictions.len(), ground_truth.len())?;
        let predictions = LabelSequence::new(predictions.to_vec())?;
        let ground_truth = LabelSequence::new(ground_truth.to_vec())?;
        self.evaluate(&predictions, &ground_truth)
    }

    /// Evaluate predicted session starts against the ground truth
    pub fn evaluate(
        &self,
        predictions: &LabelSequence,
        ground_truth: &LabelSequence,
    ) -> std::result::Result<EvaluationResult, ValidationError> {
        check_lengths(predictions.len(), ground_truth.len())?;

        let p = predictions.as_slice();
        let g = ground_truth.as_slice();
        let n = p.len();
        let predicted = predictions.boundaries();
        let actual = ground_truth.boundaries();

        let confusion = ConfusionCounts::from_labels(p, g);
        let classification = ClassificationMetrics::from_confusion(&confusion);

        let within_k = self
            .config
            .tolerance_levels
            .iter()
            .map(|&k| ToleranceScore {
                tolerance: k,
                accuracy: metrics::within_k_accuracy(p, g, &predicted, &actual, k),
                boundary_f1: metrics::tolerant_f1(&predicted, &actual, k),
            })
            .collect();

        let distances = DistanceStats::from_distances(&predicted.distances_to(&actual));
        let recall_distances = DistanceStats::from_distances(&actual.distances_to(&predicted));

        let boundary_tolerance = self.config.effective_boundary_tolerance();
        let (boundary_precision, boundary_recall) =
            metrics::boundary_precision_recall(&predicted, &actual, boundary_tolerance);

        let segmentation_window = self
            .config
            .segmentation_window
            .unwrap_or_else(|| metrics::default_segmentation_window(&actual, n));

        let result = EvaluationResult {
            message_count: n,
            exact_accuracy: metrics::exact_accuracy(p, g),
            precision: classification.precision,
            recall: classification.recall,
            f1_score: classification.f1_score,
            confusion,
            within_k,
            window_radius: self.config.window_radius,
            windowed_accuracy: metrics::windowed_accuracy(
                &predicted,
                &actual,
                self.config.window_radius,
            ),
            mean_distance: distances.map(|d| d.mean),
            median_distance: distances.map(|d| d.median),
            min_distance: distances.map(|d| d.min),
            max_distance: distances.map(|d| d.max),
            mean_recall_distance: recall_distances.map(|d| d.mean),
            boundary_tolerance,
            boundary_precision,
            boundary_recall,
            true_positive_rate: confusion.true_positive_rate(),
            false_positive_rate: confusion.false_positive_rate(),
            predicted_boundaries: predicted.len(),
            actual_boundaries: actual.len(),
            boundary_count_diff: predicted.len().abs_diff(actual.len()),
            segmentation_window,
            pk_score: metrics::pk_score(&predicted, &actual, n, segmentation_window),
            window_diff: metrics::window_diff(&predicted, &actual, n, segmentation_window),
            boundary_positions: BoundaryPositions {
                predicted: predicted.into(),
                actual: actual.into(),
            },
        };

        log::debug!(
            "evaluated {} messages: exact={:.3} f1={:.3} predicted={} actual={}",
            n,
            result.exact_accuracy,
            result.f1_score,
            result.predicted_boundaries,
            result.actual_boundaries
        );

        Ok(result)
    }
}

fn check_lengths(predictions: usize, ground_truth: usize) -> std::result::Result<(), ValidationError> {
    if predictions != ground_truth {
        return Err(ValidationError::LengthMismatch {
            predictions,
            ground_truth,
        });
    }
    if predictions == 0 {
        return Err(ValidationError::Empty);
    }
    Ok(())
}

/// Evaluate in one call with the given tolerance levels (defaults when `None`)
pub fn evaluate_session_predictions(
    predictions: &[u8],
    ground_truth: &[u8],
    tolerance_levels: Option<&[usize]>,
) -> Result<EvaluationResult> {
    let evaluator = match tolerance_levels {
        Some(levels) => BoundaryEvaluator::with_tolerances(levels.to_vec())?,
        None => BoundaryEvaluator::default(),
    };
    Ok(evaluator.evaluate_labels(predictions, ground_truth)?)
}
