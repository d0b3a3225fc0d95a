//! Metric functions for session boundary evaluation
//!
//! Each function is independent and pure. Zero denominators never fault;
//! every function documents the value it falls back to.

use crate::boundary::BoundarySet;

/// Position-wise confusion counts for the "session start" class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfusionCounts {
    /// Predicted start, actual start
    pub true_positives: usize,
    /// Predicted start, actual continuation
    pub false_positives: usize,
    /// Predicted continuation, actual start
    pub false_negatives: usize,
    /// Predicted continuation, actual continuation
    pub true_negatives: usize,
}

impl ConfusionCounts {
    /// Count over equal-length label slices
    pub fn from_labels(predictions: &[u8], ground_truth: &[u8]) -> Self {
        let mut counts = Self::default();
        for (&p, &g) in predictions.iter().zip(ground_truth) {
            match (p, g) {
                (1, 1) => counts.true_positives += 1,
                (1, _) => counts.false_positives += 1,
                (_, 1) => counts.false_negatives += 1,
                _ => counts.true_negatives += 1,
            }
        }
        counts
    }

    /// Total number of positions counted
    pub fn total(&self) -> usize {
        self.true_positives + self.false_positives + self.false_negatives + self.true_negatives
    }

    /// TP / (TP + FN), 0.0 without actual starts
    pub fn true_positive_rate(&self) -> f64 {
        ratio(self.true_positives, self.true_positives + self.false_negatives)
    }

    /// FP / (FP + TN), 0.0 without actual continuations
    pub fn false_positive_rate(&self) -> f64 {
        ratio(self.false_positives, self.false_positives + self.true_negatives)
    }
}

/// Precision, recall and F1 of the "session start" class
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassificationMetrics {
    /// Precision: TP / (TP + FP)
    pub precision: f64,
    /// Recall: TP / (TP + FN)
    pub recall: f64,
    /// F1 score: 2 * (precision * recall) / (precision + recall)
    pub f1_score: f64,
}

impl ClassificationMetrics {
    /// Create metrics from raw counts; each ratio is 0.0 on a zero denominator
    pub fn from_counts(
        true_positives: usize,
        false_positives: usize,
        false_negatives: usize,
    ) -> Self {
        let precision = ratio(true_positives, true_positives + false_positives);
        let recall = ratio(true_positives, true_positives + false_negatives);

        Self {
            precision,
            recall,
            f1_score: harmonic_mean(precision, recall),
        }
    }

    /// Create metrics from confusion counts
    pub fn from_confusion(counts: &ConfusionCounts) -> Self {
        Self::from_counts(
            counts.true_positives,
            counts.false_positives,
            counts.false_negatives,
        )
    }
}

/// Summary of boundary-to-boundary distances
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceStats {
    /// Arithmetic mean
    pub mean: f64,
    /// Median (mean of the two middle values for even counts)
    pub median: f64,
    /// Smallest distance
    pub min: usize,
    /// Largest distance
    pub max: usize,
}

impl DistanceStats {
    /// Summarize distances; `None` for an empty list
    pub fn from_distances(distances: &[usize]) -> Option<Self> {
        if distances.is_empty() {
            return None;
        }

        let mut sorted = distances.to_vec();
        sorted.sort_unstable();

        let n = sorted.len();
        let mean = sorted.iter().sum::<usize>() as f64 / n as f64;
        let median = if n % 2 == 1 {
            sorted[n / 2] as f64
        } else {
            (sorted[n / 2 - 1] + sorted[n / 2]) as f64 / 2.0
        };

        Some(Self {
            mean,
            median,
            min: sorted[0],
            max: sorted[n - 1],
        })
    }
}

/// Fraction of positions where prediction and ground truth agree
///
/// 0.0 for empty input.
pub fn exact_accuracy(predictions: &[u8], ground_truth: &[u8]) -> f64 {
    let agree = predictions
        .iter()
        .zip(ground_truth)
        .filter(|(p, g)| p == g)
        .count();
    ratio(agree, predictions.len().min(ground_truth.len()))
}

/// Position-wise accuracy that forgives near-miss boundaries
///
/// Position `i` is correct when the labels agree, when `i` is a predicted
/// start with a true start within `k`, or when `i` is a true start with a
/// predicted start within `k`. Equal to [`exact_accuracy`] for `k == 0` and
/// non-decreasing in `k`.
pub fn within_k_accuracy(
    predictions: &[u8],
    ground_truth: &[u8],
    predicted: &BoundarySet,
    actual: &BoundarySet,
    k: usize,
) -> f64 {
    let correct = predictions
        .iter()
        .zip(ground_truth)
        .enumerate()
        .filter(|&(i, (&p, &g))| {
            p == g || (p == 1 && actual.has_within(i, k)) || (g == 1 && predicted.has_within(i, k))
        })
        .count();
    ratio(correct, predictions.len().min(ground_truth.len()))
}

/// Boundary-matching F1 at tolerance `k`
///
/// Harmonic mean of the fraction of predicted boundaries with a true
/// boundary within `k` and the fraction of true boundaries with a predicted
/// boundary within `k`. 1.0 when both sets are empty, 0.0 when exactly one is.
pub fn tolerant_f1(predicted: &BoundarySet, actual: &BoundarySet, k: usize) -> f64 {
    match (predicted.is_empty(), actual.is_empty()) {
        (true, true) => 1.0,
        (true, false) | (false, true) => 0.0,
        (false, false) => {
            let precision = ratio(predicted.matched_within(actual, k), predicted.len());
            let recall = ratio(actual.matched_within(predicted, k), actual.len());
            harmonic_mean(precision, recall)
        }
    }
}

/// Boundary precision and recall at tolerance `k`
///
/// Precision is the fraction of predicted boundaries with a true boundary
/// within `k`; 1.0 when nothing was predicted, since no prediction is wrong.
/// Recall is the fraction of true boundaries with a predicted boundary
/// within `k`; 1.0 when there is no true boundary to find.
pub fn boundary_precision_recall(
    predicted: &BoundarySet,
    actual: &BoundarySet,
    k: usize,
) -> (f64, f64) {
    let precision = if predicted.is_empty() {
        1.0
    } else {
        ratio(predicted.matched_within(actual, k), predicted.len())
    };
    let recall = if actual.is_empty() {
        1.0
    } else {
        ratio(actual.matched_within(predicted, k), actual.len())
    };
    (precision, recall)
}

/// Fraction of true boundaries with a predicted boundary inside `[t - radius, t + radius]`
///
/// Without true boundaries the score is a policy choice: 1.0 when nothing
/// was predicted either, 0.0 when any boundary was predicted.
pub fn windowed_accuracy(predicted: &BoundarySet, actual: &BoundarySet, radius: usize) -> f64 {
    if actual.is_empty() {
        return if predicted.is_empty() { 1.0 } else { 0.0 };
    }
    ratio(actual.matched_within(predicted, radius), actual.len())
}

/// Default Pk/WindowDiff window: half the mean true segment length, at least 1
pub fn default_segmentation_window(actual: &BoundarySet, length: usize) -> usize {
    let avg_segment_length = length / (actual.len() + 1);
    (avg_segment_length / 2).max(1)
}

/// Calculate Pk score for session segmentation
///
/// Pk measures the probability that two messages `k` apart are
/// incorrectly classified as being in the same session or in different
/// sessions. 0.0 when the sequence is not longer than `k`.
pub fn pk_score(predicted: &BoundarySet, actual: &BoundarySet, length: usize, k: usize) -> f64 {
    if length <= k {
        return 0.0;
    }

    let pred_segments = boundaries_to_segments(predicted, length);
    let actual_segments = boundaries_to_segments(actual, length);

    let comparisons = length - k;
    let errors = (0..comparisons)
        .filter(|&i| {
            let j = i + k;
            let pred_same = pred_segments[i] == pred_segments[j];
            let actual_same = actual_segments[i] == actual_segments[j];
            pred_same != actual_same
        })
        .count();

    ratio(errors, comparisons)
}

/// Calculate WindowDiff score for session segmentation
///
/// WindowDiff is similar to Pk but compares the number of boundaries
/// within each window, making it more sensitive to near-miss errors.
/// 0.0 when the sequence is not longer than `k`.
pub fn window_diff(predicted: &BoundarySet, actual: &BoundarySet, length: usize, k: usize) -> f64 {
    if length <= k {
        return 0.0;
    }

    let comparisons = length - k;
    let errors = (0..comparisons)
        .filter(|&i| predicted.count_in(i, i + k) != actual.count_in(i, i + k))
        .count();

    ratio(errors, comparisons)
}

/// Convert session starts to a session number for each message
fn boundaries_to_segments(boundaries: &BoundarySet, length: usize) -> Vec<usize> {
    let mut segments = vec![0; length];
    let mut current_segment = 0;
    let mut starts = boundaries.iter().peekable();

    for (i, segment) in segments.iter_mut().enumerate() {
        if starts.next_if(|&start| start <= i).is_some() {
            current_segment += 1;
        }
        *segment = current_segment;
    }

    segments
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

fn harmonic_mean(a: f64, b: f64) -> f64 {
    if a + b > 0.0 {
        2.0 * (a * b) / (a + b)
    } else {
        0.0
    }
}
