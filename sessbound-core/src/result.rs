//! Evaluation results and their JSON persistence

use crate::metrics::ConfusionCounts;

/// Within-k scores for one tolerance level
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToleranceScore {
    /// Tolerance k in messages
    pub tolerance: usize,
    /// Position-wise accuracy forgiving near misses within k
    pub accuracy: f64,
    /// Boundary-matching F1 within k
    pub boundary_f1: f64,
}

/// Predicted and actual session-start indices
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundaryPositions {
    /// Indices predicted as session starts
    pub predicted: Vec<usize>,
    /// Indices labelled as session starts
    pub actual: Vec<usize>,
}

/// Why the distance metrics do or do not have values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceStatus {
    /// Both sides have boundaries; distances are defined
    Measured,
    /// Nothing was predicted
    NoPredictedBoundaries,
    /// The ground truth has no boundaries
    NoTrueBoundaries,
    /// Neither side has boundaries
    NoBoundaries,
}

/// Every metric computed for one evaluation
///
/// Created once by [`BoundaryEvaluator::evaluate`](crate::BoundaryEvaluator::evaluate)
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvaluationResult {
    /// Number of messages evaluated
    pub message_count: usize,

    /// Fraction of positions where labels agree
    pub exact_accuracy: f64,
    /// TP / (TP + FP), 0.0 when nothing was predicted
    pub precision: f64,
    /// TP / (TP + FN), 0.0 when there are no true starts
    pub recall: f64,
    /// Harmonic mean of precision and recall, 0.0 when both are 0
    pub f1_score: f64,
    /// Position-wise confusion counts
    pub confusion: ConfusionCounts,

    /// Within-k scores, one per configured tolerance in ascending order
    pub within_k: Vec<ToleranceScore>,
    /// Radius used for windowed accuracy
    pub window_radius: usize,
    /// Fraction of true boundaries with a predicted boundary in their window
    pub windowed_accuracy: f64,

    /// Mean distance from each predicted boundary to the nearest true one
    pub mean_distance: Option<f64>,
    /// Median of the same distances
    pub median_distance: Option<f64>,
    /// Smallest of the same distances
    pub min_distance: Option<usize>,
    /// Largest of the same distances
    pub max_distance: Option<usize>,
    /// Mean distance from each true boundary to the nearest predicted one
    pub mean_recall_distance: Option<f64>,

    /// Tolerance used for boundary precision/recall
    pub boundary_tolerance: usize,
    /// Fraction of predicted boundaries near a true boundary
    pub boundary_precision: f64,
    /// Fraction of true boundaries near a predicted boundary
    pub boundary_recall: f64,

    /// TP / (TP + FN)
    pub true_positive_rate: f64,
    /// FP / (FP + TN)
    pub false_positive_rate: f64,
    /// Number of predicted session starts
    pub predicted_boundaries: usize,
    /// Number of true session starts
    pub actual_boundaries: usize,
    /// Absolute difference of the two counts
    pub boundary_count_diff: usize,

    /// Window used for Pk and WindowDiff
    pub segmentation_window: usize,
    /// Pk segmentation error
    pub pk_score: f64,
    /// WindowDiff segmentation error
    pub window_diff: f64,

    /// Boundary indices on both sides
    pub boundary_positions: BoundaryPositions,
}

impl EvaluationResult {
    /// Within-k accuracy for a configured tolerance
    pub fn within_k_accuracy(&self, k: usize) -> Option<f64> {
        self.tolerance_score(k).map(|score| score.accuracy)
    }

    /// Scores for a configured tolerance
    pub fn tolerance_score(&self, k: usize) -> Option<&ToleranceScore> {
        self.within_k.iter().find(|score| score.tolerance == k)
    }

    /// Explains whether distance metrics are defined
    pub fn distance_status(&self) -> DistanceStatus {
        match (self.predicted_boundaries, self.actual_boundaries) {
            (0, 0) => DistanceStatus::NoBoundaries,
            (0, _) => DistanceStatus::NoPredictedBoundaries,
            (_, 0) => DistanceStatus::NoTrueBoundaries,
            _ => DistanceStatus::Measured,
        }
    }

    /// Serialize to pretty JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from JSON
    #[cfg(feature = "serde")]
    pub fn from_json(content: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Write pretty JSON to `writer` and flush it
    #[cfg(feature = "serde")]
    pub fn write_json<W: std::io::Write>(&self, mut writer: W) -> crate::Result<()> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Save as a JSON file, replacing any existing file
    #[cfg(feature = "serde")]
    pub fn save_json(&self, path: impl AsRef<std::path::Path>) -> crate::Result<()> {
        let file = std::fs::File::create(path)?;
        self.write_json(std::io::BufWriter::new(file))
    }

    /// Load a result saved by [`save_json`](Self::save_json)
    #[cfg(feature = "serde")]
    pub fn load_json(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let file = std::fs::File::open(path)?;
        Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
    }
}
