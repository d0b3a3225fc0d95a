//! Synthetic conversations for benchmarks
//!
//! Ground truth is generated as sessions of random length; predictions are
//! derived from it with a controlled error pattern, so the expected metric
//! behaviour is known in advance.

use serde::Serialize;
use sessbound_core::LabelSequence;
use std::fmt;

/// Predictions paired with the ground truth they are scored against
///
/// Serializes to the label file shape read by `sessbound evaluate`.
#[derive(Debug, Clone, Serialize)]
pub struct TestRun {
    /// Name/identifier for this run
    pub name: String,
    /// Predicted session starts
    pub predictions: LabelSequence,
    /// True session starts
    pub ground_truth: LabelSequence,
    /// Optional metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}

impl TestRun {
    /// Create a new run
    pub fn new(
        name: impl Into<String>,
        predictions: LabelSequence,
        ground_truth: LabelSequence,
    ) -> Self {
        Self {
            name: name.into(),
            predictions,
            ground_truth,
            metadata: None,
        }
    }

    /// Add metadata to the run
    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }

    /// Number of messages
    pub fn message_count(&self) -> usize {
        self.ground_truth.len()
    }

    /// Number of true sessions
    pub fn session_count(&self) -> usize {
        self.ground_truth.start_count()
    }

    /// Check that the run can be evaluated
    pub fn validate(&self) -> Result<(), String> {
        if self.ground_truth.is_empty() {
            return Err(format!("Run '{}' has no messages", self.name));
        }
        if self.predictions.len() != self.ground_truth.len() {
            return Err(format!(
                "Run '{}' has {} predictions for {} messages",
                self.name,
                self.predictions.len(),
                self.ground_truth.len()
            ));
        }
        Ok(())
    }

    /// Serialize as a label file
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for TestRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TestRun '{}': {} messages, {} sessions",
            self.name,
            self.message_count(),
            self.session_count()
        )
    }
}

/// Generate runs with known error patterns
pub mod generators {
    use super::TestRun;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use sessbound_core::LabelSequence;

    /// Session starts for a conversation of `message_count` messages
    ///
    /// Session lengths are uniform in `1..2 * mean_session_length`; the first
    /// message always starts a session.
    pub fn session_starts(message_count: usize, mean_session_length: usize, seed: u64) -> Vec<u8> {
        let mut rng = StdRng::seed_from_u64(seed);
        let max_length = (2 * mean_session_length).saturating_sub(1).max(1);
        let mut labels = vec![0u8; message_count];

        let mut i = 0;
        while i < message_count {
            labels[i] = 1;
            i += rng.gen_range(1..=max_length);
        }
        labels
    }

    fn run(name: String, predictions: Vec<u8>, truth: Vec<u8>) -> TestRun {
        TestRun::new(
            name,
            LabelSequence::from_flags(predictions.into_iter().map(|l| l == 1)),
            LabelSequence::from_flags(truth.into_iter().map(|l| l == 1)),
        )
    }

    /// Predictions identical to the ground truth
    pub fn perfect(message_count: usize, mean_session_length: usize, seed: u64) -> TestRun {
        let truth = session_starts(message_count, mean_session_length, seed);
        run(format!("perfect_{message_count}"), truth.clone(), truth)
    }

    /// Each true start is moved by up to `max_shift` messages with probability `shift_rate`
    ///
    /// Starts that land on the same message merge, so shifted runs may
    /// predict slightly fewer sessions than exist.
    pub fn shifted(
        message_count: usize,
        mean_session_length: usize,
        shift_rate: f64,
        max_shift: usize,
        seed: u64,
    ) -> TestRun {
        let truth = session_starts(message_count, mean_session_length, seed);
        let mut rng = StdRng::seed_from_u64(seed.rotate_left(17));
        let mut predictions = vec![0u8; message_count];

        for (i, _) in truth.iter().enumerate().filter(|(_, label)| **label == 1) {
            let mut target = i;
            if max_shift > 0 && rng.gen_bool(shift_rate.clamp(0.0, 1.0)) {
                let offset = rng.gen_range(1..=max_shift);
                target = if rng.gen_bool(0.5) {
                    i.saturating_sub(offset)
                } else {
                    (i + offset).min(message_count - 1)
                };
            }
            predictions[target] = 1;
        }

        run(
            format!("shifted_{message_count}_{:.0}pct", shift_rate * 100.0),
            predictions,
            truth,
        )
        .with_metadata(format!("max shift {max_shift}"))
    }

    /// Every label flipped independently with probability `flip_rate`
    pub fn noisy(
        message_count: usize,
        mean_session_length: usize,
        flip_rate: f64,
        seed: u64,
    ) -> TestRun {
        let truth = session_starts(message_count, mean_session_length, seed);
        let mut rng = StdRng::seed_from_u64(seed.rotate_left(31));
        let predictions = truth
            .iter()
            .map(|&label| {
                if rng.gen_bool(flip_rate.clamp(0.0, 1.0)) {
                    1 - label
                } else {
                    label
                }
            })
            .collect();

        run(
            format!("noisy_{message_count}_{:.0}pct", flip_rate * 100.0),
            predictions,
            truth,
        )
    }

    /// A model that never predicts a session start
    pub fn never_starts(message_count: usize, mean_session_length: usize, seed: u64) -> TestRun {
        let truth = session_starts(message_count, mean_session_length, seed);
        run(
            format!("never_starts_{message_count}"),
            vec![0; message_count],
            truth,
        )
    }

    /// One long session with no labelled starts on either side
    pub fn all_continuations(message_count: usize) -> TestRun {
        run(
            format!("all_continuations_{message_count}"),
            vec![0; message_count],
            vec![0; message_count],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_starts_are_deterministic() {
        let a = generators::session_starts(500, 8, 42);
        let b = generators::session_starts(500, 8, 42);
        assert_eq!(a, b);
        assert_eq!(a.len(), 500);
        assert_eq!(a[0], 1);
    }

    #[test]
    fn test_error_patterns_are_reproducible_per_seed() {
        let a = generators::shifted(400, 10, 0.5, 3, 11);
        let b = generators::shifted(400, 10, 0.5, 3, 11);
        assert_eq!(a.predictions, b.predictions);
        assert_ne!(a.predictions, a.ground_truth);

        let noisy = generators::noisy(400, 10, 0.2, 11);
        assert_eq!(noisy.predictions, generators::noisy(400, 10, 0.2, 11).predictions);
        assert_eq!(noisy.ground_truth, a.ground_truth);
    }

    #[test]
    fn test_perfect_run() {
        let run = generators::perfect(200, 10, 7);
        assert!(run.validate().is_ok());
        assert_eq!(run.predictions, run.ground_truth);
        assert!(run.session_count() > 1);
    }

    #[test]
    fn test_zero_shift_rate_is_perfect() {
        let run = generators::shifted(300, 10, 0.0, 3, 9);
        assert_eq!(run.predictions, run.ground_truth);
        assert_eq!(run.name, "shifted_300_0pct");
    }

    #[test]
    fn test_validation() {
        let empty = TestRun::new("empty", LabelSequence::default(), LabelSequence::default());
        assert!(empty.validate().is_err());

        let uneven = TestRun::new(
            "uneven",
            LabelSequence::from_flags([true]),
            LabelSequence::from_flags([true, false]),
        );
        assert!(uneven.validate().is_err());
    }

    #[test]
    fn test_label_file_json() {
        let run = generators::all_continuations(3);
        let json: serde_json::Value = serde_json::from_str(&run.to_json().unwrap()).unwrap();
        assert_eq!(json["name"], "all_continuations_3");
        assert_eq!(json["predictions"], serde_json::json!([0, 0, 0]));
        assert!(json.get("metadata").is_none());
    }
}
