//! Common benchmark harness utilities
//!
//! Shared Criterion configuration for the benchmark targets.

use criterion::{measurement::WallTime, BenchmarkGroup, Criterion, Throughput};
use sessbound_core::{BoundaryEvaluator, EvaluationResult, EvaluatorConfig};
use std::time::Duration;

use crate::data::TestRun;

/// Configure Criterion with standard settings
pub fn configure_criterion() -> Criterion {
    BenchmarkConfig::default().criterion()
}

/// Standard benchmark group configuration
pub struct BenchmarkConfig {
    pub warm_up_time: Duration,
    pub measurement_time: Duration,
    pub sample_size: usize,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            warm_up_time: Duration::from_secs(1),
            measurement_time: Duration::from_secs(3),
            sample_size: 50,
        }
    }
}

impl BenchmarkConfig {
    /// Create a configuration for quick benchmarks
    pub fn quick() -> Self {
        Self {
            warm_up_time: Duration::from_millis(500),
            measurement_time: Duration::from_secs(1),
            sample_size: 20,
        }
    }

    /// Build a Criterion instance from this configuration
    pub fn criterion(&self) -> Criterion {
        Criterion::default()
            .warm_up_time(self.warm_up_time)
            .measurement_time(self.measurement_time)
            .sample_size(self.sample_size)
            .noise_threshold(0.05)
    }
}

/// Report throughput in messages per second
pub fn setup_throughput(group: &mut BenchmarkGroup<'_, WallTime>, message_count: usize) {
    group.throughput(Throughput::Elements(message_count as u64));
}

/// Evaluator over the given tolerance levels
///
/// Panics on an empty tolerance list; benchmark inputs are fixed.
pub fn evaluator_with(levels: &[usize]) -> BoundaryEvaluator {
    let config = EvaluatorConfig::with_tolerances(levels.to_vec())
        .expect("benchmark tolerance levels are non-empty");
    BoundaryEvaluator::new(config).expect("benchmark configuration is valid")
}

/// Evaluate a generated run
pub fn evaluate_run(evaluator: &BoundaryEvaluator, run: &TestRun) -> EvaluationResult {
    evaluator
        .evaluate(&run.predictions, &run.ground_truth)
        .expect("generated runs have matching lengths")
}
