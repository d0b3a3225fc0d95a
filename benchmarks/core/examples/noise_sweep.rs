//! Print how the headline metrics respond to increasingly displaced predictions
//!
//! ```bash
//! cargo run -p sessbound-benchmarks --example noise_sweep
//! ```

use sessbound_benchmarks::constants::{message_counts, MEAN_SESSION_LENGTH, SEED};
use sessbound_benchmarks::generators;
use sessbound_benchmarks::harness::evaluate_run;
use sessbound_core::{BoundaryEvaluator, RunComparison};

fn main() {
    let evaluator = BoundaryEvaluator::default();
    let size = message_counts::MEDIUM;

    let mut runs = Vec::new();
    for max_shift in [1, 3, 6] {
        for rate in [0.1, 0.5] {
            let mut run = generators::shifted(size, MEAN_SESSION_LENGTH, rate, max_shift, SEED);
            run.name = format!("{}pct_shift{}", (rate * 100.0) as u32, max_shift);
            runs.push(run);
        }
    }
    runs.push(generators::noisy(size, MEAN_SESSION_LENGTH, 0.05, SEED));

    let results: Vec<_> = runs
        .iter()
        .map(|run| (run.name.as_str(), evaluate_run(&evaluator, run)))
        .collect();

    println!("Metric response to prediction errors ({size} messages)");
    println!();
    let comparison = RunComparison::new(results.iter().map(|(name, result)| (*name, result)));
    print!("{comparison}");
}
