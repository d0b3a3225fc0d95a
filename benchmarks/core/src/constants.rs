//! Constants for benchmarking
//!
//! This module defines common constants used across benchmarks
//! to avoid magic numbers and improve maintainability.

/// Conversation sizes in messages
pub mod message_counts {
    pub const SMALL: usize = 1_000;
    pub const MEDIUM: usize = 10_000;
    pub const LARGE: usize = 100_000;

    /// Default sizes for throughput benchmarks
    pub const THROUGHPUT_SIZES: &[usize] = &[SMALL, MEDIUM, LARGE];
}

/// Mean session length of generated conversations
pub const MEAN_SESSION_LENGTH: usize = 12;

/// Tolerance level sets, from a single level to a wide sweep
pub const TOLERANCE_SETS: &[&[usize]] = &[&[1], &[1, 2, 3, 5], &[0, 1, 2, 3, 5, 8, 13, 21]];

/// Probability that a predicted start is displaced from the true one
pub const SHIFT_RATES: &[f64] = &[0.0, 0.1, 0.25, 0.5];

/// Largest displacement applied to a shifted start
pub const MAX_SHIFT: usize = 3;

/// Fixed seed so every benchmark run sees the same data
pub const SEED: u64 = 0x5e55_b0d5;
