//! Benchmark utilities for sessbound
//!
//! Synthetic conversations with known session starts, prediction generators
//! with controlled error patterns, and shared Criterion settings.

pub mod constants;
pub mod data;
pub mod harness;

pub use data::{generators, TestRun};
