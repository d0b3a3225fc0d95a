//! Error types for evaluation

use thiserror::Error;

/// Input validation failures
///
/// Raised before any metric is computed; an evaluation that fails validation
/// produces no partial result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Predictions and ground truth differ in length
    #[error("length mismatch: {predictions} predictions vs {ground_truth} ground truth labels")]
    LengthMismatch {
        /// Number of predicted labels
        predictions: usize,
        /// Number of ground truth labels
        ground_truth: usize,
    },

    /// Channel ids and session-start flags differ in length
    #[error("channel mismatch: {channels} channel ids vs {starts} session-start flags")]
    ChannelMismatch {
        /// Number of channel ids
        channels: usize,
        /// Number of session-start flags
        starts: usize,
    },

    /// Nothing to evaluate
    #[error("label sequences must contain at least one message")]
    Empty,

    /// A label outside {0, 1}
    #[error("invalid label {value} at index {index}: expected 0 or 1")]
    InvalidLabel {
        /// Position of the offending label
        index: usize,
        /// The rejected value, as written in the input
        value: String,
    },
}

/// Errors surfaced by the library
#[derive(Error, Debug)]
pub enum EvalError {
    /// Input validation error
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Configuration file parse error
    #[cfg(feature = "serde")]
    #[error("invalid configuration file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for library operations
pub type Result<T> = std::result::Result<T, EvalError>;
