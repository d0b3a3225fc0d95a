//! Evaluation metrics for chat session boundary detection
//!
//! A labelling pipeline flags every message of a conversation as either
//! starting a new session (`1`) or continuing the current one (`0`). This
//! crate scores predicted flags against ground truth with exact,
//! tolerance-based, distance-based and segmentation metrics, and renders the
//! results as reports, timelines and cross-run comparisons.
//!
//! ```
//! use sessbound_core::{BoundaryEvaluator, EvaluatorConfig};
//!
//! let config = EvaluatorConfig::builder()
//!     .tolerance_levels(vec![1, 2])
//!     .build()
//!     .unwrap();
//! let evaluator = BoundaryEvaluator::new(config).unwrap();
//!
//! let result = evaluator
//!     .evaluate_labels(&[1, 0, 0, 1, 0, 1, 0, 0], &[1, 0, 0, 0, 1, 1, 0, 0])
//!     .unwrap();
//! assert_eq!(result.exact_accuracy, 0.75);
//! assert_eq!(result.within_k_accuracy(1), Some(1.0));
//! ```

#![warn(missing_docs)]

pub mod boundary;
pub mod compare;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod labels;
pub mod metrics;
pub mod report;
pub mod result;
pub mod sessions;
pub mod timeline;

// Re-export key types
pub use boundary::BoundarySet;
pub use compare::{ComparisonRow, RunComparison};
pub use config::{EvaluatorConfig, EvaluatorConfigBuilder};
pub use error::{EvalError, Result, ValidationError};
pub use evaluator::{evaluate_session_predictions, BoundaryEvaluator};
pub use labels::{LabelSequence, RawLabel};
pub use metrics::ConfusionCounts;
pub use report::{MarkdownReport, Report};
pub use result::{BoundaryPositions, DistanceStatus, EvaluationResult, ToleranceScore};
pub use sessions::assign_session_ids;
pub use timeline::Timeline;
