//! Evaluator configuration

use crate::error::{EvalError, Result};

/// Tolerance levels evaluated when none are configured
pub const DEFAULT_TOLERANCE_LEVELS: &[usize] = &[1, 2, 3, 5];

/// Radius of the window placed around each true boundary
pub const DEFAULT_WINDOW_RADIUS: usize = 2;

/// Configuration for a [`BoundaryEvaluator`](crate::BoundaryEvaluator)
///
/// Passed explicitly to every evaluator; there is no process-wide default
/// beyond the constants above.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct EvaluatorConfig {
    /// Tolerances for within-k accuracy, ascending and deduplicated once built
    pub tolerance_levels: Vec<usize>,
    /// Tolerance for boundary precision/recall (None = largest tolerance level)
    pub boundary_tolerance: Option<usize>,
    /// Radius of the window around each true boundary for windowed accuracy
    pub window_radius: usize,
    /// Window for Pk and WindowDiff (None = half the mean true segment length)
    pub segmentation_window: Option<usize>,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            tolerance_levels: DEFAULT_TOLERANCE_LEVELS.to_vec(),
            boundary_tolerance: None,
            window_radius: DEFAULT_WINDOW_RADIUS,
            segmentation_window: None,
        }
    }
}

impl EvaluatorConfig {
    /// Create a builder
    pub fn builder() -> EvaluatorConfigBuilder {
        EvaluatorConfigBuilder::default()
    }

    /// Create a configuration with the given tolerance levels and defaults elsewhere
    pub fn with_tolerances(levels: impl Into<Vec<usize>>) -> Result<Self> {
        Self::builder().tolerance_levels(levels).build()
    }

    /// Sort and deduplicate tolerance levels, rejecting an empty list
    pub fn validate(mut self) -> Result<Self> {
        if self.tolerance_levels.is_empty() {
            return Err(EvalError::Config(
                "at least one tolerance level is required".to_string(),
            ));
        }
        if self.segmentation_window == Some(0) {
            return Err(EvalError::Config(
                "segmentation window must be positive".to_string(),
            ));
        }
        self.tolerance_levels.sort_unstable();
        self.tolerance_levels.dedup();
        Ok(self)
    }

    /// Tolerance used for boundary precision and recall
    pub fn effective_boundary_tolerance(&self) -> usize {
        self.boundary_tolerance
            .or_else(|| self.tolerance_levels.iter().copied().max())
            .unwrap_or(0)
    }

    /// Parse a TOML configuration
    #[cfg(feature = "serde")]
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()
    }

    /// Load a TOML configuration file
    #[cfg(feature = "serde")]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct EvaluatorConfigBuilder {
    config: EvaluatorConfig,
}

impl EvaluatorConfigBuilder {
    /// Set the tolerance levels
    pub fn tolerance_levels(mut self, levels: impl Into<Vec<usize>>) -> Self {
        self.config.tolerance_levels = levels.into();
        self
    }

    /// Set the tolerance for boundary precision/recall
    pub fn boundary_tolerance(mut self, tolerance: usize) -> Self {
        self.config.boundary_tolerance = Some(tolerance);
        self
    }

    /// Set the windowed-accuracy radius
    pub fn window_radius(mut self, radius: usize) -> Self {
        self.config.window_radius = radius;
        self
    }

    /// Set the Pk/WindowDiff window
    pub fn segmentation_window(mut self, window: usize) -> Self {
        self.config.segmentation_window = Some(window);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<EvaluatorConfig> {
        self.config.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EvaluatorConfig::default();
        assert_eq!(config.tolerance_levels, vec![1, 2, 3, 5]);
        assert_eq!(config.window_radius, 2);
        assert_eq!(config.effective_boundary_tolerance(), 5);
    }

    #[test]
    fn test_builder_sorts_and_dedups() {
        let config = EvaluatorConfig::builder()
            .tolerance_levels(vec![5, 1, 3, 1])
            .window_radius(4)
            .build()
            .unwrap();
        assert_eq!(config.tolerance_levels, vec![1, 3, 5]);
        assert_eq!(config.window_radius, 4);
    }

    #[test]
    fn test_empty_tolerances_rejected() {
        let err = EvaluatorConfig::with_tolerances(Vec::new()).unwrap_err();
        assert!(matches!(err, EvalError::Config(_)));
    }

    #[test]
    fn test_zero_segmentation_window_rejected() {
        let result = EvaluatorConfig::builder().segmentation_window(0).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_designated_boundary_tolerance() {
        let config = EvaluatorConfig::builder()
            .tolerance_levels(vec![1, 2])
            .boundary_tolerance(7)
            .build()
            .unwrap();
        assert_eq!(config.effective_boundary_tolerance(), 7);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_toml_str() {
        let config = EvaluatorConfig::from_toml_str(
            r#"
tolerance_levels = [3, 1]
window_radius = 1
"#,
        )
        .unwrap();
        assert_eq!(config.tolerance_levels, vec![1, 3]);
        assert_eq!(config.window_radius, 1);
        assert_eq!(config.boundary_tolerance, None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_toml_str_rejects_unknown_keys() {
        let err = EvaluatorConfig::from_toml_str("tolerances = [1]").unwrap_err();
        assert!(matches!(err, EvalError::Toml(_)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tolerance_levels = [2]\nboundary_tolerance = 4").unwrap();

        let config = EvaluatorConfig::from_file(file.path()).unwrap();
        assert_eq!(config.tolerance_levels, vec![2]);
        assert_eq!(config.effective_boundary_tolerance(), 4);
    }
}
