//! Label file reading
//!
//! A label file holds one conversation's predicted and true session starts:
//!
//! ```json
//! {"name": "baseline", "predictions": [1, 0, 1], "ground_truth": [1, 0, 0]}
//! ```
//!
//! `name` is optional and defaults to the file stem.

use anyhow::{Context, Result};
use serde::Deserialize;
use sessbound_core::{LabelSequence, RawLabel};
use std::fs;
use std::path::Path;

/// Contents of one label file
#[derive(Debug, Clone, Deserialize)]
pub struct LabelFile {
    /// Run name
    #[serde(default)]
    pub name: Option<String>,
    /// Predicted session-start labels
    pub predictions: Vec<RawLabel>,
    /// True session-start labels
    pub ground_truth: Vec<RawLabel>,
}

impl LabelFile {
    /// Parse label file JSON
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Run name, falling back to the file stem of `path`
    pub fn run_name(&self, path: &Path) -> String {
        self.name.clone().unwrap_or_else(|| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string())
        })
    }

    /// Predicted and true label sequences
    ///
    /// Lenient mode maps start markers to 1 and everything else to 0; strict
    /// mode rejects anything that is not clearly 0 or 1.
    pub fn sequences(&self, lenient: bool) -> Result<(LabelSequence, LabelSequence)> {
        if lenient {
            return Ok((
                LabelSequence::from_raw_lenient(&self.predictions),
                LabelSequence::from_raw_lenient(&self.ground_truth),
            ));
        }
        let predictions =
            LabelSequence::from_raw(&self.predictions).context("Invalid predictions")?;
        let ground_truth =
            LabelSequence::from_raw(&self.ground_truth).context("Invalid ground_truth")?;
        Ok((predictions, ground_truth))
    }
}

/// File reader for label files
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read and parse a label file
    pub fn read_label_file(path: &Path) -> Result<LabelFile> {
        let content = Self::read_text(path)?;
        LabelFile::from_json(&content)
            .with_context(|| format!("Invalid label file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_label_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("run.json");
        fs::write(
            &file_path,
            r#"{"name": "gpt", "predictions": [1, 0, 1], "ground_truth": [1, 0, 0]}"#,
        )
        .unwrap();

        let file = FileReader::read_label_file(&file_path).unwrap();
        assert_eq!(file.run_name(&file_path), "gpt");

        let (predictions, ground_truth) = file.sequences(false).unwrap();
        assert_eq!(predictions.as_slice(), &[1, 0, 1]);
        assert_eq!(ground_truth.as_slice(), &[1, 0, 0]);
    }

    #[test]
    fn test_name_defaults_to_file_stem() {
        let file =
            LabelFile::from_json(r#"{"predictions": [0], "ground_truth": [0]}"#).unwrap();
        assert_eq!(file.run_name(Path::new("runs/heuristic.json")), "heuristic");
    }

    #[test]
    fn test_strict_rejects_raw_export_values() {
        let file = LabelFile::from_json(
            r#"{"predictions": [1, 0], "ground_truth": ["[START]", null]}"#,
        )
        .unwrap();

        let err = file.sequences(false).unwrap_err();
        assert!(err.to_string().contains("Invalid ground_truth"));

        let (_, ground_truth) = file.sequences(true).unwrap();
        assert_eq!(ground_truth.as_slice(), &[1, 0]);
    }

    #[test]
    fn test_read_text_nonexistent_file() {
        let path = Path::new("/nonexistent/file.json");
        let err = FileReader::read_label_file(path).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_malformed_json() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("broken.json");
        fs::write(&file_path, "{\"predictions\": [1, 0]").unwrap();

        let err = FileReader::read_label_file(&file_path).unwrap_err();
        assert!(err.to_string().contains("Invalid label file"));
    }
}
