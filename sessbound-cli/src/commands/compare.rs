//! Compare command implementation

use crate::input::FileReader;
use crate::output::RunEntry;
use anyhow::{Context, Result};
use clap::Args;
use sessbound_core::{EvaluationResult, RunComparison};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Arguments for the compare command
#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Saved results (`--save-dir` files or `evaluate --format json` output)
    #[arg(value_name = "RESULT.json", required = true)]
    pub results: Vec<PathBuf>,

    /// Table format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: CompareFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Supported comparison formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CompareFormat {
    /// Aligned columns, best run marked with `*`
    Text,
    /// Markdown table, best run in bold
    Markdown,
}

impl CompareArgs {
    /// Execute the compare command
    pub fn execute(&self) -> Result<()> {
        let mut runs = Vec::new();
        for path in &self.results {
            runs.extend(load_runs(path)?);
        }
        log::info!("Comparing {} run(s)", runs.len());

        let comparison =
            RunComparison::new(runs.iter().map(|run| (run.name.as_str(), &run.result)));

        let mut writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        match self.format {
            CompareFormat::Text => write!(writer, "{comparison}")?,
            CompareFormat::Markdown => write!(writer, "{}", comparison.to_markdown())?,
        }
        writer.flush()?;
        Ok(())
    }
}

/// Load the runs stored in a result file
///
/// Accepts a JSON array of named runs or a single bare result, which is named
/// after the file stem.
pub fn load_runs(path: &Path) -> Result<Vec<RunEntry>> {
    let content = FileReader::read_text(path)?;

    if let Ok(runs) = serde_json::from_str::<Vec<RunEntry>>(&content) {
        return Ok(runs);
    }

    let result = EvaluationResult::from_json(&content)
        .with_context(|| format!("Invalid result file: {}", path.display()))?;
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(vec![RunEntry { name, result }])
}
