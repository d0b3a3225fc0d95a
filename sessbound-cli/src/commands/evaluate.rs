//! Evaluate command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{OutputFormat, RunEntry};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use sessbound_core::{BoundaryEvaluator, EvaluatorConfig, Timeline};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::ops::Range;
use std::path::{Path, PathBuf};

/// Arguments for the evaluate command
#[derive(Debug, Args)]
pub struct EvaluateArgs {
    /// Label files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Report format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "SESSBOUND_CONFIG")]
    pub config: Option<PathBuf>,

    /// Tolerance levels for within-k accuracy
    #[arg(short, long, value_name = "K,...", value_delimiter = ',')]
    pub tolerance: Option<Vec<usize>>,

    /// Tolerance for boundary precision and recall
    #[arg(long, value_name = "K")]
    pub boundary_tolerance: Option<usize>,

    /// Radius of the window around each true boundary
    #[arg(long, value_name = "R")]
    pub window_radius: Option<usize>,

    /// Window size for Pk and WindowDiff
    #[arg(long, value_name = "N")]
    pub segmentation_window: Option<usize>,

    /// Normalize raw export labels ("[START]", 1.0, null) instead of rejecting them
    #[arg(long)]
    pub lenient: bool,

    /// Save each result as timestamped JSON in this directory
    #[arg(long, value_name = "DIR")]
    pub save_dir: Option<PathBuf>,

    /// Append a boundary timeline to each report
    #[arg(long)]
    pub timeline: bool,

    /// Restrict the timeline to a message range (implies --timeline)
    #[arg(long, value_name = "START..END", value_parser = parse_range)]
    pub range: Option<Range<usize>>,

    /// Number of worker threads (default: all cores)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl EvaluateArgs {
    /// Execute the evaluate command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting evaluation");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        let evaluator = BoundaryEvaluator::new(self.evaluator_config(&config)?)?;
        let lenient = self.lenient || config.input.lenient;
        let format = self
            .format
            .or(config.output.format)
            .unwrap_or(OutputFormat::Text);

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} label file(s)", files.len());

        let runs = self.evaluate_files(&evaluator, &files, lenient)?;

        if let Some(dir) = self.save_dir.as_ref().or(config.output.save_dir.as_ref()) {
            save_results(dir, &runs)?;
        }

        let writer: Box<dyn Write + Send> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter = format.formatter(writer);

        for run in &runs {
            formatter.format_result(&run.name, &run.result)?;
            if self.timeline || self.range.is_some() {
                let mut timeline = Timeline::from_result(&run.result);
                if let Some(range) = &self.range {
                    timeline = timeline.with_range(range.clone());
                }
                formatter.format_timeline(&timeline)?;
            }
        }
        formatter.finish()?;

        log::info!("Evaluated {} run(s)", runs.len());
        Ok(())
    }

    /// Evaluator configuration: file settings overridden by flags
    fn evaluator_config(&self, config: &CliConfig) -> Result<EvaluatorConfig> {
        let mut evaluation = config.evaluation.clone();
        if let Some(levels) = &self.tolerance {
            evaluation.tolerance_levels = levels.clone();
        }
        if let Some(k) = self.boundary_tolerance {
            evaluation.boundary_tolerance = Some(k);
        }
        if let Some(radius) = self.window_radius {
            evaluation.window_radius = radius;
        }
        if let Some(window) = self.segmentation_window {
            evaluation.segmentation_window = Some(window);
        }
        Ok(evaluation.validate()?)
    }

    fn evaluate_files(
        &self,
        evaluator: &BoundaryEvaluator,
        files: &[PathBuf],
        lenient: bool,
    ) -> Result<Vec<RunEntry>> {
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let evaluate_all = || {
            files
                .par_iter()
                .map(|path| {
                    let run = evaluate_file(evaluator, path, lenient);
                    progress.file_completed(&path.display().to_string());
                    run
                })
                .collect::<Result<Vec<_>>>()
        };

        let runs = match self.threads {
            Some(threads) => rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to build worker thread pool")?
                .install(evaluate_all),
            None => evaluate_all(),
        };

        progress.finish();
        runs
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when commands run in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

fn evaluate_file(evaluator: &BoundaryEvaluator, path: &Path, lenient: bool) -> Result<RunEntry> {
    let file = FileReader::read_label_file(path)?;
    let name = file.run_name(path);
    let (predictions, ground_truth) = file
        .sequences(lenient)
        .with_context(|| format!("Invalid labels in {}", path.display()))?;

    let result = evaluator
        .evaluate(&predictions, &ground_truth)
        .map_err(|e| CliError::EvaluationFailed {
            file: path.display().to_string(),
            reason: e.to_string(),
        })?;

    log::info!(
        "{}: {} messages, exact accuracy {:.3}",
        name,
        result.message_count,
        result.exact_accuracy
    );
    Ok(RunEntry { name, result })
}

/// Write `<run>_evaluation_<timestamp>.json` for every run
///
/// Existing files are never overwritten; a numeric suffix is appended
/// when the name is already taken.
fn save_results(dir: &Path, runs: &[RunEntry]) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S_%3f").to_string();

    for run in runs {
        let stem = file_stem_for(&run.name);
        let mut path = dir.join(format!("{stem}_evaluation_{timestamp}.json"));
        let mut suffix = 1;
        while path.exists() {
            suffix += 1;
            path = dir.join(format!("{stem}_evaluation_{timestamp}_{suffix}.json"));
        }

        run.result
            .save_json(&path)
            .with_context(|| format!("Failed to save results: {}", path.display()))?;
        log::info!("Saved {} to {}", run.name, path.display());
    }

    Ok(())
}

fn file_stem_for(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if stem.is_empty() {
        "run".to_string()
    } else {
        stem
    }
}

/// Parse `START..END`; either bound may be omitted
pub fn parse_range(value: &str) -> Result<Range<usize>, CliError> {
    let invalid = || CliError::InvalidRange(value.to_string());
    let (start, end) = value.split_once("..").ok_or_else(invalid)?;

    let start = match start.trim() {
        "" => 0,
        s => s.parse().map_err(|_| invalid())?,
    };
    let end = match end.trim() {
        "" => usize::MAX,
        s => s.parse().map_err(|_| invalid())?,
    };

    if start > end {
        return Err(invalid());
    }
    Ok(start..end)
}
