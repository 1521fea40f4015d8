//! Directory-level extraction.
//!
//! Runs the decoder over every PRG file in a directory. A failure on one file
//! is recorded as that file's outcome and never stops the run; only a
//! directory that cannot be listed fails the whole batch.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{PrgError, PrgResult};
use crate::format::PRG_EXTENSION;
use crate::jobs::{extract_jobs_from_path, Job};

/// Outcome of decoding one file: its jobs, or why it could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileOutcome {
    Jobs(Vec<Job>),
    Error(String),
}

/// Extraction result for a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResult {
    pub filename: String,
    #[serde(flatten)]
    pub outcome: FileOutcome,
}

impl BatchResult {
    pub fn success(filename: impl Into<String>, jobs: Vec<Job>) -> Self {
        Self { filename: filename.into(), outcome: FileOutcome::Jobs(jobs) }
    }

    pub fn failure(filename: impl Into<String>, error: impl Into<String>) -> Self {
        Self { filename: filename.into(), outcome: FileOutcome::Error(error.into()) }
    }

    /// Jobs decoded from the file; empty for failed files.
    pub fn jobs(&self) -> &[Job] {
        match &self.outcome {
            FileOutcome::Jobs(jobs) => jobs,
            FileOutcome::Error(_) => &[],
        }
    }

    /// Failure description, if the file could not be decoded.
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            FileOutcome::Jobs(_) => None,
            FileOutcome::Error(e) => Some(e.as_str()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, FileOutcome::Jobs(_))
    }
}

/// Aggregate counters over a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchStats {
    pub total_files: usize,
    pub success_count: usize,
    pub error_count: usize,
    pub total_jobs: usize,
}

/// Ordered per-file results of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BatchResults(pub Vec<BatchResult>);

impl BatchResults {
    /// Fold the results into aggregate counters.
    pub fn stats(&self) -> BatchStats {
        self.0.iter().fold(
            BatchStats { total_files: self.0.len(), ..BatchStats::default() },
            |mut stats, result| {
                match &result.outcome {
                    FileOutcome::Jobs(jobs) => {
                        stats.success_count += 1;
                        stats.total_jobs += jobs.len();
                    }
                    FileOutcome::Error(_) => stats.error_count += 1,
                }
                stats
            },
        )
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BatchResult> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<BatchResult>> for BatchResults {
    fn from(results: Vec<BatchResult>) -> Self {
        Self(results)
    }
}

impl<'a> IntoIterator for &'a BatchResults {
    type Item = &'a BatchResult;
    type IntoIter = std::slice::Iter<'a, BatchResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Options controlling which files a batch run picks up and how it runs them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOptions {
    /// Extension to match, without the leading dot; compared case-insensitively.
    pub extension: String,
    /// Decode files on the rayon pool. Ignored without the `parallel` feature.
    pub parallel: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self { extension: PRG_EXTENSION.to_string(), parallel: false }
    }
}

impl BatchOptions {
    /// Whether `file_name` ends in `.<extension>`, ignoring case.
    pub fn matches(&self, file_name: &str) -> bool {
        let suffix = format!(".{}", self.extension.trim_start_matches('.')).to_lowercase();
        file_name.to_lowercase().ends_with(&suffix)
    }
}

/// Extract jobs from every `.prg` file in `dir`.
pub fn run(dir: &Path) -> PrgResult<BatchResults> {
    run_with(dir, &BatchOptions::default())
}

/// Extract jobs from every matching file in `dir`.
///
/// Results follow directory enumeration order, also when `parallel` is set.
pub fn run_with(dir: &Path, options: &BatchOptions) -> PrgResult<BatchResults> {
    let entries = fs::read_dir(dir).map_err(|e| PrgError::io(dir, e))?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "skipping unreadable directory entry");
                continue;
            }
        };
        let filename = entry.file_name().to_string_lossy().to_string();
        match entry.file_type() {
            Ok(ft) if ft.is_dir() => continue,
            Ok(_) if !options.matches(&filename) => {
                debug!(%filename, "skipping file with non-matching extension");
                continue;
            }
            Ok(_) => candidates.push(Candidate::File { filename, path: entry.path() }),
            Err(e) => candidates.push(Candidate::Unreadable { filename, error: e.to_string() }),
        }
    }

    let results = process_all(candidates, options.parallel);
    let results = BatchResults(results);

    let stats = results.stats();
    info!(
        dir = %dir.display(),
        total = stats.total_files,
        success = stats.success_count,
        errors = stats.error_count,
        jobs = stats.total_jobs,
        "batch extraction finished"
    );

    Ok(results)
}

enum Candidate {
    File { filename: String, path: PathBuf },
    Unreadable { filename: String, error: String },
}

fn process(candidate: Candidate) -> BatchResult {
    match candidate {
        Candidate::File { filename, path } => match extract_jobs_from_path(&path) {
            Ok(jobs) => {
                debug!(%filename, jobs = jobs.len(), "extracted jobs");
                BatchResult::success(filename, jobs)
            }
            Err(e) => {
                warn!(%filename, error = %e, "failed to extract jobs");
                BatchResult::failure(filename, e.to_string())
            }
        },
        Candidate::Unreadable { filename, error } => {
            warn!(%filename, %error, "failed to read directory entry");
            BatchResult::failure(filename, error)
        }
    }
}

#[cfg(feature = "parallel")]
fn process_all(candidates: Vec<Candidate>, parallel: bool) -> Vec<BatchResult> {
    use rayon::prelude::*;

    if parallel {
        candidates.into_par_iter().map(process).collect()
    } else {
        candidates.into_iter().map(process).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn process_all(candidates: Vec<Candidate>, _parallel: bool) -> Vec<BatchResult> {
    candidates.into_iter().map(process).collect()
}
