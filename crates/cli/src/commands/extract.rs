use std::path::PathBuf;

use anyhow::{Context, Result};
use prg_core::config::{load_config, ExtractConfig};
use prg_core::report::{render, ReportFormat};
use prg_core::BatchStats;

use crate::write_report;

/// Command-line overrides for a batch extraction.
///
/// Unset fields fall back to the config file, then to built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct ExtractArgs {
    pub dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub extension: Option<String>,
    pub parallel: bool,
    pub format: Option<ReportFormat>,
    pub output: Option<PathBuf>,
}

impl ExtractArgs {
    /// Merge these overrides over the config file (if any) and defaults.
    pub fn resolve(&self) -> Result<ExtractConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => ExtractConfig::default(),
        };
        if let Some(dir) = &self.dir {
            config.input_dir = dir.clone();
        }
        if let Some(ext) = &self.extension {
            config.extension = ext.clone();
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        config.parallel |= self.parallel;
        Ok(config)
    }
}

/// Extract jobs from every PRG file in a directory and emit the report.
///
/// Only an unreadable directory fails; per-file errors land in the report.
pub fn extract_command(args: &ExtractArgs) -> Result<BatchStats> {
    let config = args.resolve()?;
    let dir = &config.input_dir;

    eprintln!("Extracting jobs from PRG files in {}...", dir.display());

    let results = prg_core::batch::run_with(dir, &config.batch_options())
        .with_context(|| format!("Failed to read PRG directory {}", dir.display()))?;

    let stats = results.stats();
    eprintln!(
        "Processed: {} files, {} success, {} errors, {} total jobs",
        stats.total_files, stats.success_count, stats.error_count, stats.total_jobs
    );

    let body = render(&results, config.format)?;
    write_report(&body, args.output.as_deref())?;

    Ok(stats)
}
