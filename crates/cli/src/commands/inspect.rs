use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use prg_core::report::{render, ReportFormat};
use prg_core::PrgSummary;
use serde::Serialize;

use crate::write_report;

/// Single-file report: file name plus header and job table details.
#[derive(Debug, Serialize)]
pub struct FileSummary {
    pub filename: String,
    #[serde(flatten)]
    pub summary: PrgSummary,
}

/// Decode one PRG file and print its header version, table pointer, and jobs.
pub fn inspect_command(
    path: &Path,
    format: ReportFormat,
    output: Option<&Path>,
) -> Result<FileSummary> {
    let data =
        fs::read(path).with_context(|| format!("Failed to read PRG file {}", path.display()))?;
    let summary = prg_core::inspect(&data)
        .with_context(|| format!("Failed to decode PRG file {}", path.display()))?;

    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());
    let report = FileSummary { filename, summary };

    let body = render(&report, format)?;
    write_report(&body, output)?;

    Ok(report)
}
