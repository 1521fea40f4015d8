//! Serialization of extraction results.

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

/// Output encoding for reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// Two-space indented JSON.
    #[default]
    Json,
    Yaml,
}

impl ReportFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ReportFormat::Json),
            "yaml" | "yml" => Ok(ReportFormat::Yaml),
            other => Err(anyhow!("Unknown report format '{other}' (expected json or yaml)")),
        }
    }
}

/// Render any serializable report (batch results, stats, a file summary).
///
/// The returned text always ends with a newline.
pub fn render<T: Serialize + ?Sized>(value: &T, format: ReportFormat) -> Result<String> {
    let mut body = match format {
        ReportFormat::Json => {
            serde_json::to_string_pretty(value).context("Failed to serialize report to JSON")?
        }
        ReportFormat::Yaml => {
            serde_yaml::to_string(value).context("Failed to serialize report to YAML")?
        }
    };
    if !body.ends_with('\n') {
        body.push('\n');
    }
    Ok(body)
}
