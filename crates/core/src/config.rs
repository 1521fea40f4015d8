use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::batch::BatchOptions;
use crate::format::PRG_EXTENSION;
use crate::report::ReportFormat;

/// Directory scanned when neither the CLI nor a config file names one.
pub const DEFAULT_INPUT_DIR: &str = "data/ediabas/ecu";

/// Serializable settings for an extraction run.
///
/// Every field is optional in the file; missing ones take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Directory holding the PRG files.
    pub input_dir: PathBuf,
    /// Extension of the files to decode, without the dot.
    pub extension: String,
    /// Decode files concurrently.
    pub parallel: bool,
    /// Report encoding.
    pub format: ReportFormat,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            extension: PRG_EXTENSION.to_string(),
            parallel: false,
            format: ReportFormat::Json,
        }
    }
}

impl ExtractConfig {
    /// Batch options derived from this config.
    pub fn batch_options(&self) -> BatchOptions {
        BatchOptions { extension: self.extension.clone(), parallel: self.parallel }
    }
}

/// Load an [`ExtractConfig`] from a JSON or YAML file, chosen by extension.
pub fn load_config(path: &Path) -> Result<ExtractConfig> {
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config at {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default().to_ascii_lowercase();
    let config = if matches!(ext.as_str(), "yaml" | "yml") {
        serde_yaml::from_str(&body)
            .with_context(|| format!("Failed to parse config YAML at {}", path.display()))?
    } else {
        serde_json::from_str(&body)
            .with_context(|| format!("Failed to parse config JSON at {}", path.display()))?
    };
    Ok(config)
}
