use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use prg_core::report::ReportFormat;
use prg_extract::commands::{extract_command, inspect_command, ExtractArgs};
use prg_extract::{init_logging, LogLevel};

/// Extract job tables from EDIABAS PRG files.
///
/// This CLI is a thin wrapper around `prg-core` (exposed in code as `prg_core`).
/// Without a subcommand it scans a directory and prints a JSON report of every
/// PRG file's jobs to stdout; progress and counts go to stderr.
#[derive(Parser, Debug)]
#[command(
    name = "prg-extract",
    version,
    about = "Extract job tables from EDIABAS PRG files",
    long_about = None
)]
struct Cli {
    /// Directory containing PRG files. Defaults to the config file's
    /// `input_dir`, then to `data/ediabas/ecu`.
    dir: Option<PathBuf>,

    /// JSON or YAML config file with extraction defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// File extension to match (case-insensitive, without the dot).
    #[arg(long)]
    extension: Option<String>,

    /// Decode files concurrently; report order is unchanged.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Report format: json or yaml.
    #[arg(long)]
    format: Option<ReportFormat>,

    /// Write the report to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log verbosity (logs go to stderr).
    #[arg(long, value_enum, default_value = "warn", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the header version, job table pointer, and jobs of a single PRG file.
    Inspect {
        /// Path to the PRG file.
        file: PathBuf,

        /// Report format: json or yaml.
        #[arg(long, default_value = "json")]
        format: ReportFormat,

        /// Write the report to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    match cli.command {
        Some(Command::Inspect { file, format, output }) => {
            inspect_command(&file, format, output.as_deref())?;
        }
        None => {
            let args = ExtractArgs {
                dir: cli.dir,
                config: cli.config,
                extension: cli.extension,
                parallel: cli.parallel,
                format: cli.format,
                output: cli.output,
            };
            extract_command(&args)?;
        }
    }

    Ok(())
}
