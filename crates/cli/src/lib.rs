use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::Level;

pub mod commands;

/// Log verbosity accepted on the command line.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

/// Install the stderr log subscriber. Stdout carries the report.
pub fn init_logging(level: LogLevel) {
    tracing_subscriber::fmt()
        .with_max_level(Level::from(level))
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Write a rendered report to `output`, or to stdout when no path is given.
pub fn write_report(body: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => fs::write(path, body)
            .with_context(|| format!("Failed to write report to {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(body.as_bytes()).context("Failed to write report to stdout")?;
            stdout.flush().context("Failed to flush stdout")
        }
    }
}
