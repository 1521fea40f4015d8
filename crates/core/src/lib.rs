//! prg-core
//!
//! Core library for recovering job metadata from EDIABAS PRG files.
//!
//! A PRG file is a partially-encrypted ECU description container. This crate
//! validates the fixed header, locates the job table through the pointer stored
//! in the header, decrypts it, and decodes each record into a [`jobs::Job`].
//! The batch layer runs that pipeline over a directory without letting one bad
//! file abort the run.
//!
//! All substantive logic lives here so it is fully testable and reusable from
//! multiple frontends (the `prg-extract` CLI being the first).

pub mod batch;
pub mod cipher;
pub mod config;
pub mod error;
pub mod format;
pub mod header;
pub mod jobs;
pub mod report;

pub use batch::{BatchOptions, BatchResult, BatchResults, BatchStats, FileOutcome};
pub use error::{PrgError, PrgResult};
pub use header::{read_header, Header};
pub use jobs::{extract_jobs, extract_jobs_from_path, inspect, Job, PrgSummary};

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
