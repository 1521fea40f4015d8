use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while decoding a PRG file.
///
/// Irregularities that can be tolerated (oversized record counts, truncated
/// trailing records, blank names) are clamped or skipped by the decoder and
/// never surface here.
#[derive(Debug, Error)]
pub enum PrgError {
    /// The signature bytes do not match; the input is not a PRG file.
    #[error("invalid magic header, not an EDIABAS PRG file")]
    InvalidMagic,

    /// The buffer ends before a mandatory fixed-offset field.
    #[error("file too short: need at least {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },

    /// The job table pointer lands inside the file but the record count cannot be read.
    #[error("job table offset 0x{offset:X} cannot be read from a {len}-byte file")]
    TableOffsetOutOfRange { offset: u32, len: usize },

    /// Reading a file or listing a directory failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PrgError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PrgError::Io { path: path.into(), source }
    }
}

/// Convenience result type for PRG decoding.
pub type PrgResult<T> = Result<T, PrgError>;
