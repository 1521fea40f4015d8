//! Job table location, decryption, and record decoding.
//!
//! The table pointer lives at [`JOB_TABLE_PTR_OFFSET`] in the header. At that
//! offset the table starts with a header record whose first four bytes hold
//! the total record count in the clear; the remaining records are XOR-encrypted
//! and each carries a little-endian address plus a NUL-padded name.
//!
//! Counts and offsets inside the file are never trusted: the table pointer is
//! bounds-checked and the record count is clamped to what the buffer holds.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cipher;
use crate::error::{PrgError, PrgResult};
use crate::format::{
    read_u32_le, JOB_ADDRESS_LEN, JOB_NAME_LEN, JOB_RECORD_SIZE, JOB_TABLE_PTR_OFFSET, MAGIC,
    MAGIC_LEN, MIN_HEADER_SIZE, NO_TABLE_SENTINEL,
};
use crate::header::read_header;

/// A named diagnostic routine declared in a PRG job table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Routine identifier, trimmed and never empty.
    pub name: String,
    /// Offset of the routine's code; opaque to this crate.
    #[serde(rename = "code_offset")]
    pub address: u32,
}

impl Job {
    pub fn new(name: impl Into<String>, address: u32) -> Self {
        Self { name: name.into(), address }
    }
}

/// Header and job table details of a single PRG file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrgSummary {
    /// Header version field.
    pub version: u32,
    /// Resolved job table pointer; `None` when the file declares no table.
    pub table_offset: Option<u32>,
    /// Job count claimed by the table, excluding the header record, before clamping.
    pub declared_jobs: u32,
    /// Decoded jobs in on-disk order.
    pub jobs: Vec<Job>,
}

/// Where the table sits and how many job records it claims.
#[derive(Debug, Clone, Copy)]
struct TableLocation {
    offset: usize,
    declared_jobs: u32,
}

/// Decode the job table of an in-memory PRG file.
///
/// A missing table (pointer `0`, `0xFFFFFFFF`, or past the end of the file) and
/// a table declaring no jobs both yield an empty list. Truncated tables yield
/// the records that fit.
///
/// A buffer too short to hold the signature is not a PRG file and reports
/// [`PrgError::InvalidMagic`].
pub fn extract_jobs(data: &[u8]) -> PrgResult<Vec<Job>> {
    if data.get(..MAGIC_LEN) != Some(&MAGIC[..]) {
        return Err(PrgError::InvalidMagic);
    }
    match locate_table(data)? {
        Some(table) => Ok(decode_table(data, table)),
        None => Ok(Vec::new()),
    }
}

/// Read a PRG file from disk and decode its job table.
pub fn extract_jobs_from_path(path: &Path) -> PrgResult<Vec<Job>> {
    let data = std::fs::read(path).map_err(|e| PrgError::io(path, e))?;
    extract_jobs(&data)
}

/// Validate the header and decode the job table, keeping the table metadata.
pub fn inspect(data: &[u8]) -> PrgResult<PrgSummary> {
    let header = read_header(data)?;
    let table = locate_table(data)?;
    let jobs = table.map(|t| decode_table(data, t)).unwrap_or_default();

    Ok(PrgSummary {
        version: header.version,
        table_offset: table.map(|t| t.offset as u32),
        declared_jobs: table.map(|t| t.declared_jobs).unwrap_or(0),
        jobs,
    })
}

/// Resolve the table pointer and read the plaintext record count.
///
/// Returns `Ok(None)` when the file has no job table.
fn locate_table(data: &[u8]) -> PrgResult<Option<TableLocation>> {
    let raw_offset = read_u32_le(data, JOB_TABLE_PTR_OFFSET)
        .ok_or(PrgError::TooShort { needed: MIN_HEADER_SIZE, actual: data.len() })?;

    if raw_offset == 0 || raw_offset == NO_TABLE_SENTINEL {
        debug!(raw_offset, "no job table pointer");
        return Ok(None);
    }

    let offset = match usize::try_from(raw_offset) {
        Ok(offset) if offset < data.len() => offset,
        _ => {
            debug!(raw_offset, len = data.len(), "job table pointer past end of file");
            return Ok(None);
        }
    };

    let total_records = read_u32_le(data, offset)
        .ok_or(PrgError::TableOffsetOutOfRange { offset: raw_offset, len: data.len() })?;

    // The count includes the table's own header record.
    let declared_jobs = total_records.saturating_sub(1);
    debug!(offset, total_records, "located job table");

    Ok(Some(TableLocation { offset, declared_jobs }))
}

fn decode_table(data: &[u8], table: TableLocation) -> Vec<Job> {
    if table.declared_jobs == 0 {
        return Vec::new();
    }

    let mut decrypted = data[table.offset..].to_vec();
    cipher::transform_in_place(&mut decrypted);

    let available = decrypted.len().saturating_sub(JOB_RECORD_SIZE) / JOB_RECORD_SIZE;
    let declared = usize::try_from(table.declared_jobs).unwrap_or(usize::MAX);
    let count = declared.min(available);
    if count < declared {
        debug!(declared, available, "clamping job count to table size");
    }

    decrypted[JOB_RECORD_SIZE.min(decrypted.len())..]
        .chunks_exact(JOB_RECORD_SIZE)
        .take(count)
        .filter_map(decode_record)
        .collect()
}

fn decode_record(record: &[u8]) -> Option<Job> {
    let address = read_u32_le(record, 0)?;
    let name_field = record.get(JOB_ADDRESS_LEN..JOB_ADDRESS_LEN + JOB_NAME_LEN)?;
    let name = null_terminated(name_field);
    if name.is_empty() {
        return None;
    }
    Some(Job { name, address })
}

/// Text up to the first NUL, trimmed of surrounding whitespace.
fn null_terminated(field: &[u8]) -> String {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    String::from_utf8_lossy(&field[..end]).trim().to_string()
}
