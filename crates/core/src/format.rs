//! Layout constants of the PRG container.
//!
//! Only the header fields and the job table are described here; the code
//! segment the job addresses point into is not decoded by this crate.

/// Signature occupying the first 16 bytes of every PRG file.
pub const MAGIC: &[u8; MAGIC_LEN] = b"@EDIABAS OBJECT\0";

/// Length of [`MAGIC`].
pub const MAGIC_LEN: usize = 16;

/// Size of the little-endian version field following the signature.
pub const VERSION_LEN: usize = 4;

/// Minimum number of bytes needed to read a [`crate::Header`].
pub const HEADER_LEN: usize = MAGIC_LEN + VERSION_LEN;

/// Single-byte key used to obscure the job table.
pub const XOR_KEY: u8 = 0xF7;

/// Offset of the header field holding the job table pointer.
pub const JOB_TABLE_PTR_OFFSET: usize = 0x88;

/// Smallest file that still carries the job table pointer.
pub const MIN_HEADER_SIZE: usize = JOB_TABLE_PTR_OFFSET + 4;

/// Table pointer value meaning "no job table" (besides zero).
pub const NO_TABLE_SENTINEL: u32 = 0xFFFF_FFFF;

/// Size of the address field at the start of each job record.
pub const JOB_ADDRESS_LEN: usize = 4;

/// Size of the NUL-padded name field of each job record.
pub const JOB_NAME_LEN: usize = 64;

/// Size of one job table record (address + name).
pub const JOB_RECORD_SIZE: usize = JOB_ADDRESS_LEN + JOB_NAME_LEN;

/// File extension (without the dot) used by PRG files.
pub const PRG_EXTENSION: &str = "prg";

/// Read a little-endian `u32` at `offset`, or `None` if it would run past `data`.
pub(crate) fn read_u32_le(data: &[u8], offset: usize) -> Option<u32> {
    let end = offset.checked_add(4)?;
    let bytes: [u8; 4] = data.get(offset..end)?.try_into().ok()?;
    Some(u32::from_le_bytes(bytes))
}
