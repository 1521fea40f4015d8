//! PRG header validation.
//!
//! The header check is the sole gate deciding whether a buffer is a PRG file
//! at all; everything downstream assumes it passed.

use crate::error::{PrgError, PrgResult};
use crate::format::{read_u32_le, HEADER_LEN, MAGIC, MAGIC_LEN};

/// Fixed leading fields of a PRG file.
///
/// Only constructed by [`read_header`], after the signature has been confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    magic: [u8; MAGIC_LEN],
    /// Format/layout version, little-endian at bytes 16..20.
    pub version: u32,
}

impl Header {
    /// The signature bytes this header was validated against.
    pub fn magic(&self) -> &[u8; MAGIC_LEN] {
        &self.magic
    }
}

/// Validate the signature and read the version field.
///
/// Fails with [`PrgError::TooShort`] when the buffer cannot hold the signature
/// or the version, and with [`PrgError::InvalidMagic`] when the signature bytes
/// differ in any position.
pub fn read_header(data: &[u8]) -> PrgResult<Header> {
    check_magic(data)?;

    let version = read_u32_le(data, MAGIC_LEN)
        .ok_or(PrgError::TooShort { needed: HEADER_LEN, actual: data.len() })?;

    Ok(Header { magic: *MAGIC, version })
}

/// Check that `data` starts with the PRG signature.
pub fn check_magic(data: &[u8]) -> PrgResult<()> {
    let signature = data
        .get(..MAGIC_LEN)
        .ok_or(PrgError::TooShort { needed: MAGIC_LEN, actual: data.len() })?;
    if signature != MAGIC {
        return Err(PrgError::InvalidMagic);
    }
    Ok(())
}
