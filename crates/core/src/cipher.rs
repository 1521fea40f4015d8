//! XOR stream cipher used by the PRG job table.
//!
//! Every byte is XORed with [`XOR_KEY`], so applying the transform twice
//! yields the original input.

use crate::format::XOR_KEY;

/// Return a new buffer with every byte of `data` XORed with the table key.
///
/// The input is left untouched.
pub fn transform(data: &[u8]) -> Vec<u8> {
    data.iter().map(|b| b ^ XOR_KEY).collect()
}

/// XOR `data` with the table key in place.
pub fn transform_in_place(data: &mut [u8]) {
    for b in data.iter_mut() {
        *b ^= XOR_KEY;
    }
}
