#![allow(dead_code)]

use std::path::Path;

use prg_core::format::{JOB_RECORD_SIZE, JOB_TABLE_PTR_OFFSET, MAGIC, XOR_KEY};

const TABLE_OFFSET: usize = 0x100;

/// Build a PRG file whose job table holds `jobs` in order.
pub fn prg_with_jobs(jobs: &[(&str, u32)]) -> Vec<u8> {
    let mut data = vec![0u8; TABLE_OFFSET];
    data[..16].copy_from_slice(MAGIC);
    data[16..20].copy_from_slice(&2u32.to_le_bytes());
    data[JOB_TABLE_PTR_OFFSET..JOB_TABLE_PTR_OFFSET + 4]
        .copy_from_slice(&(TABLE_OFFSET as u32).to_le_bytes());

    data.extend_from_slice(&(jobs.len() as u32 + 1).to_le_bytes());
    data.extend(std::iter::repeat(XOR_KEY).take(JOB_RECORD_SIZE - 4));
    for (name, address) in jobs {
        let mut record = vec![0u8; JOB_RECORD_SIZE];
        record[..4].copy_from_slice(&address.to_le_bytes());
        record[4..4 + name.len()].copy_from_slice(name.as_bytes());
        data.extend(record.iter().map(|b| b ^ XOR_KEY));
    }
    data
}

/// Write a directory with one good PRG, one corrupt PRG, and an unrelated file.
pub fn populate_mixed_dir(dir: &Path) {
    std::fs::write(dir.join("C_GM5.prg"), prg_with_jobs(&[("IDENT", 0x10), ("FS_LESEN", 0x20)]))
        .unwrap();
    std::fs::write(dir.join("broken.prg"), b"garbage bytes that are not a PRG").unwrap();
    std::fs::write(dir.join("notes.txt"), b"ignore me").unwrap();
}
