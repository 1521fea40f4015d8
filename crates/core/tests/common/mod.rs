#![allow(dead_code)]

use prg_core::format::{
    JOB_NAME_LEN, JOB_RECORD_SIZE, JOB_TABLE_PTR_OFFSET, MAGIC, XOR_KEY,
};

/// Where the builder places the job table unless told otherwise.
pub const DEFAULT_TABLE_OFFSET: u32 = 0x100;

/// Builds synthetic PRG files: header, table pointer, and an encrypted job table.
#[derive(Debug, Clone)]
pub struct PrgBuilder {
    version: u32,
    table_offset: u32,
    declared_records: Option<u32>,
    records: Vec<(u32, Vec<u8>)>,
    with_table: bool,
}

impl Default for PrgBuilder {
    fn default() -> Self {
        Self {
            version: 1,
            table_offset: DEFAULT_TABLE_OFFSET,
            declared_records: None,
            records: Vec::new(),
            with_table: true,
        }
    }
}

impl PrgBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Raw value written into the table pointer field.
    pub fn table_offset(mut self, offset: u32) -> Self {
        self.table_offset = offset;
        self
    }

    /// Override the total record count (header record included).
    pub fn declared_records(mut self, count: u32) -> Self {
        self.declared_records = Some(count);
        self
    }

    pub fn job(mut self, name: &str, address: u32) -> Self {
        self.records.push((address, name.as_bytes().to_vec()));
        self
    }

    /// Record with a raw name field (copied, then NUL padded to 64 bytes).
    pub fn raw_job(mut self, name: &[u8], address: u32) -> Self {
        self.records.push((address, name.to_vec()));
        self
    }

    /// Write only the header; the pointer field still gets `table_offset`.
    ///
    /// Use this for sentinel or out-of-file pointers.
    pub fn without_table(mut self) -> Self {
        self.with_table = false;
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let offset = self.table_offset as usize;
        let header_len = if self.with_table { offset.max(JOB_TABLE_PTR_OFFSET + 4) } else { 0xA0 };
        let mut data = vec![0u8; header_len];
        data[..16].copy_from_slice(MAGIC);
        data[16..20].copy_from_slice(&self.version.to_le_bytes());
        data[JOB_TABLE_PTR_OFFSET..JOB_TABLE_PTR_OFFSET + 4]
            .copy_from_slice(&self.table_offset.to_le_bytes());

        if !self.with_table {
            return data;
        }

        let total = self.declared_records.unwrap_or(self.records.len() as u32 + 1);
        let mut table = Vec::with_capacity(JOB_RECORD_SIZE * (self.records.len() + 1));
        table.extend_from_slice(&total.to_le_bytes());
        table.extend(std::iter::repeat(XOR_KEY).take(JOB_RECORD_SIZE - 4));

        for (address, name) in &self.records {
            let mut record = vec![0u8; JOB_RECORD_SIZE];
            record[..4].copy_from_slice(&address.to_le_bytes());
            let len = name.len().min(JOB_NAME_LEN);
            record[4..4 + len].copy_from_slice(&name[..len]);
            table.extend(record.iter().map(|b| b ^ XOR_KEY));
        }

        data.extend_from_slice(&table);
        data
    }
}

/// A well-formed file with three jobs.
pub fn sample_prg() -> Vec<u8> {
    PrgBuilder::new()
        .job("INITIALISIERUNG", 0x0000_0A10)
        .job("IDENT", 0x0000_0B20)
        .job("DIAGNOSE_ENDE", 0x0000_0C30)
        .build()
}
