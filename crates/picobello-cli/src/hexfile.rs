//! Intel HEX text to [`HexRecord`]s, and on to a decoded [`Program`].

use std::path::Path;

use anyhow::{Context, Result};
use ihex::{Reader, ReaderOptions, Record};
use tracing::debug;

use picobello::{HexRecord, Program};

pub fn to_hex_record(record: Record) -> HexRecord {
    match record {
        Record::Data { offset, value } => HexRecord::Data { address: offset, bytes: value },
        Record::EndOfFile => HexRecord::EndOfFile,
        Record::ExtendedLinearAddress(upper) => HexRecord::ExtendedLinearAddress(upper),
        Record::ExtendedSegmentAddress(_) => HexRecord::ExtendedSegmentAddress,
        Record::StartSegmentAddress { .. } => HexRecord::StartSegmentAddress,
        Record::StartLinearAddress(_) => HexRecord::StartLinearAddress,
    }
}

/// Parses every record in `text`. Records after end-of-file are kept so the
/// assembler can reject them.
pub fn read_records(text: &str) -> Result<Vec<HexRecord>> {
    let options = ReaderOptions { stop_after_first_error: true, stop_after_eof: false };
    Reader::new_with_options(text, options)
        .enumerate()
        .map(|(index, record)| {
            record.map(to_hex_record).with_context(|| format!("hex record {}", index + 1))
        })
        .collect()
}

pub fn parse(text: &str) -> Result<Program> {
    let records = read_records(text)?;
    debug!(records = records.len(), "parsed hex");
    Ok(picobello::assemble(&records)?)
}

pub fn load(path: &Path) -> Result<Program> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    parse(&text).with_context(|| format!("disassembling {}", path.display()))
}
