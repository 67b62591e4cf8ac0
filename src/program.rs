//! Turns Intel HEX records into a [`Program`].
//!
//! Each 12-bit word is stored as two little-endian bytes, so HEX byte
//! addresses are twice the logical program address. The configuration word
//! (`__CONFIG`) lives at logical address 0xFFF; program memory is 256 words.

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::decoder::{DecodeError, Decoder, Instruction, TableDecoder};

/// Logical address of the configuration word.
pub const CONFIG_WORD_ADDRESS: u16 = 0xFFF;

/// Record kinds an Intel HEX reader produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HexRecord {
    Data { address: u16, bytes: Vec<u8> },
    EndOfFile,
    ExtendedLinearAddress(u16),
    StartSegmentAddress,
    ExtendedSegmentAddress,
    StartLinearAddress,
}

impl HexRecord {
    pub fn kind(&self) -> &'static str {
        match self {
            HexRecord::Data { .. } => "data",
            HexRecord::EndOfFile => "endOfFile",
            HexRecord::ExtendedLinearAddress(_) => "extendedLinearAddress",
            HexRecord::StartSegmentAddress => "startSegmentAddress",
            HexRecord::ExtendedSegmentAddress => "extendedSegmentAddress",
            HexRecord::StartLinearAddress => "startLinearAddress",
        }
    }
}

/// An instruction placed at a program address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statement {
    pub address: u8,
    pub instruction: Instruction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Record {
    Config(u16),
    Statement(Statement),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Program {
    records: Vec<Record>,
}

impl Program {
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn statements(&self) -> impl Iterator<Item = &Statement> {
        self.records.iter().filter_map(|record| match record {
            Record::Statement(statement) => Some(statement),
            Record::Config(_) => None,
        })
    }

    pub fn instructions(&self) -> impl Iterator<Item = &Instruction> {
        self.statements().map(|statement| &statement.instruction)
    }

    /// The last configuration word in the program, if any.
    pub fn config_word(&self) -> Option<u16> {
        self.records.iter().rev().find_map(|record| match record {
            Record::Config(word) => Some(*word),
            Record::Statement(_) => None,
        })
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}")]
pub struct AssembleError {
    /// 1-based position of the offending record.
    pub line: usize,
    #[source]
    pub kind: AssembleErrorKind,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AssembleErrorKind {
    #[error("address {0:#06x} is unexpectedly not even")]
    UnalignedAddress(u16),
    #[error("expected an even number of data bytes, got {0}; words always come in pairs")]
    OddByteCount(usize),
    #[error("unexpected configuration word length {0}; expected 2 bytes")]
    BadConfigWordLength(usize),
    #[error("address {0:02X}h is too large; must be FFh or smaller")]
    AddressOutOfRange(u16),
    #[error("unexpected extended linear address {0:#06x}, expected 0")]
    UnsupportedAddressExtension(u16),
    #[error("file continues after end-of-file record")]
    TrailingDataAfterEndOfFile,
    #[error("unexpected record type {0}")]
    UnsupportedRecordKind(&'static str),
    #[error("cannot decode word at {address:02X}h")]
    Decode {
        address: u16,
        #[source]
        source: DecodeError,
    },
}

/// Builds programs from HEX records with a pluggable [`Decoder`].
#[derive(Debug, Clone, Default)]
pub struct Assembler<D = TableDecoder> {
    decoder: D,
}

impl Assembler<TableDecoder> {
    pub fn new() -> Self {
        Self::with_decoder(TableDecoder::new())
    }
}

impl<D: Decoder> Assembler<D> {
    pub fn with_decoder(decoder: D) -> Self {
        Self { decoder }
    }

    /// Assembles records in input order; the first error aborts the run.
    ///
    /// A missing end-of-file record is accepted: assembly simply stops when
    /// the records run out.
    pub fn assemble<I>(&self, records: I) -> Result<Program, AssembleError>
    where
        I: IntoIterator,
        I::Item: Borrow<HexRecord>,
    {
        let mut program = Program::default();
        let mut records = records.into_iter().enumerate().peekable();
        let mut saw_eof = false;

        while let Some((index, record)) = records.next() {
            let line = index + 1;
            let record: &HexRecord = record.borrow();
            debug!(line, kind = record.kind(), "hex record");
            let fail = |kind| AssembleError { line, kind };

            match record {
                HexRecord::Data { address, bytes } => {
                    self.data_record(*address, bytes, &mut program.records)
                        .map_err(fail)?;
                }
                HexRecord::EndOfFile => {
                    if records.peek().is_some() {
                        return Err(fail(AssembleErrorKind::TrailingDataAfterEndOfFile));
                    }
                    saw_eof = true;
                }
                HexRecord::ExtendedLinearAddress(upper) => {
                    if *upper != 0 {
                        return Err(fail(AssembleErrorKind::UnsupportedAddressExtension(*upper)));
                    }
                }
                HexRecord::StartSegmentAddress
                | HexRecord::ExtendedSegmentAddress
                | HexRecord::StartLinearAddress => {
                    return Err(fail(AssembleErrorKind::UnsupportedRecordKind(record.kind())));
                }
            }
        }

        if !saw_eof {
            debug!("records ended without an end-of-file record");
        }
        Ok(program)
    }

    fn data_record(
        &self,
        address: u16,
        bytes: &[u8],
        out: &mut Vec<Record>,
    ) -> Result<(), AssembleErrorKind> {
        if address % 2 != 0 {
            return Err(AssembleErrorKind::UnalignedAddress(address));
        }
        let start = address / 2;

        if start == CONFIG_WORD_ADDRESS {
            let [low, high]: [u8; 2] = bytes
                .try_into()
                .map_err(|_| AssembleErrorKind::BadConfigWordLength(bytes.len()))?;
            out.push(Record::Config(u16::from_le_bytes([low, high])));
            return Ok(());
        }

        if bytes.len() % 2 != 0 {
            return Err(AssembleErrorKind::OddByteCount(bytes.len()));
        }
        for (logical, pair) in (start..).zip(bytes.chunks_exact(2)) {
            let address =
                u8::try_from(logical).map_err(|_| AssembleErrorKind::AddressOutOfRange(logical))?;
            let word = u16::from_le_bytes([pair[0], pair[1]]);
            let instruction = self
                .decoder
                .decode(word)
                .map_err(|source| AssembleErrorKind::Decode { address: logical, source })?;
            out.push(Record::Statement(Statement { address, instruction }));
        }
        Ok(())
    }
}

/// Assembles `records` with the baseline opcode table.
pub fn assemble<I>(records: I) -> Result<Program, AssembleError>
where
    I: IntoIterator,
    I::Item: Borrow<HexRecord>,
{
    Assembler::new().assemble(records)
}
