use serde::{Serialize, Serializer};
use tracing::trace;

use crate::opcode::{self, Opcode};
use crate::operands::{self, Operand, OperandError};
use crate::pattern::WORD_MASK;

/// A decoded instruction word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instruction {
    #[serde(rename = "name", serialize_with = "opcode_name")]
    opcode: &'static Opcode,
    operands: Operand,
}

impl Instruction {
    pub fn opcode(&self) -> &'static Opcode {
        self.opcode
    }

    pub fn name(&self) -> &'static str {
        self.opcode.name
    }

    pub fn operands(&self) -> &Operand {
        &self.operands
    }

    /// The 12-bit word this instruction decodes from.
    pub fn encode(&self) -> u16 {
        self.opcode.bit_pattern.opcode() | self.operands.encode()
    }
}

fn opcode_name<S: Serializer>(opcode: &&'static Opcode, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(opcode.name)
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("no opcode matches {0:#05x}")]
    UnknownOpcode(u16),
    #[error("invalid operand in {word:#05x}")]
    Operand {
        word: u16,
        #[source]
        source: OperandError,
    },
}

pub trait Decoder {
    fn decode(&self, word: u16) -> Result<Instruction, DecodeError>;
}

/// Decoder backed by the baseline opcode table.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableDecoder;

impl TableDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Decoder for TableDecoder {
    fn decode(&self, word: u16) -> Result<Instruction, DecodeError> {
        decode(word)
    }
}

/// Decodes the low 12 bits of `word`; the upper nibble is ignored.
pub fn decode(word: u16) -> Result<Instruction, DecodeError> {
    let word = word & WORD_MASK;
    let opcode = opcode::matching(word).ok_or(DecodeError::UnknownOpcode(word))?;
    let pattern = &opcode.bit_pattern;
    let operands = operands::decode(pattern.shape(), word & pattern.operand_mask())
        .map_err(|source| DecodeError::Operand { word, source })?;
    trace!(word, name = opcode.name, "decoded");
    Ok(Instruction { opcode, operands })
}
