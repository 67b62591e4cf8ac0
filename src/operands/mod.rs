//! Typed operands and the per-shape codecs that move them in and out of the
//! operand bits of an instruction word.
//!
//! Every codec works on operand bits alone: callers mask the opcode bits off
//! before decoding and OR the opcode back in after encoding.

mod field;
pub mod file;
pub mod file_and_bit;
pub mod file_and_destination;
pub mod goto;
pub mod literal;
pub mod tris;

use serde::{Deserialize, Serialize};

use crate::pattern::OperandShape;
use crate::registers::RegisterFile;

pub use file_and_bit::BitNumber;
pub use file_and_destination::Destination;
pub use goto::Address;
pub use tris::TrisSelector;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandError {
    #[error("invalid register file number {0}; 8..=15 are reserved")]
    InvalidRegister(u8),
    #[error("invalid TRIS operand {0}; expected 6 (GPIO) or 7 (CMCON0)")]
    InvalidTrisSelector(u8),
    #[error("invalid bit number {0}; expected 0..=7")]
    InvalidBitNumber(u8),
    #[error("invalid branch address {0:#x}; expected at most 0x1ff")]
    InvalidAddress(u16),
}

/// Operands of a decoded instruction, one variant per [`OperandShape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operand {
    NoOperands,
    File {
        register: RegisterFile,
    },
    FileAndDestination {
        register: RegisterFile,
        destination: Destination,
    },
    FileAndBitNumber {
        register: RegisterFile,
        bit: BitNumber,
    },
    Literal {
        value: u8,
    },
    Goto {
        address: Address,
    },
    Tris {
        selector: TrisSelector,
    },
}

impl Operand {
    pub fn shape(&self) -> OperandShape {
        match self {
            Operand::NoOperands => OperandShape::NoOperands,
            Operand::File { .. } => OperandShape::File,
            Operand::FileAndDestination { .. } => OperandShape::FileAndDestination,
            Operand::FileAndBitNumber { .. } => OperandShape::FileAndBitNumber,
            Operand::Literal { .. } => OperandShape::Literal,
            Operand::Goto { .. } => OperandShape::Goto,
            Operand::Tris { .. } => OperandShape::Tris,
        }
    }

    /// Operand bits for this value; the opcode bits are left zero.
    pub fn encode(&self) -> u16 {
        match *self {
            Operand::NoOperands => 0,
            Operand::File { register } => file::encode(register),
            Operand::FileAndDestination { register, destination } => {
                file_and_destination::encode(register, destination)
            }
            Operand::FileAndBitNumber { register, bit } => file_and_bit::encode(register, bit),
            Operand::Literal { value } => literal::encode(value),
            Operand::Goto { address } => goto::encode(address),
            Operand::Tris { selector } => tris::encode(selector),
        }
    }
}

/// Decodes `bits` with the codec for `shape`.
pub fn decode(shape: OperandShape, bits: u16) -> Result<Operand, OperandError> {
    match shape {
        OperandShape::NoOperands => Ok(Operand::NoOperands),
        OperandShape::File => file::decode(bits),
        OperandShape::FileAndDestination => file_and_destination::decode(bits),
        OperandShape::FileAndBitNumber => file_and_bit::decode(bits),
        OperandShape::Literal => literal::decode(bits),
        OperandShape::Goto => goto::decode(bits),
        OperandShape::Tris => tris::decode(bits),
    }
}
