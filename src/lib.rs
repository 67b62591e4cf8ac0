//! Decoder for the 12-bit PIC baseline instruction set (PIC10F20x class) and a
//! loader that turns Intel HEX records into a decoded [`Program`].

pub mod decoder;
pub mod disasm;
pub mod opcode;
pub mod operands;
pub mod pattern;
pub mod program;
pub mod registers;
pub mod status;

pub use decoder::{decode, DecodeError, Decoder, Instruction, TableDecoder};
pub use opcode::Opcode;
pub use operands::{Operand, OperandError};
pub use pattern::{BitPattern, OperandShape, PatternError};
pub use program::{
    assemble, AssembleError, AssembleErrorKind, Assembler, HexRecord, Program, Record, Statement,
};
pub use registers::RegisterFile;
pub use status::StatusFlags;
