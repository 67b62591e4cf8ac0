//! `bbbfffff`: register file plus a bit index (`bcf`, `bsf`, `btfsc`, `btfss`).

use serde::{Deserialize, Serialize};

use super::field::{self, BIT_NUMBER};
use super::{Operand, OperandError};
use crate::registers::RegisterFile;

/// Bit index 0..=7 within a register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct BitNumber(u8);

impl BitNumber {
    pub fn new(bit: u8) -> Result<Self, OperandError> {
        if bit < 8 {
            Ok(Self(bit))
        } else {
            Err(OperandError::InvalidBitNumber(bit))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for BitNumber {
    type Error = OperandError;

    fn try_from(bit: u8) -> Result<Self, Self::Error> {
        Self::new(bit)
    }
}

impl From<BitNumber> for u8 {
    fn from(bit: BitNumber) -> u8 {
        bit.0
    }
}

pub fn decode(bits: u16) -> Result<Operand, OperandError> {
    let register = field::register(bits)?;
    // Three bits can't exceed 7.
    let bit = BitNumber(field::extract(bits, BIT_NUMBER) as u8);
    Ok(Operand::FileAndBitNumber { register, bit })
}

pub fn encode(register: RegisterFile, bit: BitNumber) -> u16 {
    let mut bits = field::with_register(register);
    field::insert(&mut bits, BIT_NUMBER, u16::from(bit.0));
    bits
}
