//! `fff`: the register selector of `tris`. Only GPIO and CMCON0 have TRIS
//! latches on these parts.

use serde::{Deserialize, Serialize};

use super::field::{self, TRIS};
use super::{Operand, OperandError};
use crate::registers::RegisterFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrisSelector {
    Gpio,
    Cmcon0,
}

impl TrisSelector {
    pub fn register(self) -> RegisterFile {
        match self {
            TrisSelector::Gpio => RegisterFile::GPIO,
            TrisSelector::Cmcon0 => RegisterFile::CMCON0,
        }
    }
}

pub fn decode(bits: u16) -> Result<Operand, OperandError> {
    let selector = match field::extract(bits, TRIS) as u8 {
        6 => TrisSelector::Gpio,
        7 => TrisSelector::Cmcon0,
        other => return Err(OperandError::InvalidTrisSelector(other)),
    };
    Ok(Operand::Tris { selector })
}

pub fn encode(selector: TrisSelector) -> u16 {
    let mut bits = 0;
    field::insert(&mut bits, TRIS, u16::from(selector.register().number()));
    bits
}
