//! `kkkkkkkkk`: the 9-bit branch target of `goto`.

use serde::{Deserialize, Serialize};

use super::field::{self, ADDRESS};
use super::{Operand, OperandError};

/// Program memory address reachable by `goto`, 0..=0x1FF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Address(u16);

impl Address {
    pub const MAX: u16 = 0x1FF;

    pub fn new(address: u16) -> Result<Self, OperandError> {
        if address <= Self::MAX {
            Ok(Self(address))
        } else {
            Err(OperandError::InvalidAddress(address))
        }
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for Address {
    type Error = OperandError;

    fn try_from(address: u16) -> Result<Self, Self::Error> {
        Self::new(address)
    }
}

impl From<Address> for u16 {
    fn from(address: Address) -> u16 {
        address.0
    }
}

pub fn decode(bits: u16) -> Result<Operand, OperandError> {
    Ok(Operand::Goto {
        address: Address(field::extract(bits, ADDRESS)),
    })
}

pub fn encode(address: Address) -> u16 {
    let mut bits = 0;
    field::insert(&mut bits, ADDRESS, address.0);
    bits
}
