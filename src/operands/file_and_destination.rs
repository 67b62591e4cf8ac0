//! `dfffff`: register file plus the destination select bit of the
//! arithmetic/logic instructions.

use serde::{Deserialize, Serialize};

use super::field::{self, DESTINATION};
use super::{Operand, OperandError};
use crate::registers::RegisterFile;

/// Where the result of a byte-oriented operation goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    /// `d = 0`: the W register.
    Working,
    /// `d = 1`: back into the file register.
    File,
}

pub fn decode(bits: u16) -> Result<Operand, OperandError> {
    let register = field::register(bits)?;
    let destination = match field::extract(bits, DESTINATION) {
        0 => Destination::Working,
        _ => Destination::File,
    };
    Ok(Operand::FileAndDestination { register, destination })
}

pub fn encode(register: RegisterFile, destination: Destination) -> u16 {
    let mut bits = field::with_register(register);
    field::insert(&mut bits, DESTINATION, u16::from(destination == Destination::File));
    bits
}
