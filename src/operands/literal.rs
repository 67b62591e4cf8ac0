//! `kkkkkkkk`: an 8-bit literal (`movlw`, `retlw`, `call`, ...). Every value
//! is legal.

use super::field::{self, LITERAL};
use super::{Operand, OperandError};

pub fn decode(bits: u16) -> Result<Operand, OperandError> {
    Ok(Operand::Literal {
        value: field::extract(bits, LITERAL) as u8,
    })
}

pub fn encode(value: u8) -> u16 {
    let mut bits = 0;
    field::insert(&mut bits, LITERAL, u16::from(value));
    bits
}
