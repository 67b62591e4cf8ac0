//! `fffff`: a single register file (`clrf`, `movwf`).

use super::field;
use super::{Operand, OperandError};
use crate::registers::RegisterFile;

pub fn decode(bits: u16) -> Result<Operand, OperandError> {
    let register = field::register(bits)?;
    Ok(Operand::File { register })
}

pub fn encode(register: RegisterFile) -> u16 {
    field::with_register(register)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_low_five_bits() {
        assert_eq!(decode(0b00110), Ok(Operand::File { register: RegisterFile::GPIO }));
        assert_eq!(decode(0b11111), Ok(Operand::File { register: RegisterFile::new(31).unwrap() }));
    }

    #[test]
    fn reserved_register() {
        assert_eq!(decode(0b01000), Err(OperandError::InvalidRegister(8)));
        assert_eq!(decode(0b01111), Err(OperandError::InvalidRegister(15)));
    }
}
