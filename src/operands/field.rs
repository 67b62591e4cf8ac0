use std::ops::Range;

use bitvec::prelude::*;

use super::OperandError;
use crate::registers::RegisterFile;

// Field positions within the 12-bit word, bit 0 = least significant.
pub(super) const REGISTER: Range<usize> = 0..5;
pub(super) const DESTINATION: Range<usize> = 5..6;
pub(super) const BIT_NUMBER: Range<usize> = 5..8;
pub(super) const LITERAL: Range<usize> = 0..8;
pub(super) const ADDRESS: Range<usize> = 0..9;
pub(super) const TRIS: Range<usize> = 0..3;

pub(super) fn extract(bits: u16, field: Range<usize>) -> u16 {
    bits.view_bits::<Lsb0>()[field].load_le::<u16>()
}

/// Writes `value` into `field` of `bits`, truncated to the field width.
pub(super) fn insert(bits: &mut u16, field: Range<usize>, value: u16) {
    bits.view_bits_mut::<Lsb0>()[field].store_le::<u16>(value);
}

pub(super) fn register(bits: u16) -> Result<RegisterFile, OperandError> {
    RegisterFile::new(extract(bits, REGISTER) as u8)
}

pub(super) fn with_register(register: RegisterFile) -> u16 {
    let mut bits = 0;
    insert(&mut bits, REGISTER, u16::from(register.number()));
    bits
}
