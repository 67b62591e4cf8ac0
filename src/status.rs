use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
/// Bits of the STATUS register an instruction may change.
///
/// Bit positions follow the register layout, so a bit number taken from a
/// `btfsc STATUS, n` style operand maps straight onto a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusFlags: u8 {
const CARRY = 1 << 0;
const DIGIT_CARRY = 1 << 1;
const ZERO = 1 << 2;
const NOT_POWER_DOWN = 1 << 3;
const NOT_TIME_OUT = 1 << 4;
const COMPARATOR_WAKE_UP = 1 << 6; // CWUF
const GPIO_RESET = 1 << 7; // GPWUF
}
}

const ALIASES: [(StatusFlags, &str); 7] = [
    (StatusFlags::CARRY, "C"),
    (StatusFlags::DIGIT_CARRY, "DC"),
    (StatusFlags::ZERO, "Z"),
    (StatusFlags::NOT_POWER_DOWN, "NOT_PD"),
    (StatusFlags::NOT_TIME_OUT, "NOT_TO"),
    (StatusFlags::COMPARATOR_WAKE_UP, "CWUF"),
    (StatusFlags::GPIO_RESET, "GPWUF"),
];

impl StatusFlags {
    /// The single flag stored at STATUS bit `bit`, if that bit is a flag.
    pub fn from_bit_number(bit: u8) -> Option<Self> {
        Self::from_bits(1u8.checked_shl(u32::from(bit))?)
    }

    /// Datasheet name of a single flag (`"NOT_PD"`, `"Z"`, ...).
    pub fn alias(self) -> Option<&'static str> {
        ALIASES
            .iter()
            .find(|(flag, _)| *flag == self)
            .map(|(_, name)| *name)
    }
}

impl fmt::Display for StatusFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (flag, name) in ALIASES.iter().rev() {
            if self.contains(*flag) {
                if !first {
                    f.write_str(" ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}
