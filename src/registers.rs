use serde::{Deserialize, Serialize};

use crate::operands::OperandError;

/// Index into the data register file.
///
/// Special function registers occupy 0..=7 and general purpose RAM 16..=31.
/// 8..=15 are not implemented on the baseline parts and never validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RegisterFile(u8);

const NAMES: [&str; 8] = ["INDF", "TMR0", "PCL", "STATUS", "FSR", "OSCCAL", "GPIO", "CMCON0"];

impl RegisterFile {
    pub const INDF: Self = Self(0);
    pub const TMR0: Self = Self(1);
    pub const PCL: Self = Self(2);
    pub const STATUS: Self = Self(3);
    pub const FSR: Self = Self(4);
    pub const OSCCAL: Self = Self(5);
    pub const GPIO: Self = Self(6);
    pub const CMCON0: Self = Self(7);

    pub fn new(number: u8) -> Result<Self, OperandError> {
        match number {
            0..=7 | 16..=31 => Ok(Self(number)),
            _ => Err(OperandError::InvalidRegister(number)),
        }
    }

    pub fn number(self) -> u8 {
        self.0
    }

    /// Special function register name, if this is one.
    pub fn name(self) -> Option<&'static str> {
        NAMES.get(usize::from(self.0)).copied()
    }
}

impl TryFrom<u8> for RegisterFile {
    type Error = OperandError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::new(number)
    }
}

impl From<RegisterFile> for u8 {
    fn from(register: RegisterFile) -> u8 {
        register.0
    }
}
