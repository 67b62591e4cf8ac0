//! Human-readable rendering of decoded values.
//!
//! Registers print by name where the datasheet gives one and as `1Fh` style
//! hex otherwise. Statements are prefixed with their address (`05h: ...`).

use std::fmt;

use crate::decoder::Instruction;
use crate::opcode::Opcode;
use crate::operands::{Address, BitNumber, Destination, Operand, TrisSelector};
use crate::pattern::{BitPattern, WORD_BITS};
use crate::program::{Program, Record, Statement};
use crate::registers::RegisterFile;
use crate::status::StatusFlags;

impl fmt::Display for RegisterFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{:02X}h", self.number()),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Destination::Working => "w",
            Destination::File => "f",
        })
    }
}

impl fmt::Display for BitNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03X}h", self.get())
    }
}

impl fmt::Display for TrisSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.register())
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::NoOperands => Ok(()),
            Operand::File { register } => write!(f, "{register}"),
            Operand::FileAndDestination { register, destination } => {
                write!(f, "{register}, {destination}")
            }
            Operand::FileAndBitNumber { register, bit } => {
                // Bit tests on STATUS read better with the flag name.
                let flag = (*register == RegisterFile::STATUS)
                    .then(|| StatusFlags::from_bit_number(bit.get()))
                    .flatten()
                    .and_then(StatusFlags::alias);
                match flag {
                    Some(name) => write!(f, "{register}, {name}"),
                    None => write!(f, "{register}, {bit}"),
                }
            }
            Operand::Literal { value } => write!(f, "{value:02X}h"),
            Operand::Goto { address } => write!(f, "{address}"),
            Operand::Tris { selector } => write!(f, "{selector}"),
        }
    }
}

/// Pattern notation grouped by nibble, e.g. `0001 11df ffff`.
impl fmt::Display for BitPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layout = self.shape().layout().as_bytes();
        let opcode_bits = WORD_BITS - self.shape().width();
        for i in 0..WORD_BITS {
            if i > 0 && i % 4 == 0 {
                f.write_str(" ")?;
            }
            let symbol = if i < opcode_bits {
                if self.opcode() >> (WORD_BITS - 1 - i) & 1 == 1 {
                    '1'
                } else {
                    '0'
                }
            } else {
                char::from(layout[(i - opcode_bits) as usize])
            };
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operands() {
            Operand::NoOperands => f.write_str(self.name()),
            operands => write!(f, "{} {operands}", self.name()),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}h: {}", self.address, self.instruction)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::Config(word) => write!(f, "config: {word:04X}h"),
            Record::Statement(statement) => write!(f, "{statement}"),
        }
    }
}

/// `Program (N instructions)`; the alternate form (`{:#}`) appends one line
/// per record.
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Program ({} instructions)", self.statements().count())?;
        if f.alternate() {
            for record in self.records() {
                write!(f, "\n{record}")?;
            }
        }
        Ok(())
    }
}

/// Full listing of `program`, one record per line.
pub fn listing(program: &Program) -> String {
    format!("{program:#}")
}
