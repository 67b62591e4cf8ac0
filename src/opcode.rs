use std::sync::OnceLock;

use serde::Serialize;

use crate::pattern::{compile, BitPattern, WORD_MASK};
use crate::status::StatusFlags;

/// One entry of the baseline instruction table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Opcode {
    pub name: &'static str,
    pub bit_pattern: BitPattern,
    /// Instruction cycles; 2 for instructions that modify the program counter.
    pub cycles: u8,
    /// STATUS bits the instruction may change.
    pub status: StatusFlags,
}

struct OpcodeDesc {
    name: &'static str,
    pattern: &'static str,
    cycles: u8,
    status: StatusFlags,
}

const NONE: StatusFlags = StatusFlags::empty();
const Z: StatusFlags = StatusFlags::ZERO;
const C: StatusFlags = StatusFlags::CARRY;
const C_DC_Z: StatusFlags = StatusFlags::CARRY
    .union(StatusFlags::DIGIT_CARRY)
    .union(StatusFlags::ZERO);
const TO_PD: StatusFlags = StatusFlags::NOT_TIME_OUT.union(StatusFlags::NOT_POWER_DOWN);

// Lookup is first match in this order. `tris` shares its all-zero operand
// space with nop/option/sleep/clrwdt, so it has to stay after them.
#[rustfmt::skip]
const TABLE: &[OpcodeDesc] = &[
    // Byte-oriented file register operations
    OpcodeDesc { name: "addwf", pattern: "0001 11df ffff", cycles: 1, status: C_DC_Z },
    OpcodeDesc { name: "andwf", pattern: "0001 01df ffff", cycles: 1, status: Z },
    OpcodeDesc { name: "clrf", pattern: "0000 011f ffff", cycles: 1, status: Z },
    OpcodeDesc { name: "clrw", pattern: "0000 0100 0000", cycles: 1, status: Z },
    OpcodeDesc { name: "comf", pattern: "0010 01df ffff", cycles: 1, status: Z },
    OpcodeDesc { name: "decf", pattern: "0000 11df ffff", cycles: 1, status: Z },
    OpcodeDesc { name: "decfsz", pattern: "0010 11df ffff", cycles: 1, status: NONE },
    OpcodeDesc { name: "incf", pattern: "0010 10df ffff", cycles: 1, status: Z },
    OpcodeDesc { name: "incfsz", pattern: "0011 11df ffff", cycles: 1, status: NONE },
    OpcodeDesc { name: "iorwf", pattern: "0001 00df ffff", cycles: 1, status: Z },
    OpcodeDesc { name: "movf", pattern: "0010 00df ffff", cycles: 1, status: Z },
    OpcodeDesc { name: "movwf", pattern: "0000 001f ffff", cycles: 1, status: NONE },
    OpcodeDesc { name: "nop", pattern: "0000 0000 0000", cycles: 1, status: NONE },
    OpcodeDesc { name: "rlf", pattern: "0011 01df ffff", cycles: 1, status: C },
    OpcodeDesc { name: "rrf", pattern: "0011 00df ffff", cycles: 1, status: C },
    OpcodeDesc { name: "subwf", pattern: "0000 10df ffff", cycles: 1, status: C_DC_Z },
    OpcodeDesc { name: "swapf", pattern: "0011 10df ffff", cycles: 1, status: NONE },
    OpcodeDesc { name: "xorwf", pattern: "0001 10df ffff", cycles: 1, status: Z },
    // Bit-oriented file register operations
    OpcodeDesc { name: "bcf", pattern: "0100 bbbf ffff", cycles: 1, status: NONE },
    OpcodeDesc { name: "bsf", pattern: "0101 bbbf ffff", cycles: 1, status: NONE },
    OpcodeDesc { name: "btfsc", pattern: "0110 bbbf ffff", cycles: 1, status: NONE },
    OpcodeDesc { name: "btfss", pattern: "0111 bbbf ffff", cycles: 1, status: NONE },
    // Literal and control operations
    OpcodeDesc { name: "andlw", pattern: "1110 kkkk kkkk", cycles: 1, status: Z },
    OpcodeDesc { name: "call", pattern: "1001 kkkk kkkk", cycles: 2, status: NONE },
    OpcodeDesc { name: "clrwdt", pattern: "0000 0000 0100", cycles: 1, status: TO_PD },
    OpcodeDesc { name: "goto", pattern: "101k kkkk kkkk", cycles: 2, status: NONE },
    OpcodeDesc { name: "iorlw", pattern: "1101 kkkk kkkk", cycles: 1, status: Z },
    OpcodeDesc { name: "movlw", pattern: "1100 kkkk kkkk", cycles: 1, status: NONE },
    OpcodeDesc { name: "option", pattern: "0000 0000 0010", cycles: 1, status: NONE },
    OpcodeDesc { name: "retlw", pattern: "1000 kkkk kkkk", cycles: 2, status: NONE },
    OpcodeDesc { name: "sleep", pattern: "0000 0000 0011", cycles: 1, status: TO_PD },
    OpcodeDesc { name: "tris", pattern: "0000 0000 0fff", cycles: 1, status: NONE },
    OpcodeDesc { name: "xorlw", pattern: "1111 kkkk kkkk", cycles: 1, status: Z },
];

/// All 33 baseline opcodes in table order.
///
/// The table is compiled on first use. A pattern that fails to compile is a
/// bug in the table itself, so it panics rather than returning an error.
pub fn opcodes() -> &'static [Opcode] {
    static OPCODES: OnceLock<Vec<Opcode>> = OnceLock::new();
    OPCODES.get_or_init(|| {
        TABLE
            .iter()
            .map(|desc| {
                let bit_pattern = compile(desc.pattern).unwrap_or_else(|err| {
                    panic!("opcode table entry {} ({:?}): {err}", desc.name, desc.pattern)
                });
                Opcode {
                    name: desc.name,
                    bit_pattern,
                    cycles: desc.cycles,
                    status: desc.status,
                }
            })
            .collect()
    })
}

/// First opcode in table order whose pattern accepts the low 12 bits of `word`.
pub fn matching(word: u16) -> Option<&'static Opcode> {
    let word = word & WORD_MASK;
    opcodes().iter().find(|op| op.bit_pattern.matches(word))
}

/// Looks an opcode up by its mnemonic.
pub fn by_name(name: &str) -> Option<&'static Opcode> {
    opcodes().iter().find(|op| op.name == name)
}
