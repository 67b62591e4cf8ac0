//! Bit-pattern notation for opcodes.
//!
//! A pattern such as `"0001 11df ffff"` spells out one 12-bit instruction word,
//! most significant bit first. `0` and `1` are fixed opcode bits; the letters
//! name operand fields (`f` register file, `d` destination, `b` bit number,
//! `k` literal). Whitespace is ignored. The opcode bits always come first and
//! the operand letters must spell one of the known [`OperandShape`] layouts.

use serde::Serialize;

/// Number of significant bits in an instruction word.
pub const WORD_BITS: u32 = 12;
/// Mask selecting the significant bits of an instruction word.
pub const WORD_MASK: u16 = (1 << WORD_BITS) - 1;

/// Operand layouts the baseline core uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OperandShape {
    NoOperands,
    File,
    FileAndDestination,
    FileAndBitNumber,
    Literal,
    Goto,
    Tris,
}

impl OperandShape {
    pub const ALL: [Self; 7] = [
        Self::NoOperands,
        Self::File,
        Self::FileAndDestination,
        Self::FileAndBitNumber,
        Self::Literal,
        Self::Goto,
        Self::Tris,
    ];

    /// Operand letters as they appear in a pattern, whitespace stripped.
    pub const fn layout(self) -> &'static str {
        match self {
            Self::NoOperands => "",
            Self::File => "fffff",
            Self::FileAndDestination => "dfffff",
            Self::FileAndBitNumber => "bbbfffff",
            Self::Literal => "kkkkkkkk",
            Self::Goto => "kkkkkkkkk",
            Self::Tris => "fff",
        }
    }

    /// Number of low word bits the operand occupies.
    pub const fn width(self) -> u32 {
        self.layout().len() as u32
    }

    fn from_layout(layout: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|shape| shape.layout() == layout)
    }
}

/// Compiled form of a pattern: which bits identify the opcode and what the
/// remaining bits hold.
///
/// Only [`compile`] builds these, so `opcode & !mask == 0` always holds and the
/// number of clear mask bits equals `shape.width()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BitPattern {
    opcode: u16,
    mask: u16,
    shape: OperandShape,
}

impl BitPattern {
    /// Fixed opcode bits, operand bits zero.
    pub fn opcode(&self) -> u16 {
        self.opcode
    }

    /// Set for every opcode bit, clear for every operand bit.
    pub fn mask(&self) -> u16 {
        self.mask
    }

    pub fn shape(&self) -> OperandShape {
        self.shape
    }

    /// Bits of a word that carry operands.
    pub fn operand_mask(&self) -> u16 {
        !self.mask & WORD_MASK
    }

    /// Whether `word` (low 12 bits) carries this opcode.
    pub fn matches(&self, word: u16) -> bool {
        word & WORD_MASK & self.mask == self.opcode
    }

    /// Whether some 12-bit word is accepted by both patterns.
    pub fn overlaps(&self, other: &BitPattern) -> bool {
        let common = self.mask & other.mask;
        self.opcode & common == other.opcode & common
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("unexpected character in pattern: {0:?}")]
    UnexpectedCharacter(char),
    #[error("unexpected end of pattern, expected opcode")]
    MissingOpcode,
    #[error("opcode must be at most 12 bits long, got {0}")]
    OpcodeTooLong(usize),
    #[error("invalid operand pattern: {0:?}")]
    UnknownOperandShape(String),
}

fn is_operand_letter(c: char) -> bool {
    matches!(c, 'b' | 'd' | 'f' | 'k')
}

/// Compiles a pattern string like `"0000 011f ffff"`.
pub fn compile(pattern: &str) -> Result<BitPattern, PatternError> {
    let mut opcode: u16 = 0;
    let mut opcode_bits = 0usize;
    let mut rest = "";

    for (at, c) in pattern.char_indices() {
        match c {
            '0' | '1' => {
                // Keep counting past the limit so the error reports the full length.
                if opcode_bits < WORD_BITS as usize {
                    opcode = (opcode << 1) | u16::from(c == '1');
                }
                opcode_bits += 1;
            }
            c if is_operand_letter(c) => {
                rest = &pattern[at..];
                break;
            }
            c if c.is_whitespace() => {}
            c => return Err(PatternError::UnexpectedCharacter(c)),
        }
    }

    if opcode_bits == 0 {
        return Err(PatternError::MissingOpcode);
    }
    if opcode_bits > WORD_BITS as usize {
        return Err(PatternError::OpcodeTooLong(opcode_bits));
    }

    let mut layout = String::with_capacity(rest.len());
    for c in rest.chars().filter(|c| !c.is_whitespace()) {
        if !is_operand_letter(c) && c != '0' && c != '1' {
            return Err(PatternError::UnexpectedCharacter(c));
        }
        layout.push(c);
    }

    let operand_bits = WORD_BITS - opcode_bits as u32;
    let shape = OperandShape::from_layout(&layout)
        .filter(|shape| shape.width() == operand_bits)
        .ok_or(PatternError::UnknownOperandShape(layout))?;

    let mask = ((1u16 << opcode_bits) - 1) << operand_bits;
    Ok(BitPattern {
        opcode: opcode << operand_bits,
        mask,
        shape,
    })
}
