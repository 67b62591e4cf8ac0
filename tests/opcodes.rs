use picobello::opcode::{by_name, matching, opcodes};
use picobello::operands::{Operand, TrisSelector};
use picobello::pattern::WORD_MASK;
use pretty_assertions::assert_eq;

// Fixed-word opcodes living inside tris's operand space (0x000..=0x007).
// They come before tris in the table, so first-match picks them.
const TRIS_SHADOWED: [&str; 4] = ["nop", "option", "sleep", "clrwdt"];

#[test]
fn table_is_complete() {
    let names: Vec<&str> = opcodes().iter().map(|op| op.name).collect();
    assert_eq!(
        names,
        vec![
            "addwf", "andwf", "clrf", "clrw", "comf", "decf", "decfsz", "incf", "incfsz", "iorwf",
            "movf", "movwf", "nop", "rlf", "rrf", "subwf", "swapf", "xorwf", "bcf", "bsf", "btfsc",
            "btfss", "andlw", "call", "clrwdt", "goto", "iorlw", "movlw", "option", "retlw",
            "sleep", "tris", "xorlw",
        ]
    );
}

#[test]
fn opcode_bits_stay_inside_mask() {
    for op in opcodes() {
        let p = &op.bit_pattern;
        assert_eq!(p.opcode() & !p.mask(), 0, "{}", op.name);
        assert_eq!(p.mask() & !WORD_MASK, 0, "{}", op.name);
        assert_eq!(p.operand_mask().count_ones(), p.shape().width(), "{}", op.name);
        assert!(op.cycles >= 1, "{}", op.name);
    }
}

#[test]
fn base_word_finds_its_own_opcode() {
    for op in opcodes() {
        let found = matching(op.bit_pattern.opcode()).unwrap();
        if op.name == "tris" {
            // tris with an all-zero selector is the nop encoding.
            assert_eq!(found.name, "nop");
        } else {
            assert_eq!(found, op, "{}", op.name);
        }
    }
}

#[test]
fn tris_found_with_valid_selector() {
    let tris = by_name("tris").unwrap();
    for selector in [TrisSelector::Gpio, TrisSelector::Cmcon0] {
        let word = tris.bit_pattern.opcode() | Operand::Tris { selector }.encode();
        assert_eq!(matching(word), Some(tris));
    }
}

#[test]
fn patterns_are_disjoint_apart_from_tris() {
    let ops = opcodes();
    for (i, a) in ops.iter().enumerate() {
        for b in &ops[i + 1..] {
            if !a.bit_pattern.overlaps(&b.bit_pattern) {
                continue;
            }
            assert_eq!(b.name, "tris", "{} overlaps {}", a.name, b.name);
            assert!(TRIS_SHADOWED.contains(&a.name), "{} overlaps tris", a.name);
        }
    }
}

#[test]
fn every_word_has_at_most_one_candidate() {
    for word in 0..=WORD_MASK {
        let hits: Vec<&str> = opcodes()
            .iter()
            .filter(|op| op.bit_pattern.matches(word))
            .map(|op| op.name)
            .collect();
        match hits.as_slice() {
            [] | [_] => {}
            [first, "tris"] => {
                assert!(TRIS_SHADOWED.contains(first), "{word:#05x}: {hits:?}");
                assert_eq!(matching(word).map(|op| op.name), Some(*first));
            }
            _ => panic!("{word:#05x} matches {hits:?}"),
        }
    }
}
