use picobello::operands::{Address, BitNumber, Operand, TrisSelector};
use picobello::{
    assemble, AssembleError, AssembleErrorKind, Assembler, DecodeError, Decoder, HexRecord,
    Instruction, OperandError, Record, RegisterFile, StatusFlags,
};
use pretty_assertions::assert_eq;

// First data line of a small PIC10F200 wake-up demo, as listed by MPASM.
const FIRST_LINE: [u8; 16] = [
    0x25, 0x00, 0x1C, 0x0C, 0x02, 0x00, 0x08, 0x0C, 0x06, 0x00, 0x63, 0x06, 0x59, 0x0A, 0xE3,
    0x06,
];

fn data(address: u16, bytes: &[u8]) -> HexRecord {
    HexRecord::Data { address, bytes: bytes.to_vec() }
}

fn failure(records: &[HexRecord]) -> AssembleError {
    assemble(records).unwrap_err()
}

fn statements(records: &[HexRecord]) -> Vec<(u8, &'static str, Operand)> {
    assemble(records)
        .unwrap()
        .statements()
        .map(|s| (s.address, s.instruction.name(), *s.instruction.operands()))
        .collect()
}

fn status_bit(flag: StatusFlags) -> BitNumber {
    BitNumber::new(flag.bits().trailing_zeros() as u8).unwrap()
}

#[test]
fn sample_line() {
    let records = [HexRecord::ExtendedLinearAddress(0), data(0, &FIRST_LINE), HexRecord::EndOfFile];
    assert_eq!(
        statements(&records),
        vec![
            (0, "movwf", Operand::File { register: RegisterFile::OSCCAL }),
            (1, "movlw", Operand::Literal { value: 0x1C }),
            (2, "option", Operand::NoOperands),
            (3, "movlw", Operand::Literal { value: 0x08 }),
            (4, "tris", Operand::Tris { selector: TrisSelector::Gpio }),
            (
                5,
                "btfsc",
                Operand::FileAndBitNumber {
                    register: RegisterFile::STATUS,
                    bit: status_bit(StatusFlags::NOT_POWER_DOWN),
                }
            ),
            (6, "goto", Operand::Goto { address: Address::new(0x59).unwrap() }),
            (
                7,
                "btfsc",
                Operand::FileAndBitNumber {
                    register: RegisterFile::STATUS,
                    bit: status_bit(StatusFlags::GPIO_RESET),
                }
            ),
        ]
    );
}

#[test]
fn addresses_follow_the_record() {
    let records = [data(0x10, &[0x25, 0x00, 0x1C, 0x0C]), data(0x00, &[0x00, 0x00])];
    let addresses: Vec<u8> = statements(&records).into_iter().map(|(a, _, _)| a).collect();
    assert_eq!(addresses, vec![8, 9, 0]);
}

#[test]
fn both_ways_of_passing_records() {
    let records = vec![data(0, &FIRST_LINE), HexRecord::EndOfFile];
    let by_ref = assemble(&records).unwrap();
    let by_value = assemble(records).unwrap();
    assert_eq!(by_ref, by_value);
    assert_eq!(by_ref.len(), 8);
}

#[test]
fn config_word() {
    let program = assemble([data(0x1FFE, &[0xEF, 0x0F]), HexRecord::EndOfFile]).unwrap();
    assert_eq!(program.records(), &[Record::Config(0x0FEF)]);
    assert_eq!(program.config_word(), Some(0x0FEF));
    assert_eq!(program.statements().count(), 0);
    assert_eq!(program.into_records(), vec![Record::Config(0x0FEF)]);
}

#[test]
fn config_word_must_be_two_bytes() {
    for bytes in [&[0xEF][..], &[0xEF, 0x0F, 0x00][..]] {
        assert_eq!(
            failure(&[data(0x1FFE, bytes)]),
            AssembleError { line: 1, kind: AssembleErrorKind::BadConfigWordLength(bytes.len()) }
        );
    }
}

#[test]
fn extended_linear_address_must_be_zero() {
    assert!(assemble([HexRecord::ExtendedLinearAddress(0)]).unwrap().is_empty());
    assert_eq!(
        failure(&[HexRecord::ExtendedLinearAddress(1)]),
        AssembleError { line: 1, kind: AssembleErrorKind::UnsupportedAddressExtension(1) }
    );
}

#[test]
fn odd_address() {
    assert_eq!(
        failure(&[data(0, &[0, 0]), data(3, &[0, 0])]),
        AssembleError { line: 2, kind: AssembleErrorKind::UnalignedAddress(3) }
    );
}

#[test]
fn odd_byte_count() {
    assert_eq!(
        failure(&[data(0, &[0x25, 0x00, 0x1C])]),
        AssembleError { line: 1, kind: AssembleErrorKind::OddByteCount(3) }
    );
}

#[test]
fn address_past_program_memory() {
    assert_eq!(
        failure(&[data(0x200, &[0, 0])]),
        AssembleError { line: 1, kind: AssembleErrorKind::AddressOutOfRange(0x100) }
    );
    // A record running off the end fails as a whole.
    assert_eq!(
        failure(&[data(0x1FE, &[0xFF, 0x0F, 0x00, 0x00])]),
        AssembleError { line: 1, kind: AssembleErrorKind::AddressOutOfRange(0x100) }
    );
}

#[test]
fn last_word_of_program_memory() {
    assert_eq!(
        statements(&[data(0x1FE, &[0xFF, 0x0F])]),
        vec![(0xFF, "xorlw", Operand::Literal { value: 0xFF })]
    );
}

#[test]
fn nothing_after_end_of_file() {
    assert_eq!(
        failure(&[data(0, &[0, 0]), HexRecord::EndOfFile, data(2, &[0, 0])]),
        AssembleError { line: 2, kind: AssembleErrorKind::TrailingDataAfterEndOfFile }
    );
    assert_eq!(
        failure(&[HexRecord::EndOfFile, HexRecord::EndOfFile]),
        AssembleError { line: 1, kind: AssembleErrorKind::TrailingDataAfterEndOfFile }
    );
}

#[test]
fn missing_end_of_file_is_accepted() {
    assert_eq!(statements(&[data(0, &[0x25, 0x00])]).len(), 1);
    assert!(assemble(Vec::<HexRecord>::new()).unwrap().is_empty());
}

#[test]
fn segment_and_start_records_are_rejected() {
    for (record, kind) in [
        (HexRecord::StartSegmentAddress, "startSegmentAddress"),
        (HexRecord::ExtendedSegmentAddress, "extendedSegmentAddress"),
        (HexRecord::StartLinearAddress, "startLinearAddress"),
    ] {
        assert_eq!(
            failure(&[data(0, &[0, 0]), record]),
            AssembleError { line: 2, kind: AssembleErrorKind::UnsupportedRecordKind(kind) }
        );
    }
}

#[test]
fn decode_errors_carry_line_and_address() {
    assert_eq!(
        failure(&[data(0, &[0x25, 0x00]), data(0x10, &[0x00, 0x00, 0x68, 0x00])]),
        AssembleError {
            line: 2,
            kind: AssembleErrorKind::Decode {
                address: 9,
                source: DecodeError::Operand {
                    word: 0x068,
                    source: OperandError::InvalidRegister(8),
                },
            },
        }
    );
    assert_eq!(
        failure(&[data(4, &[0x08, 0x00])]).kind,
        AssembleErrorKind::Decode { address: 2, source: DecodeError::UnknownOpcode(0x008) }
    );
}

#[test]
fn first_error_wins() {
    let err = failure(&[data(1, &[0, 0]), HexRecord::ExtendedLinearAddress(2)]);
    assert_eq!(err.line, 1);
    assert_eq!(err.to_string(), "line 1");
    assert_eq!(err.kind.to_string(), "address 0x0001 is unexpectedly not even");
}

#[test]
fn error_chain_reaches_the_operand() {
    use std::error::Error;

    let err = failure(&[data(0, &[0x6D, 0x00])]);
    let mut chain = vec![err.to_string()];
    let mut cause = err.source();
    while let Some(inner) = cause {
        chain.push(inner.to_string());
        cause = inner.source();
    }
    assert_eq!(
        chain,
        vec![
            "line 1",
            "cannot decode word at 00h",
            "invalid operand in 0x06d",
            "invalid register file number 13; 8..=15 are reserved",
        ]
    );
}

struct Refuse;

impl Decoder for Refuse {
    fn decode(&self, word: u16) -> Result<Instruction, DecodeError> {
        Err(DecodeError::UnknownOpcode(word))
    }
}

#[test]
fn custom_decoder() {
    let assembler = Assembler::with_decoder(Refuse);
    assert_eq!(
        assembler.assemble([data(0, &[0x25, 0x00])]).unwrap_err().kind,
        AssembleErrorKind::Decode { address: 0, source: DecodeError::UnknownOpcode(0x025) }
    );
    // Records that carry no instructions never reach the decoder.
    assert!(assembler.assemble([data(0x1FFE, &[0xEF, 0x0F])]).is_ok());
}
