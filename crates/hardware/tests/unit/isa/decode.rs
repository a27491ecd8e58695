//! # Decoder Tests
//!
//! Example-based tests for raw-word decoding: opcode classification, field
//! extraction against the fixed bit layout, and the helper predicates the
//! CPU models rely on.

use rstest::rstest;

use pipesim_core::isa::{Instruction, InstructionBits, Opcode, decode};
use pipesim_core::sim::program::{encode_alu_imm, encode_alu_reg, encode_load, encode_store};

/// Each of the four recognized opcodes classifies to its class; everything
/// else is a no-op.
#[rstest]
#[case(0x33, Opcode::AluReg)]
#[case(0x13, Opcode::AluImm)]
#[case(0x03, Opcode::Load)]
#[case(0x23, Opcode::Store)]
#[case(0x00, Opcode::Nop)]
#[case(0x7F, Opcode::Nop)]
#[case(0x6F, Opcode::Nop)]
fn opcode_classification(#[case] raw: u32, #[case] expected: Opcode) {
    assert_eq!(decode(raw, 0).opcode, expected);
}

/// All register fields and the fetch address are extracted from their
/// documented bit positions.
#[test]
fn field_extraction() {
    let inst = decode(encode_alu_reg(1, 2, 3), 8);
    assert_eq!(inst.opcode, Opcode::AluReg);
    assert_eq!(inst.rd, 1);
    assert_eq!(inst.rs1, 2);
    assert_eq!(inst.rs2, 3);
    assert_eq!(inst.pc, 8);
}

/// The immediate occupies bits 20-31 and is zero-extended, never
/// sign-extended.
#[test]
fn immediate_is_zero_extended() {
    let inst = decode(encode_alu_imm(4, 5, 0xFFF), 0);
    assert_eq!(inst.imm, 0xFFF);
    assert_eq!(inst.rs1, 5);
}

/// The rs2 field aliases the low 5 bits of the immediate; a load's offset
/// shows up in both.
#[test]
fn rs2_aliases_immediate_low_bits() {
    let inst = decode(encode_load(6, 7, 4), 0);
    assert_eq!(inst.imm, 4);
    assert_eq!(inst.rs2, 4);
}

/// Stores and register-0 destinations never write back; anything else does,
/// including unrecognized opcodes with a nonzero rd field.
#[test]
fn writes_back_predicate() {
    assert!(decode(encode_alu_reg(1, 2, 3), 0).writes_back());
    assert!(!decode(encode_alu_reg(0, 2, 3), 0).writes_back());
    assert!(!decode(encode_store(4, 8, 9), 0).writes_back());
    // Unknown opcode, rd = 5: still commits (a zero) through write-back.
    assert!(decode(0x7F | (5 << 7), 0).writes_back());
}

/// Only register-register ALU operations and stores consume rs2.
#[rstest]
#[case(Opcode::AluReg, true)]
#[case(Opcode::AluImm, false)]
#[case(Opcode::Load, false)]
#[case(Opcode::Store, true)]
#[case(Opcode::Nop, false)]
fn reads_rs2_predicate(#[case] opcode: Opcode, #[case] expected: bool) {
    assert_eq!(opcode.reads_rs2(), expected);
}

/// A no-op reads no registers at all.
#[test]
fn nop_reads_no_sources() {
    assert!(!Opcode::Nop.reads_rs1());
    assert!(Opcode::Load.reads_rs1());
}

/// The all-zero word decodes to the canonical no-op.
#[test]
fn zero_word_is_canonical_nop() {
    assert_eq!(decode(0, 0), Instruction::NOP);
}

/// The extension trait extracts the same fields as the decoder.
#[test]
fn instruction_bits_trait_matches_decoder() {
    let raw = encode_store(4, 8, 9);
    let inst = decode(raw, 0);
    assert_eq!(raw.opcode_bits(), 0x23);
    assert_eq!(raw.rd(), inst.rd);
    assert_eq!(raw.rs1(), inst.rs1);
    assert_eq!(raw.rs2(), inst.rs2);
    assert_eq!(raw.imm(), inst.imm);
}
