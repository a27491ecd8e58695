//! # Differential Tests
//!
//! The pipelined CPU must be architecturally indistinguishable from the
//! single-cycle reference: same final registers, same final memory image,
//! same retirement count. Only the cycle accounting may differ.

use pretty_assertions::assert_eq;

use pipesim_core::sim::program::{encode_alu_imm, encode_alu_reg, encode_load, encode_store};
use pipesim_core::sim::fill_benchmark;

use crate::common::{registers_of, run_both};

fn assert_equivalent(program: &[u32]) {
    let (single, pipeline, single_mem, pipeline_mem) = run_both(program);

    assert_eq!(
        registers_of(|i| single.register(i)),
        registers_of(|i| pipeline.register(i)),
        "register files diverged"
    );
    assert_eq!(single_mem, pipeline_mem, "memory images diverged");
    assert_eq!(single.instruction_count(), pipeline.instruction_count());
}

/// Hazard-free ALU sequences produce identical state.
#[test]
fn independent_alu_program() {
    assert_equivalent(&[
        encode_alu_imm(1, 0, 11),
        encode_alu_imm(2, 0, 22),
        encode_alu_reg(3, 1, 2),
    ]);
}

/// Stall handling must not change architectural results.
#[test]
fn dependent_chain_program() {
    assert_equivalent(&[
        encode_alu_imm(1, 0, 5),
        encode_alu_reg(2, 1, 1),
        encode_alu_reg(3, 2, 1),
        encode_alu_reg(3, 3, 3),
    ]);
}

/// Loads and stores agree, including a load that observes the value a store
/// wrote moments earlier.
#[test]
fn load_store_program() {
    let mut program = vec![0_u32; 12];
    program[0] = encode_alu_imm(1, 0, 40);
    program[1] = encode_alu_imm(2, 0, 99);
    // mem[(40 + 2) / 4] = mem[10] = 99, then r5 = mem[10].
    program[2] = encode_store(0, 1, 2);
    program[3] = encode_load(5, 1, 2);
    assert_equivalent(&program);
}

/// Unrecognized opcodes zero their destination identically in both models.
#[test]
fn unknown_opcode_program() {
    assert_equivalent(&[
        encode_alu_imm(7, 0, 123),
        0x7F | (7 << 7),
        0xFFFF_FFFF,
    ]);
}

/// The reference benchmark mix agrees between models end to end.
#[test]
fn benchmark_mix_program() {
    let mut program = vec![0_u32; 64];
    fill_benchmark(&mut program, 64);
    assert_equivalent(&program);
}
