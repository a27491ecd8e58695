//! Benchmark program generation.
//!
//! The reference workload is a round-robin mix of the four instruction
//! classes. The registers are chosen so that no instruction reads a register
//! another in-flight instruction writes: the pipeline runs it with zero
//! stalls, which makes the mix a clean measure of fill and drain overhead.
//!
//! The encoders here are also the canonical way to build instruction words
//! anywhere else in the workspace.

use crate::common::constants::{RD_SHIFT, RS1_SHIFT, RS2_SHIFT};
use crate::isa::opcodes::{OP_IMM, OP_LOAD, OP_REG, OP_STORE};

/// Encodes a register-register ALU instruction (`rd = rs1 + rs2`).
#[inline]
pub fn encode_alu_reg(rd: u32, rs1: u32, rs2: u32) -> u32 {
    OP_REG | (rd << RD_SHIFT) | (rs1 << RS1_SHIFT) | (rs2 << RS2_SHIFT)
}

/// Encodes a register-immediate ALU instruction (`rd = rs1 + imm`).
#[inline]
pub fn encode_alu_imm(rd: u32, rs1: u32, imm: u32) -> u32 {
    OP_IMM | (rd << RD_SHIFT) | (rs1 << RS1_SHIFT) | (imm << RS2_SHIFT)
}

/// Encodes a load instruction (`rd = mem[rs1 + imm]`).
#[inline]
pub fn encode_load(rd: u32, rs1: u32, imm: u32) -> u32 {
    OP_LOAD | (rd << RD_SHIFT) | (rs1 << RS1_SHIFT) | (imm << RS2_SHIFT)
}

/// Encodes a store instruction (`mem[rs1 + imm] = rs2`).
///
/// The rd field is still encoded; stores never write it back.
#[inline]
pub fn encode_store(rd: u32, rs1: u32, rs2: u32) -> u32 {
    OP_STORE | (rd << RD_SHIFT) | (rs1 << RS1_SHIFT) | (rs2 << RS2_SHIFT)
}

/// Fills memory with the benchmark instruction mix.
///
/// Writes the round-robin pattern into `memory[0..]`, stopping at either the
/// end of the buffer or `max_instructions` words, whichever comes first.
/// Words beyond that point are left untouched.
///
/// # Arguments
///
/// * `memory` - Word-addressed buffer to fill.
/// * `max_instructions` - Upper bound on the number of words written.
pub fn fill_benchmark(memory: &mut [u32], max_instructions: u64) {
    let limit = usize::try_from(max_instructions).unwrap_or(usize::MAX);
    for (i, word) in memory.iter_mut().take(limit).enumerate() {
        *word = match i % 4 {
            0 => encode_alu_reg(1, 2, 3),
            1 => encode_alu_imm(4, 5, 10),
            2 => encode_load(6, 7, 4),
            // Store keeps a nonzero rd field; it is never written back.
            _ => encode_store(4, 8, 9),
        };
    }
}
