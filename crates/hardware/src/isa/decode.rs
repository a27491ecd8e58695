//! Raw word decoding.
//!
//! Decoding is total: every 32-bit pattern produces a valid [`Instruction`].
//! Unrecognized opcodes classify as [`Opcode::Nop`] but keep their extracted
//! register fields, which matters for write-back behavior.

use super::instruction::Instruction;
use super::opcodes::{InstructionBits, Opcode};

/// Decodes a raw 32-bit instruction word.
///
/// # Arguments
///
/// * `raw` - The instruction word as fetched from memory.
/// * `pc` - Byte address the word was fetched from.
///
/// # Returns
///
/// The decoded [`Instruction`] with all fields extracted. The immediate is
/// zero-extended; no sign extension is performed.
#[inline]
pub fn decode(raw: u32, pc: u32) -> Instruction {
    Instruction {
        opcode: Opcode::classify(raw),
        rd: raw.rd(),
        rs1: raw.rs1(),
        rs2: raw.rs2(),
        imm: raw.imm(),
        pc,
    }
}
