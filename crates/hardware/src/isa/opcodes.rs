//! Opcode classification and raw instruction field extraction.
//!
//! This module defines the mapping from the low 7 bits of an instruction word
//! to one of the four modeled opcode classes, and the [`InstructionBits`]
//! extension trait that pulls register and immediate fields out of a raw word.

use crate::common::constants::{IMM_SHIFT, OPCODE_MASK, RD_SHIFT, REG_MASK, RS1_SHIFT, RS2_SHIFT};

/// Raw encoding of a register-register ALU operation.
pub const OP_REG: u32 = 0x33;
/// Raw encoding of a register-immediate ALU operation.
pub const OP_IMM: u32 = 0x13;
/// Raw encoding of a memory load.
pub const OP_LOAD: u32 = 0x03;
/// Raw encoding of a memory store.
pub const OP_STORE: u32 = 0x23;

/// Instruction classification.
///
/// Every 32-bit word decodes to exactly one class; unrecognized opcodes fall
/// through to [`Opcode::Nop`] rather than raising a fault.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// Register-register addition (`rd = rs1 + rs2`).
    AluReg,
    /// Register-immediate addition (`rd = rs1 + imm`).
    AluImm,
    /// Memory load (`rd = mem[rs1 + imm]`).
    Load,
    /// Memory store (`mem[rs1 + imm] = rs2`).
    Store,
    /// No operation; also the fallback for unrecognized opcodes.
    Nop,
}

impl Opcode {
    /// Classifies the low 7 bits of a raw instruction word.
    ///
    /// # Arguments
    ///
    /// * `raw` - The full 32-bit instruction word.
    ///
    /// # Returns
    ///
    /// The matching [`Opcode`] class, or [`Opcode::Nop`] if the opcode field
    /// matches none of the four recognized encodings.
    #[inline]
    pub fn classify(raw: u32) -> Self {
        match raw & OPCODE_MASK {
            OP_REG => Self::AluReg,
            OP_IMM => Self::AluImm,
            OP_LOAD => Self::Load,
            OP_STORE => Self::Store,
            _ => Self::Nop,
        }
    }

    /// Returns `true` if this class reads a second source register (rs2).
    ///
    /// Only register-register ALU operations and stores consume rs2; for the
    /// other classes the rs2 bit range overlaps the immediate field and must
    /// not be treated as a register dependency.
    #[inline]
    pub fn reads_rs2(self) -> bool {
        matches!(self, Self::AluReg | Self::Store)
    }

    /// Returns `true` if this class reads a first source register (rs1).
    #[inline]
    pub fn reads_rs1(self) -> bool {
        !matches!(self, Self::Nop)
    }
}

/// Extension trait for extracting instruction fields from a raw 32-bit word.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode_bits(&self) -> u32;
    /// Extracts the destination register index (bits 7-11).
    fn rd(&self) -> usize;
    /// Extracts the first source register index (bits 15-19).
    fn rs1(&self) -> usize;
    /// Extracts the second source register index (bits 20-24).
    fn rs2(&self) -> usize;
    /// Extracts the 12-bit immediate (bits 20-31), zero-extended.
    fn imm(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline]
    fn opcode_bits(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline]
    fn rs1(&self) -> usize {
        ((self >> RS1_SHIFT) & REG_MASK) as usize
    }

    #[inline]
    fn rs2(&self) -> usize {
        ((self >> RS2_SHIFT) & REG_MASK) as usize
    }

    #[inline]
    fn imm(&self) -> u32 {
        self >> IMM_SHIFT
    }
}
