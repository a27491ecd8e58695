//! Decoded instruction representation.

use super::opcodes::Opcode;

/// A fully decoded instruction.
///
/// All fields are extracted unconditionally at decode time; whether a field
/// is architecturally meaningful depends on the opcode class. In particular
/// the rs2 index and the immediate overlap in the raw encoding, so a load's
/// `rs2` aliases the low bits of its offset and must be ignored as a register
/// dependency.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// The instruction class.
    pub opcode: Opcode,
    /// Destination register index (bits 7-11).
    pub rd: usize,
    /// First source register index (bits 15-19).
    pub rs1: usize,
    /// Second source register index (bits 20-24).
    pub rs2: usize,
    /// Zero-extended 12-bit immediate (bits 20-31).
    pub imm: u32,
    /// Byte address the instruction was fetched from.
    pub pc: u32,
}

impl Instruction {
    /// A canonical no-op: all-zero fields with [`Opcode::Nop`].
    pub const NOP: Self = Self {
        opcode: Opcode::Nop,
        rd: 0,
        rs1: 0,
        rs2: 0,
        imm: 0,
        pc: 0,
    };

    /// Returns `true` if this instruction commits a value to its destination
    /// register.
    ///
    /// Stores never write back, and a destination of register 0 is discarded.
    /// Note that an unrecognized opcode decoded as [`Opcode::Nop`] with a
    /// nonzero rd field still writes back (value zero), matching the write
    /// enable logic of both CPU models.
    #[inline]
    pub fn writes_back(&self) -> bool {
        self.rd != 0 && self.opcode != Opcode::Store
    }
}

impl Default for Instruction {
    fn default() -> Self {
        Self::NOP
    }
}
