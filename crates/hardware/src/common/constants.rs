//! Global simulator constants.
//!
//! System-wide constants shared by the CPU models:
//! 1. **Word Geometry:** Instruction word size and register file size.
//! 2. **Instruction Fields:** Masks and shifts for the fixed 32-bit encoding.

/// Size of one instruction word in bytes. Program counters advance only in
/// multiples of this.
pub const WORD_BYTES: u32 = 4;

/// Number of architectural registers in each CPU model.
pub const NUM_REGISTERS: usize = 32;

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;

/// Bit mask for a 5-bit register index field.
pub const REG_MASK: u32 = 0x1F;

/// Bit position shift for the destination register (rd) field.
pub const RD_SHIFT: u32 = 7;

/// Bit position shift for the first source register (rs1) field.
pub const RS1_SHIFT: u32 = 15;

/// Bit position shift for the second source register (rs2) field.
pub const RS2_SHIFT: u32 = 20;

/// Bit position shift for the immediate field (bits 20-31).
pub const IMM_SHIFT: u32 = 20;
