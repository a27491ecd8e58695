//! Instruction set definitions and decoding.
//!
//! The simulator models a fixed 32-bit instruction word with four opcode
//! classes. This module provides:
//! 1. **Opcodes:** The [`Opcode`] classification and its raw encodings.
//! 2. **Field Extraction:** The [`InstructionBits`] trait on raw words.
//! 3. **Decoding:** The [`Instruction`] type produced by [`decode`].

/// Decoding of raw words into [`Instruction`] values.
pub mod decode;
/// The decoded instruction representation.
pub mod instruction;
/// Opcode classification and raw field extraction.
pub mod opcodes;

pub use decode::decode;
pub use instruction::Instruction;
pub use opcodes::{InstructionBits, Opcode};
