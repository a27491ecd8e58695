//! # ISA Tests
//!
//! Unit tests for instruction classification, field extraction, and the
//! decoder's totality guarantees.

/// Example-based decoding tests (opcode classes, field extraction,
/// write-back and source-register predicates).
pub mod decode;

/// Property-based decoding tests over arbitrary 32-bit words.
pub mod decode_properties;
