//! Common utilities and types shared by both CPU models.
//!
//! This module provides the building blocks the single-cycle and pipelined
//! cores must agree on for differential testing to be meaningful:
//! 1. **Constants:** Word geometry and instruction field masks/shifts.
//! 2. **Register File:** One shared implementation with register 0 hardwired
//!    to zero.

/// Common constants used throughout the simulator.
pub mod constants;

/// Register file implementation.
pub mod reg;

pub use constants::{NUM_REGISTERS, WORD_BYTES};
pub use reg::RegisterFile;
