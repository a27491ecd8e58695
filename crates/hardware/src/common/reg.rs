//! Register file shared by both CPU models.
//!
//! This module implements the 32-entry architectural register file. It
//! performs the following:
//! 1. **Storage:** Maintains 32 integer registers of 32 bits each.
//! 2. **Invariant Enforcement:** Ensures that register 0 is hardwired to zero.
//! 3. **Debugging:** Provides a utility for dumping the complete register
//!    state.
//!
//! The single-cycle and pipelined cores use this one implementation so that
//! their architectural results stay bit-identical under differential testing.

use super::constants::NUM_REGISTERS;

/// Architectural register file.
///
/// Contains 32 general-purpose registers. Register 0 is hardwired to zero and
/// cannot be modified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u32; NUM_REGISTERS],
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self {
            regs: [0; NUM_REGISTERS],
        }
    }

    /// Reads a register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Register 0 always returns 0.
    ///
    /// # Returns
    ///
    /// The 32-bit value stored in the specified register.
    #[inline]
    pub fn read(&self, idx: usize) -> u32 {
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a value to a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Writes to register 0 are ignored.
    /// * `val` - The 32-bit value to write.
    #[inline]
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Resets every register to zero.
    pub fn reset(&mut self) {
        self.regs = [0; NUM_REGISTERS];
    }

    /// Dumps the contents of all registers to stderr.
    ///
    /// Displays registers in pairs with hexadecimal formatting for debugging
    /// purposes.
    pub fn dump(&self) {
        for i in (0..NUM_REGISTERS).step_by(2) {
            eprintln!(
                "r{:<2}={:#010x} r{:<2}={:#010x}",
                i,
                self.regs[i],
                i + 1,
                self.regs[i + 1]
            );
        }
    }
}
