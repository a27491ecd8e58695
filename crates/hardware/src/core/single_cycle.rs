//! Single-cycle reference CPU.
//!
//! This module implements the baseline CPU model against which the pipeline
//! is compared. It performs the following:
//! 1. **Fetch:** Reads the instruction word at the current program counter.
//! 2. **Execute:** Decodes and fully executes the instruction in one call.
//! 3. **Accounting:** Advances the cycle and instruction counters in
//!    lockstep, so CPI is 1.0 by construction.
//!
//! Fetching past the end of the memory buffer halts the core; it stays halted
//! until [`SingleCycleCpu::reset`].

use crate::common::constants::WORD_BYTES;
use crate::common::reg::RegisterFile;
use crate::isa::{Instruction, Opcode, decode};

/// Single-cycle CPU model.
///
/// Every instruction completes in exactly one call to
/// [`execute_one`](Self::execute_one); there is no overlap between
/// instructions and therefore no hazards.
#[derive(Clone, Debug)]
pub struct SingleCycleCpu {
    regs: RegisterFile,
    pc: u32,
    running: bool,
    cycle_count: u64,
    instruction_count: u64,
}

impl Default for SingleCycleCpu {
    fn default() -> Self {
        Self::new()
    }
}

impl SingleCycleCpu {
    /// Creates a new core with cleared registers, a program counter of zero,
    /// and the running flag set.
    pub fn new() -> Self {
        Self {
            regs: RegisterFile::new(),
            pc: 0,
            running: true,
            cycle_count: 0,
            instruction_count: 0,
        }
    }

    /// Restores the core to its initial state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Fetches, decodes, and executes one instruction.
    ///
    /// If the program counter points past the end of `memory`, the core halts
    /// and no state changes. Otherwise the instruction fully executes, the
    /// program counter advances by one word, and both counters increment.
    ///
    /// # Arguments
    ///
    /// * `memory` - Word-addressed buffer holding both instructions and data.
    pub fn execute_one(&mut self, memory: &mut [u32]) {
        if !self.running {
            return;
        }

        let fetch_idx = (self.pc / WORD_BYTES) as usize;
        let Some(&raw) = memory.get(fetch_idx) else {
            self.running = false;
            return;
        };

        let inst = decode(raw, self.pc);
        self.execute_decoded(&inst, memory);

        self.pc = self.pc.wrapping_add(WORD_BYTES);
        self.cycle_count += 1;
        self.instruction_count += 1;
    }

    /// Executes a decoded instruction against architectural state.
    fn execute_decoded(&mut self, inst: &Instruction, memory: &mut [u32]) {
        let rs1 = self.regs.read(inst.rs1);

        let result = match inst.opcode {
            Opcode::AluReg => rs1.wrapping_add(self.regs.read(inst.rs2)),
            Opcode::AluImm => rs1.wrapping_add(inst.imm),
            Opcode::Load => {
                let addr = rs1.wrapping_add(inst.imm);
                let idx = (addr / WORD_BYTES) as usize;
                // Out-of-range loads read as zero.
                memory.get(idx).copied().unwrap_or(0)
            }
            Opcode::Store => {
                let addr = rs1.wrapping_add(inst.imm);
                let idx = (addr / WORD_BYTES) as usize;
                // Out-of-range stores are dropped.
                if let Some(slot) = memory.get_mut(idx) {
                    *slot = self.regs.read(inst.rs2);
                }
                0
            }
            Opcode::Nop => 0,
        };

        if inst.writes_back() {
            self.regs.write(inst.rd, result);
        }
    }

    /// Executes up to `max_instructions` instructions.
    ///
    /// Stops early if the core halts by fetching past the end of memory.
    pub fn execute(&mut self, memory: &mut [u32], max_instructions: u64) {
        while self.running && self.instruction_count < max_instructions {
            self.execute_one(memory);
        }
    }

    /// Runs the core until it fetches past the end of memory.
    pub fn run(&mut self, memory: &mut [u32]) {
        while self.running {
            self.execute_one(memory);
        }
    }

    /// Returns `true` while the core has not fetched past the end of memory.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current program counter, in bytes.
    #[inline]
    pub fn pc(&self) -> u32 {
        self.pc
    }

    /// Total cycles simulated. Equal to [`instruction_count`](Self::instruction_count).
    #[inline]
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    /// Total instructions executed.
    #[inline]
    pub fn instruction_count(&self) -> u64 {
        self.instruction_count
    }

    /// Cycles per instruction, or 0.0 before the first instruction.
    ///
    /// Always exactly 1.0 once an instruction has executed.
    pub fn cpi(&self) -> f64 {
        if self.instruction_count == 0 {
            return 0.0;
        }
        self.cycle_count as f64 / self.instruction_count as f64
    }

    /// Reads an architectural register.
    #[inline]
    pub fn register(&self, idx: usize) -> u32 {
        self.regs.read(idx)
    }

    /// The full register file, for differential comparison.
    #[inline]
    pub fn registers(&self) -> &RegisterFile {
        &self.regs
    }
}
