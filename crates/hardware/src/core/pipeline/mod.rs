//! 5-stage in-order pipelined CPU.
//!
//! This module implements the pipelined CPU model. Each call to
//! [`PipelineCpu::cycle`] advances one clock edge through five stages:
//! 1. **WB:** Commits the oldest instruction to the register file and counts
//!    its retirement.
//! 2. **MEM:** Performs loads and stores against the memory buffer.
//! 3. **EX:** Reads source registers, computes the ALU result or effective
//!    address, and captures store data.
//! 4. **ID:** Detects read-after-write hazards against the instructions
//!    being executed in EX and MEM this cycle.
//! 5. **IF:** Fetches and decodes the next instruction word.
//!
//! State between stages lives in four latches (IF/ID, ID/EX, EX/MEM, MEM/WB),
//! each holding the output of the earlier stage. Stages are evaluated
//! oldest-first within a cycle so every latch is consumed before it is
//! refilled; WB both consumes the MEM/WB latch and retires its occupant in
//! the same cycle, which is why a lone instruction costs exactly
//! [`FILL_LATENCY`] + 1 cycles.
//!
//! There is no forwarding: a detected hazard freezes IF and ID, injects a
//! bubble into EX, and counts a stall.
//!
//! Memory access is idealized at one cycle. The cache and bus models are
//! deliberately not wired into MEM; they are measured separately.

/// Hazard detection logic.
pub mod hazards;
/// Latch occupancy types.
pub mod slot;

use crate::common::constants::WORD_BYTES;
use crate::common::reg::RegisterFile;
use crate::isa::{Opcode, decode};

pub use slot::{InFlight, Slot, Stage};

/// Number of pipeline stages.
pub const NUM_STAGES: usize = 5;

/// Cycles spent filling the pipeline before the first retirement.
///
/// For a program with no hazards,
/// `stall_count == cycle_count - instruction_count - FILL_LATENCY`.
pub const FILL_LATENCY: u64 = NUM_STAGES as u64 - 1;

/// 5-stage pipelined CPU model.
///
/// Architecturally equivalent to [`SingleCycleCpu`](crate::SingleCycleCpu):
/// run both over the same program and the final register files and memory
/// images match word for word. Only the timing differs.
#[derive(Clone, Debug)]
pub struct PipelineCpu {
    regs: RegisterFile,
    pc: u32,
    running: bool,
    /// Fetched last cycle; enters ID this cycle.
    if_id: Stage,
    /// Decoded last cycle; enters EX this cycle.
    id_ex: Stage,
    /// Executed last cycle; enters MEM this cycle.
    ex_mem: Stage,
    /// Accessed memory last cycle; retires through WB this cycle.
    mem_wb: Stage,
    cycle_count: u64,
    instruction_count: u64,
    stall_count: u64,
    trace: bool,
}

impl Default for PipelineCpu {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineCpu {
    /// Creates a new core with cleared registers, an empty pipeline, and the
    /// running flag set.
    pub fn new() -> Self {
        Self {
            regs: RegisterFile::new(),
            pc: 0,
            running: true,
            if_id: Stage::default(),
            id_ex: Stage::default(),
            ex_mem: Stage::default(),
            mem_wb: Stage::default(),
            cycle_count: 0,
            instruction_count: 0,
            stall_count: 0,
            trace: false,
        }
    }

    /// Restores the core to its initial state, preserving the trace flag.
    pub fn reset(&mut self) {
        let trace = self.trace;
        *self = Self::new();
        self.trace = trace;
    }

    /// Enables or disables per-cycle stage tracing on stderr.
    pub fn set_trace(&mut self, on: bool) {
        self.trace = on;
    }

    /// Advances the pipeline by one clock cycle.
    ///
    /// The cycle counter increments on every call while the core is running,
    /// including stall and drain cycles. The core halts once a fetch falls
    /// past the end of `memory` and every latch has drained to a bubble.
    ///
    /// # Arguments
    ///
    /// * `memory` - Word-addressed buffer holding both instructions and data.
    pub fn cycle(&mut self, memory: &mut [u32]) {
        if !self.running {
            return;
        }
        self.cycle_count += 1;

        // The instruction entering ID is judged against the producers being
        // executed in EX and MEM this cycle, before anything advances.
        let stall = hazards::raw_hazard(&self.if_id.slot, &self.id_ex.slot, &self.ex_mem.slot);

        self.retire();
        self.step_mem(memory);
        self.step_exec();

        let mut fetched = false;
        if stall {
            // ID/EX already drained into EX; leaving it empty is the bubble.
            // IF and ID freeze: the consumer stays put and pc does not move.
            self.stall_count += 1;
            self.if_id.stalled = true;
        } else {
            self.if_id.stalled = false;
            self.id_ex.slot = std::mem::take(&mut self.if_id.slot);
            fetched = self.step_fetch(memory);
        }

        if !fetched && self.is_empty() {
            self.running = false;
        }

        if self.trace {
            self.trace_cycle(stall);
        }
    }

    /// WB: commit and count the instruction leaving MEM/WB.
    fn retire(&mut self) {
        if let Slot::Inst(fl) = std::mem::take(&mut self.mem_wb.slot) {
            if fl.inst.writes_back() {
                self.regs.write(fl.inst.rd, fl.result);
            }
            self.instruction_count += 1;
        }
    }

    /// MEM: perform the data access on the EX/MEM occupant.
    fn step_mem(&mut self, memory: &mut [u32]) {
        let mut slot = std::mem::take(&mut self.ex_mem.slot);
        if let Slot::Inst(fl) = &mut slot {
            match fl.inst.opcode {
                Opcode::Load => {
                    let idx = (fl.result / WORD_BYTES) as usize;
                    // Out-of-range loads read as zero.
                    fl.result = memory.get(idx).copied().unwrap_or(0);
                }
                Opcode::Store => {
                    let idx = (fl.result / WORD_BYTES) as usize;
                    // Out-of-range stores are dropped.
                    if let Some(word) = memory.get_mut(idx) {
                        *word = fl.store_data;
                    }
                }
                Opcode::AluReg | Opcode::AluImm | Opcode::Nop => {}
            }
        }
        self.mem_wb.slot = slot;
    }

    /// EX: read sources and compute for the ID/EX occupant.
    ///
    /// Register reads happen after this cycle's write-back, so a producer
    /// that just retired is already visible.
    fn step_exec(&mut self) {
        let mut slot = std::mem::take(&mut self.id_ex.slot);
        if let Slot::Inst(fl) = &mut slot {
            let rs1 = self.regs.read(fl.inst.rs1);
            fl.result = match fl.inst.opcode {
                Opcode::AluReg => rs1.wrapping_add(self.regs.read(fl.inst.rs2)),
                Opcode::AluImm | Opcode::Load | Opcode::Store => rs1.wrapping_add(fl.inst.imm),
                Opcode::Nop => 0,
            };
            if fl.inst.opcode == Opcode::Store {
                fl.store_data = self.regs.read(fl.inst.rs2);
            }
        }
        self.ex_mem.slot = slot;
    }

    /// IF: fetch and decode the next word, advancing the program counter only
    /// on success.
    fn step_fetch(&mut self, memory: &[u32]) -> bool {
        let idx = (self.pc / WORD_BYTES) as usize;
        if let Some(&raw) = memory.get(idx) {
            self.if_id.slot = Slot::Inst(InFlight::new(decode(raw, self.pc)));
            self.pc = self.pc.wrapping_add(WORD_BYTES);
            true
        } else {
            false
        }
    }

    /// Cycles the pipeline until `max_instructions` have retired.
    ///
    /// Stops early if the core halts by draining after an out-of-range fetch.
    pub fn execute(&mut self, memory: &mut [u32], max_instructions: u64) {
        while self.running && self.instruction_count < max_instructions {
            self.cycle(memory);
        }
    }

    /// Runs the pipeline until it halts.
    pub fn run(&mut self, memory: &mut [u32]) {
        while self.running {
            self.cycle(memory);
        }
    }

    fn is_empty(&self) -> bool {
        self.if_id.slot.is_bubble()
            && self.id_ex.slot.is_bubble()
            && self.ex_mem.slot.is_bubble()
            && self.mem_wb.slot.is_bubble()
    }

    fn trace_cycle(&self, stalled: bool) {
        let occ = |stage: &Stage| match &stage.slot {
            Slot::Bubble => String::from("------"),
            Slot::Inst(fl) => format!("{:?}", fl.inst.opcode),
        };
        eprintln!(
            "cycle {:>6} {} IF/ID={:<6} ID/EX={:<6} EX/MEM={:<6} MEM/WB={:<6} pc={:#010x}",
            self.cycle_count,
            if stalled { "STALL" } else { "     " },
            occ(&self.if_id),
            occ(&self.id_ex),
            occ(&self.ex_mem),
            occ(&self.mem_wb),
            self.pc,
        );
    }

    /// Returns `true` while the pipeline has instructions in flight or more
    /// to fetch.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current fetch program counter, in bytes.
    #[inline]
    pub fn pc(&self) -> u32 {
        self.pc
    }

    /// Total clock cycles simulated, including stalls and drain.
    #[inline]
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    /// Total instructions retired through WB.
    #[inline]
    pub fn instruction_count(&self) -> u64 {
        self.instruction_count
    }

    /// Total cycles lost to hazard stalls.
    #[inline]
    pub fn stall_count(&self) -> u64 {
        self.stall_count
    }

    /// Cycles per retired instruction, or 0.0 before the first retirement.
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

    /// The four inter-stage latches in program order
    /// (IF/ID, ID/EX, EX/MEM, MEM/WB).
    pub fn latches(&self) -> [&Stage; 4] {
        [&self.if_id, &self.id_ex, &self.ex_mem, &self.mem_wb]
    }
}
