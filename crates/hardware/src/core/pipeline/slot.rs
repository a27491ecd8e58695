//! Pipeline latch occupancy.
//!
//! Latch contents are modeled as a closed two-state type: a latch either
//! holds an in-flight instruction or a bubble. There is no third state, and
//! a bubble carries no fields, so "empty" and "instruction with garbage
//! payload" cannot be confused.

use crate::isa::Instruction;

/// Payload carried by an instruction through the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InFlight {
    /// The decoded instruction.
    pub inst: Instruction,
    /// Stage-dependent scratch value: the ALU result or effective address
    /// after EX, the loaded value after MEM.
    pub result: u32,
    /// Value to be stored, captured from the register file at EX.
    pub store_data: u32,
}

impl InFlight {
    /// Wraps a freshly decoded instruction with cleared scratch state.
    #[inline]
    pub fn new(inst: Instruction) -> Self {
        Self {
            inst,
            result: 0,
            store_data: 0,
        }
    }
}

/// Contents of one inter-stage latch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Slot {
    /// No instruction occupies the latch.
    #[default]
    Bubble,
    /// An instruction in flight.
    Inst(InFlight),
}

impl Slot {
    /// Returns `true` if the slot holds no instruction.
    #[inline]
    pub fn is_bubble(&self) -> bool {
        matches!(self, Self::Bubble)
    }
}

/// One inter-stage latch: its occupant plus a stall indicator.
///
/// The `stalled` flag records whether the feeding stage was frozen on the
/// most recent cycle; it exists for tracing and inspection and has no effect
/// on stepping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stage {
    /// The latch occupant.
    pub slot: Slot,
    /// Whether the feeding stage was frozen last cycle.
    pub stalled: bool,
}
