//! Read-after-write hazard detection.
//!
//! With no forwarding paths, an instruction in ID must not advance while a
//! producer of one of its source registers is still in EX or MEM. Write-back
//! is not checked: WB commits at the top of the cycle, before EX reads the
//! register file, so a producer in WB is already visible.
//!
//! Source registers are class-aware. Only register-register ALU operations
//! and stores read rs2; for loads and immediate ALU operations the rs2 bit
//! range aliases the immediate field, and treating it as a dependency would
//! manufacture stalls out of offset bits.

use super::slot::Slot;

/// Checks whether the instruction entering ID depends on an in-flight
/// producer.
///
/// # Arguments
///
/// * `consumer` - The IF/ID latch occupant (entering ID this cycle).
/// * `execute` - The ID/EX latch occupant (executed in EX this cycle).
/// * `memory` - The EX/MEM latch occupant (accessing memory this cycle).
///
/// # Returns
///
/// `true` if the consumer reads a register that a valid occupant of EX or
/// MEM will write back. Bubbles, stores, and producers targeting register 0
/// never cause a hazard.
pub fn raw_hazard(consumer: &Slot, execute: &Slot, memory: &Slot) -> bool {
    let Slot::Inst(cons) = consumer else {
        return false;
    };

    [execute, memory].into_iter().any(|stage| match stage {
        Slot::Inst(prod) if prod.inst.writes_back() => {
            let rd = prod.inst.rd;
            (cons.inst.opcode.reads_rs1() && cons.inst.rs1 == rd)
                || (cons.inst.opcode.reads_rs2() && cons.inst.rs2 == rd)
        }
        _ => false,
    })
}
