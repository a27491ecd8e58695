//! CPU core models.
//!
//! Two independent cores execute the same instruction set:
//! 1. **Single-Cycle:** The reference model; one instruction per call, CPI
//!    fixed at 1.0. See [`single_cycle`].
//! 2. **Pipeline:** A 5-stage in-order pipeline with stall-on-hazard and no
//!    forwarding. See [`pipeline`].
//!
//! Both cores run against a caller-owned word-addressed memory buffer shared
//! between instruction fetch and data access, and both expose the same
//! architectural state (registers, program counter) so their results can be
//! compared instruction for instruction.

/// 5-stage pipelined CPU model.
pub mod pipeline;
/// Single-cycle reference CPU model.
pub mod single_cycle;

pub use pipeline::PipelineCpu;
pub use single_cycle::SingleCycleCpu;
