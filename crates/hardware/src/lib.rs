//! Educational CPU architecture simulation library.
//!
//! This crate implements four independent hardware models and the plumbing to
//! measure them:
//! 1. **ISA:** Decoding of a fixed 32-bit instruction word into four modeled
//!    opcode classes (register ALU, immediate ALU, load, store).
//! 2. **CPUs:** A single-cycle reference core (CPI always 1.0) and a 5-stage
//!    in-order pipelined core with stall-on-hazard and no forwarding.
//! 3. **Memory:** A direct-mapped cache (256 lines x 32 bytes) and a
//!    single-outstanding-transaction memory bus with analytic throughput.
//! 4. **Statistics:** Passive performance counters deriving CPI/IPC/MIPS and
//!    cache hit/miss rates.
//!
//! The models never call each other: each is driven independently through its
//! stepping operation (`cycle`, `execute_one`, `access`, `request`) against a
//! caller-owned instruction-memory buffer, and measured through its getters.
//! In particular the pipeline uses idealized single-cycle memory rather than
//! the cache or bus models; unifying them would silently change every
//! benchmark number.

/// Common types and constants (register file, field masks, word geometry).
pub mod common;
/// Simulator configuration (defaults, JSON loading, validation).
pub mod config;
/// CPU cores (single-cycle reference and 5-stage pipeline).
pub mod core;
/// Instruction set (opcodes, field extraction, decoding).
pub mod isa;
/// Memory subsystem models (direct-mapped cache, memory bus).
pub mod mem;
/// Benchmark program generation.
pub mod sim;
/// Performance counter accumulation and derived metrics.
pub mod stats;

/// Root configuration type; use `SimConfig::default()` or parse from JSON.
pub use crate::config::SimConfig;
/// 5-stage pipelined CPU model.
pub use crate::core::pipeline::PipelineCpu;
/// Single-cycle reference CPU model.
pub use crate::core::single_cycle::SingleCycleCpu;
/// Direct-mapped cache model.
pub use crate::mem::cache::Cache;
/// Memory bus model.
pub use crate::mem::bus::MemoryBus;
/// Performance counter accumulator.
pub use crate::stats::PerfCounters;
