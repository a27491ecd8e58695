//! Benchmark harness support.

/// Benchmark program generation and instruction encoding.
pub mod program;

pub use program::fill_benchmark;
