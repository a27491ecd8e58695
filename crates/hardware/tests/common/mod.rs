//! # Shared Test Infrastructure
//!
//! Helpers used across the unit tests: program construction and
//! run-to-completion drivers for both CPU models.

use pipesim_core::{PipelineCpu, SingleCycleCpu};

/// Builds a memory image from a program, padded with zero words up to
/// `total_words`.
///
/// The zero padding decodes as no-ops with destination register 0, so padded
/// regions execute without architectural effect and can double as data space.
pub fn memory_image(program: &[u32], total_words: usize) -> Vec<u32> {
    let mut memory = vec![0_u32; total_words.max(program.len())];
    memory[..program.len()].copy_from_slice(program);
    memory
}

/// Runs a program to completion on the single-cycle CPU.
///
/// Returns the halted CPU and the final memory image.
pub fn run_single_cycle(program: &[u32]) -> (SingleCycleCpu, Vec<u32>) {
    let mut memory = program.to_vec();
    let mut cpu = SingleCycleCpu::new();
    cpu.run(&mut memory);
    (cpu, memory)
}

/// Runs a program to completion on the pipelined CPU.
///
/// Returns the halted CPU and the final memory image.
pub fn run_pipeline(program: &[u32]) -> (PipelineCpu, Vec<u32>) {
    let mut memory = program.to_vec();
    let mut cpu = PipelineCpu::new();
    cpu.run(&mut memory);
    (cpu, memory)
}

/// Runs the same program to completion on both CPU models.
///
/// Each model gets its own copy of the memory image, so the two runs are
/// fully independent and their final states can be compared.
pub fn run_both(program: &[u32]) -> (SingleCycleCpu, PipelineCpu, Vec<u32>, Vec<u32>) {
    let (single, single_mem) = run_single_cycle(program);
    let (pipeline, pipeline_mem) = run_pipeline(program);
    (single, pipeline, single_mem, pipeline_mem)
}

/// Collects the full architectural register state of a CPU via its register
/// accessor.
pub fn registers_of(read: impl Fn(usize) -> u32) -> Vec<u32> {
    (0..32).map(read).collect()
}
