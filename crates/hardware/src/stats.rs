//! Performance counter accumulation and derived metrics.
//!
//! [`PerfCounters`] is a passive accumulator: the hardware models never
//! update it themselves. A harness reads deltas out of the models it drives
//! and adds them here, then derives CPI, IPC, MIPS, and cache rates. Every
//! derived metric returns 0.0 instead of dividing by zero, so a fresh or
//! partially fed accumulator is always safe to report.

use serde::Serialize;

/// Accumulated raw event counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PerfCounters {
    /// Total clock cycles.
    pub cycles: u64,
    /// Total instructions executed.
    pub instructions: u64,
    /// Cache hits.
    pub cache_hits: u64,
    /// Cache misses.
    pub cache_misses: u64,
    /// Pipeline stall cycles.
    pub stalls: u64,
}

impl PerfCounters {
    /// Creates an accumulator with all counts zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all counts.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Adds elapsed cycles.
    pub fn add_cycles(&mut self, cycles: u64) {
        self.cycles += cycles;
    }

    /// Adds executed instructions.
    pub fn add_instructions(&mut self, instructions: u64) {
        self.instructions += instructions;
    }

    /// Adds cache hit and miss counts.
    pub fn add_cache(&mut self, hits: u64, misses: u64) {
        self.cache_hits += hits;
        self.cache_misses += misses;
    }

    /// Adds pipeline stall cycles.
    pub fn add_stalls(&mut self, stalls: u64) {
        self.stalls += stalls;
    }

    /// Cycles per instruction, or 0.0 with no instructions.
    pub fn cpi(&self) -> f64 {
        if self.instructions == 0 {
            return 0.0;
        }
        self.cycles as f64 / self.instructions as f64
    }

    /// Instructions per cycle, or 0.0 with no cycles.
    pub fn ipc(&self) -> f64 {
        if self.cycles == 0 {
            return 0.0;
        }
        self.instructions as f64 / self.cycles as f64
    }

    /// Million instructions per second at the given clock, or 0.0 with no
    /// cycles.
    ///
    /// # Arguments
    ///
    /// * `clock_mhz` - CPU clock frequency in MHz.
    pub fn mips(&self, clock_mhz: u64) -> f64 {
        if self.cycles == 0 {
            return 0.0;
        }
        self.ipc() * clock_mhz as f64
    }

    /// Cache hit rate over all recorded cache events, or 0.0 with none.
    pub fn cache_hit_rate(&self) -> f64 {
        let total = self.cache_hits + self.cache_misses;
        if total == 0 {
            return 0.0;
        }
        self.cache_hits as f64 / total as f64
    }

    /// Cache miss rate over all recorded cache events, or 0.0 with none.
    pub fn cache_miss_rate(&self) -> f64 {
        let total = self.cache_hits + self.cache_misses;
        if total == 0 {
            return 0.0;
        }
        self.cache_misses as f64 / total as f64
    }

    /// Snapshots the raw counts and derived metrics for reporting.
    pub fn report(&self, clock_mhz: u64) -> MetricsReport {
        MetricsReport::from_counters(self, clock_mhz)
    }
}

/// A serializable snapshot of raw counts plus derived metrics.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct MetricsReport {
    /// Raw counts the metrics derive from.
    pub counters: PerfCounters,
    /// Cycles per instruction.
    pub cpi: f64,
    /// Instructions per cycle.
    pub ipc: f64,
    /// Million instructions per second.
    pub mips: f64,
    /// Cache hit rate.
    pub cache_hit_rate: f64,
    /// Cache miss rate.
    pub cache_miss_rate: f64,
}

impl MetricsReport {
    /// Snapshots an accumulator at the given clock frequency.
    pub fn from_counters(counters: &PerfCounters, clock_mhz: u64) -> Self {
        Self {
            counters: *counters,
            cpi: counters.cpi(),
            ipc: counters.ipc(),
            mips: counters.mips(clock_mhz),
            cache_hit_rate: counters.cache_hit_rate(),
            cache_miss_rate: counters.cache_miss_rate(),
        }
    }
}
