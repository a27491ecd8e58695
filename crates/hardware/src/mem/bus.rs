//! Memory bus.
//!
//! This module implements a simplified shared memory bus:
//! 1. **Arbitration:** At most one transaction may be outstanding; a request
//!    against a busy bus is rejected without side effects.
//! 2. **Timing:** Every transaction completes at the next clock edge. The
//!    advertised 30 ns access latency is reported analytically rather than
//!    enforced on individual transactions.
//! 3. **Accounting:** Bytes, transaction counts, and cycles accumulate for
//!    the derived throughput and utilization figures.

/// Data width of the bus in bytes (64-bit).
pub const WIDTH_BYTES: u32 = 8;
/// Bus clock frequency in MHz.
pub const FREQUENCY_MHZ: u32 = 800;
/// Advertised memory access latency in nanoseconds.
pub const MEMORY_ACCESS_NS: u32 = 30;

/// Direction of a bus transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransactionKind {
    /// Memory read.
    Read,
    /// Memory write.
    Write,
}

/// Memory bus model.
#[derive(Clone, Copy, Debug, Default)]
pub struct MemoryBus {
    cycle_count: u64,
    read_transactions: u64,
    write_transactions: u64,
    total_bytes: u64,
    busy: bool,
}

impl MemoryBus {
    /// Creates an idle bus with all counters zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores the bus to its initial state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Requests a transaction.
    ///
    /// The address does not influence timing in this model; only the
    /// transferred size is accounted.
    ///
    /// # Arguments
    ///
    /// * `kind` - Whether the transaction reads or writes memory.
    /// * `size` - Transaction size in bytes.
    ///
    /// # Returns
    ///
    /// `true` if the bus accepted the transaction, `false` if it was busy.
    /// A rejected request changes no state.
    pub fn request(&mut self, kind: TransactionKind, size: u32) -> bool {
        if self.busy {
            return false;
        }

        self.busy = true;
        self.total_bytes += u64::from(size);
        match kind {
            TransactionKind::Read => self.read_transactions += 1,
            TransactionKind::Write => self.write_transactions += 1,
        }

        true
    }

    /// Advances the bus by one clock cycle.
    ///
    /// Any outstanding transaction completes, freeing the bus for the next
    /// request.
    pub fn cycle(&mut self) {
        self.cycle_count += 1;
        self.busy = false;
    }

    /// Memory access latency expressed in bus cycles.
    ///
    /// 30 ns at 800 MHz (1.25 ns per cycle) is 24 cycles.
    pub fn memory_latency_cycles() -> u64 {
        u64::from(MEMORY_ACCESS_NS * FREQUENCY_MHZ) / 1000
    }

    /// Memory access latency in nanoseconds.
    pub fn memory_latency_ns() -> f64 {
        f64::from(MEMORY_ACCESS_NS)
    }

    /// Achieved throughput in MB/s, or 0.0 before the first cycle.
    pub fn throughput_mbps(&self) -> f64 {
        if self.cycle_count == 0 {
            return 0.0;
        }
        let bytes_per_cycle = self.total_bytes as f64 / self.cycle_count as f64;
        let bytes_per_second = bytes_per_cycle * f64::from(FREQUENCY_MHZ) * 1_000_000.0;
        bytes_per_second / (1024.0 * 1024.0)
    }

    /// Achieved throughput as a fraction of the peak `width x frequency`
    /// bandwidth, or 0.0 before the first cycle.
    pub fn bandwidth_utilization(&self) -> f64 {
        if self.cycle_count == 0 {
            return 0.0;
        }
        let max_throughput = f64::from(WIDTH_BYTES * FREQUENCY_MHZ);
        self.throughput_mbps() / max_throughput
    }

    /// Returns `true` while a transaction is outstanding.
    #[inline]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Total cycles elapsed.
    #[inline]
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    /// Total accepted read transactions.
    #[inline]
    pub fn read_transactions(&self) -> u64 {
        self.read_transactions
    }

    /// Total accepted write transactions.
    #[inline]
    pub fn write_transactions(&self) -> u64 {
        self.write_transactions
    }

    /// Total bytes transferred by accepted transactions.
    #[inline]
    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }
}
