//! Memory subsystem models.
//!
//! Two standalone models, each driven and measured independently of the CPU
//! cores:
//! 1. **Cache:** A direct-mapped cache with 256 lines of 32 bytes. See
//!    [`cache`].
//! 2. **Bus:** A single-outstanding-transaction memory bus with analytic
//!    throughput and latency figures. See [`bus`].

/// Memory bus model.
pub mod bus;
/// Direct-mapped cache model.
pub mod cache;

pub use bus::{MemoryBus, TransactionKind};
pub use cache::Cache;
