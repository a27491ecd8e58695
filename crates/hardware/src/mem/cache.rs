//! Direct-mapped cache.
//!
//! This module implements a byte-granular direct-mapped cache model:
//! 1. **Geometry:** 256 lines of 32 bytes each, so a 32-bit address splits
//!    into a 5-bit offset, an 8-bit index, and a 19-bit tag.
//! 2. **Access:** A single entry point classifies every access as a hit or a
//!    miss and updates the counters.
//! 3. **Fill Policy:** Misses claim the line for the new tag without
//!    refilling the block from a backing store; there is none. A read miss
//!    therefore returns zero, and bytes of the previous occupant persist at
//!    untouched offsets.
//!
//! The cache is not wired into either CPU model. It measures the locality of
//! an address stream fed to it directly.

/// Number of cache lines.
pub const NUM_LINES: usize = 256;
/// Bytes per cache block.
pub const BLOCK_SIZE: usize = 32;
/// Address bits selecting the byte within a block.
pub const OFFSET_BITS: u32 = 5;
/// Address bits selecting the line.
pub const INDEX_BITS: u32 = 8;
/// Remaining address bits forming the tag.
pub const TAG_BITS: u32 = 19;

/// One cache line: a valid bit, a tag, and a data block.
#[derive(Clone, Copy, Debug)]
struct CacheLine {
    valid: bool,
    tag: u32,
    data: [u8; BLOCK_SIZE],
}

impl CacheLine {
    const EMPTY: Self = Self {
        valid: false,
        tag: 0,
        data: [0; BLOCK_SIZE],
    };
}

/// The tag, index, and offset fields of a byte address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddressFields {
    /// Tag bits (13-31).
    pub tag: u32,
    /// Line index bits (5-12).
    pub index: u32,
    /// Byte offset bits (0-4).
    pub offset: u32,
}

/// Splits a byte address into its cache fields.
#[inline]
pub fn parse_address(address: u32) -> AddressFields {
    AddressFields {
        tag: address >> (OFFSET_BITS + INDEX_BITS),
        index: (address >> OFFSET_BITS) & ((1 << INDEX_BITS) - 1),
        offset: address & ((1 << OFFSET_BITS) - 1),
    }
}

/// Direct-mapped cache model.
#[derive(Clone, Debug)]
pub struct Cache {
    lines: [CacheLine; NUM_LINES],
    hits: u64,
    misses: u64,
    accesses: u64,
}

impl Default for Cache {
    fn default() -> Self {
        Self::new()
    }
}

impl Cache {
    /// Creates a cache with every line invalid and all counters zero.
    pub fn new() -> Self {
        Self {
            lines: [CacheLine::EMPTY; NUM_LINES],
            hits: 0,
            misses: 0,
            accesses: 0,
        }
    }

    /// Restores the cache to its initial state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Performs one byte access.
    ///
    /// On a hit, a read copies the cached byte into `data` and a write copies
    /// `data` into the line. On a miss, the line is claimed for the new tag;
    /// a write stores `data` at its offset while a read yields zero.
    ///
    /// # Arguments
    ///
    /// * `address` - Byte address of the access.
    /// * `data` - Byte to write, or destination for the byte read.
    /// * `is_write` - `true` for a write access, `false` for a read.
    ///
    /// # Returns
    ///
    /// `true` on a hit, `false` on a miss. Every call increments the access
    /// counter and exactly one of the hit or miss counters.
    pub fn access(&mut self, address: u32, data: &mut u8, is_write: bool) -> bool {
        let fields = parse_address(address);
        self.accesses += 1;

        let line = &mut self.lines[fields.index as usize];

        if line.valid && line.tag == fields.tag {
            self.hits += 1;
            if is_write {
                line.data[fields.offset as usize] = *data;
            } else {
                *data = line.data[fields.offset as usize];
            }
            return true;
        }

        self.misses += 1;

        // Claim the line; the rest of the block keeps whatever bytes the
        // previous occupant left behind.
        line.valid = true;
        line.tag = fields.tag;

        if is_write {
            line.data[fields.offset as usize] = *data;
        } else {
            *data = 0;
        }

        false
    }

    /// Total hits.
    #[inline]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Total misses.
    #[inline]
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Total accesses.
    #[inline]
    pub fn accesses(&self) -> u64 {
        self.accesses
    }

    /// Fraction of accesses that hit, or 0.0 before the first access.
    pub fn hit_rate(&self) -> f64 {
        if self.accesses == 0 {
            return 0.0;
        }
        self.hits as f64 / self.accesses as f64
    }

    /// Fraction of accesses that missed, or 0.0 before the first access.
    pub fn miss_rate(&self) -> f64 {
        if self.accesses == 0 {
            return 0.0;
        }
        self.misses as f64 / self.accesses as f64
    }
}
