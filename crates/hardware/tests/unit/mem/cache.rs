//! # Cache Tests
//!
//! Hit/miss classification for the direct-mapped geometry, the claim-on-miss
//! fill policy, counter bookkeeping, and the address-partition property.

use proptest::prelude::*;

use pipesim_core::Cache;
use pipesim_core::mem::cache::{BLOCK_SIZE, INDEX_BITS, NUM_LINES, OFFSET_BITS, parse_address};

/// A span of addresses that all map to the same line index with a new tag.
const WAY_STRIDE: u32 = (NUM_LINES * BLOCK_SIZE) as u32;

/// The first access to an address always misses; an immediate repeat hits.
#[test]
fn cold_miss_then_hit() {
    let mut cache = Cache::new();
    let mut data = 0_u8;

    assert!(!cache.access(0x100, &mut data, false));
    assert!(cache.access(0x100, &mut data, false));
    assert_eq!(cache.hits(), 1);
    assert_eq!(cache.misses(), 1);
    assert_eq!(cache.accesses(), 2);
}

/// A read miss yields a logical zero; there is no backing memory to fill
/// from.
#[test]
fn read_miss_yields_zero() {
    let mut cache = Cache::new();
    let mut data = 0xFF_u8;
    cache.access(0x40, &mut data, false);
    assert_eq!(data, 0);
}

/// A write miss allocates the line and stores the byte, which a subsequent
/// read hit returns.
#[test]
fn write_allocate_then_read_back() {
    let mut cache = Cache::new();

    let mut data = 0xAB_u8;
    assert!(!cache.access(0x200, &mut data, true));

    let mut out = 0_u8;
    assert!(cache.access(0x200, &mut out, false));
    assert_eq!(out, 0xAB);
}

/// Two addresses with the same index but different tags evict each other, so
/// revisiting the first address misses again.
#[test]
fn conflicting_tags_evict() {
    let mut cache = Cache::new();
    let mut data = 0_u8;

    assert!(!cache.access(0, &mut data, false));
    assert!(!cache.access(WAY_STRIDE, &mut data, false));
    assert!(!cache.access(0, &mut data, false));
    assert_eq!(cache.hits(), 0);
    assert_eq!(cache.misses(), 3);
}

/// Distinct bytes within one block share a line: after the block is claimed,
/// sibling offsets hit.
#[test]
fn bytes_within_block_share_line() {
    let mut cache = Cache::new();
    let mut data = 0_u8;

    assert!(!cache.access(0x20, &mut data, false));
    assert!(cache.access(0x21, &mut data, false));
    assert!(cache.access(0x3F, &mut data, false));
}

/// A miss claims the line for the new tag without refilling the data block,
/// so bytes written by the previous occupant linger at untouched offsets.
#[test]
fn miss_does_not_refill_block() {
    let mut cache = Cache::new();

    let mut data = 0xAA_u8;
    cache.access(0, &mut data, true);

    // Same index, different tag: the claim resets tag and valid only.
    let mut out = 0xFF_u8;
    assert!(!cache.access(WAY_STRIDE, &mut out, false));
    assert_eq!(out, 0);

    let mut stale = 0_u8;
    assert!(cache.access(WAY_STRIDE, &mut stale, false));
    assert_eq!(stale, 0xAA);
}

/// Rates are 0.0 on a fresh cache and sum to 1.0 once any access happened.
#[test]
fn rates_degenerate_and_sum() {
    let mut cache = Cache::new();
    assert_eq!(cache.hit_rate(), 0.0);
    assert_eq!(cache.miss_rate(), 0.0);

    let mut data = 0_u8;
    for i in 0..100_u32 {
        cache.access(i * 7, &mut data, false);
    }
    assert_eq!(cache.accesses(), cache.hits() + cache.misses());
    let sum = cache.hit_rate() + cache.miss_rate();
    assert!((sum - 1.0).abs() < 1e-12);
}

/// Reset restores the post-init state: counters zeroed, every line invalid.
#[test]
fn reset_invalidates_lines() {
    let mut cache = Cache::new();
    let mut data = 0_u8;
    cache.access(0x80, &mut data, false);
    cache.access(0x80, &mut data, false);

    cache.reset();
    assert_eq!(cache.accesses(), 0);
    assert_eq!(cache.hits(), 0);
    assert_eq!(cache.misses(), 0);
    assert!(!cache.access(0x80, &mut data, false), "line must be cold again");
}

/// Spot-checks of the documented field positions.
#[test]
fn parse_address_fields() {
    let fields = parse_address(0xFFFF_FFFF);
    assert_eq!(fields.offset, 0x1F);
    assert_eq!(fields.index, 0xFF);
    assert_eq!(fields.tag, 0x7_FFFF);

    let fields = parse_address(0x1234_5678);
    assert_eq!(fields.offset, 0x18);
    assert_eq!(fields.index, 0xB3);
    assert_eq!(fields.tag, 0x91A2);
}

proptest! {
    /// Offset, index, and tag partition the address: reassembling them gives
    /// back the original, and each stays within its bit width.
    #[test]
    fn address_partition_roundtrip(address in any::<u32>()) {
        let fields = parse_address(address);
        prop_assert!(fields.offset < (1 << OFFSET_BITS));
        prop_assert!(fields.index < (1 << INDEX_BITS));
        prop_assert_eq!(
            (fields.tag << (OFFSET_BITS + INDEX_BITS)) | (fields.index << OFFSET_BITS) | fields.offset,
            address
        );
    }

    /// Every access is classified as exactly one of hit or miss.
    #[test]
    fn accesses_partition_into_hits_and_misses(addresses in prop::collection::vec(any::<u32>(), 1..200)) {
        let mut cache = Cache::new();
        let mut data = 0_u8;
        for addr in &addresses {
            cache.access(*addr, &mut data, false);
        }
        prop_assert_eq!(cache.accesses(), addresses.len() as u64);
        prop_assert_eq!(cache.hits() + cache.misses(), cache.accesses());
    }
}
